//!    Error handling
//!
//! This module provides error handling using anyhow.
//! Configuration and file errors carry context strings; ECS systems that can
//! fail return Bevy's own `Result` instead.

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, ensure, Error};
use anyhow::{Context, Result};

/// Result type alias for convenience throughout the crate
pub type ToggleResult<T> = Result<T>;

/// Helper functions for creating common error contexts
pub trait ToggleContext<T> {
    /// Add file operation context to an error
    fn with_file_context<P: AsRef<std::path::Path>>(
        self,
        operation: &str,
        path: P,
    ) -> ToggleResult<T>;
}

impl<T, E> ToggleContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_file_context<P: AsRef<std::path::Path>>(
        self,
        operation: &str,
        path: P,
    ) -> ToggleResult<T> {
        self.with_context(|| {
            format!("Failed to {} file: {}", operation, path.as_ref().display())
        })
    }
}

/// Validation helpers that return anyhow errors
pub fn validate_finite_coords(x: f32, y: f32) -> ToggleResult<()> {
    ensure!(x.is_finite(), "X coordinate must be finite, got: {}", x);
    ensure!(y.is_finite(), "Y coordinate must be finite, got: {}", y);
    Ok(())
}

pub fn validate_color_channels(name: &str, rgba: [f32; 4]) -> ToggleResult<()> {
    for channel in rgba {
        ensure!(
            channel.is_finite() && (0.0..=1.0).contains(&channel),
            "Color '{}' has a channel outside 0.0..=1.0: {:?}",
            name,
            rgba
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_coords() {
        assert!(validate_finite_coords(1.0, -4.0).is_ok());
        assert!(validate_finite_coords(f32::NAN, 0.0).is_err());
        assert!(validate_finite_coords(0.0, f32::INFINITY).is_err());
    }

    #[test]
    fn test_color_channels() {
        assert!(validate_color_channels("ok", [0.0, 0.5, 1.0, 1.0]).is_ok());
        let err = validate_color_channels("bad", [1.5, 0.0, 0.0, 1.0])
            .unwrap_err();
        assert!(err.to_string().contains("bad"));
    }

    #[test]
    fn test_file_context_message() {
        let io: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = io.with_file_context("read", "toggle.json").unwrap_err();
        assert_eq!(err.to_string(), "Failed to read file: toggle.json");
    }
}
