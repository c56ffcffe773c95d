//! Toggle configuration
//!
//! Everything an editor or config file can tune about a toggle. Values are
//! checked once by `validate` when a widget is built, never per frame.

use crate::core::errors::{
    ensure, validate_color_channels, validate_finite_coords, ToggleContext,
    ToggleResult,
};
use crate::core::settings::*;
use crate::toggle::ease::EaseCurve;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    /// State the widget starts in
    pub is_on: bool,

    // Toggle parameters
    pub disabled_color: [f32; 4],
    pub enabled_color: [f32; 4],
    pub disabled_anchor: [f32; 2],
    pub enabled_anchor: [f32; 2],

    // Animation parameters
    pub animation_duration: f32,
    pub bounce_scale: f32,
    pub color_ease: EaseCurve,
    pub underlay_scale_ease: EaseCurve,
    pub move_ease: EaseCurve,
    pub bounce_ease: EaseCurve,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            is_on: false,
            disabled_color: DEFAULT_DISABLED_COLOR,
            enabled_color: DEFAULT_ENABLED_COLOR,
            disabled_anchor: DEFAULT_DISABLED_ANCHOR,
            enabled_anchor: DEFAULT_ENABLED_ANCHOR,
            animation_duration: DEFAULT_ANIMATION_DURATION,
            bounce_scale: DEFAULT_BOUNCE_SCALE,
            color_ease: EaseCurve::OutQuad,
            underlay_scale_ease: EaseCurve::OutQuad,
            move_ease: EaseCurve::InOutCubic,
            bounce_ease: EaseCurve::OutSine,
        }
    }
}

impl ToggleConfig {
    /// Load a config from a JSON file and validate it
    pub fn load<P: AsRef<Path>>(path: P) -> ToggleResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).with_file_context("read", path)?;
        let config: ToggleConfig = serde_json::from_str(&contents)
            .with_file_context("parse", path)?;
        config.validate()?;
        info!("Loaded toggle config from {}", path.display());
        Ok(config)
    }

    /// Write the config as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ToggleResult<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .with_file_context("serialize", path)?;
        fs::write(path, json).with_file_context("write", path)?;
        Ok(())
    }

    pub fn validate(&self) -> ToggleResult<()> {
        ensure!(
            self.animation_duration.is_finite()
                && self.animation_duration > 0.0,
            "animation_duration must be a positive number of seconds, got: {}",
            self.animation_duration
        );
        ensure!(
            self.bounce_scale.is_finite() && self.bounce_scale >= 0.0,
            "bounce_scale must be finite and not negative, got: {}",
            self.bounce_scale
        );
        validate_color_channels("disabled_color", self.disabled_color)?;
        validate_color_channels("enabled_color", self.enabled_color)?;
        let [x, y] = self.disabled_anchor;
        validate_finite_coords(x, y)?;
        let [x, y] = self.enabled_anchor;
        validate_finite_coords(x, y)?;
        Ok(())
    }

    pub fn disabled_color(&self) -> Color {
        srgba(self.disabled_color)
    }

    pub fn enabled_color(&self) -> Color {
        srgba(self.enabled_color)
    }

    pub fn disabled_anchor(&self) -> Vec2 {
        Vec2::from_array(self.disabled_anchor)
    }

    pub fn enabled_anchor(&self) -> Vec2 {
        Vec2::from_array(self.enabled_anchor)
    }
}

fn srgba([r, g, b, a]: [f32; 4]) -> Color {
    Color::srgba(r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ToggleConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_duration() {
        for duration in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let config = ToggleConfig {
                animation_duration: duration,
                ..default()
            };
            assert!(config.validate().is_err(), "duration {duration}");
        }
    }

    #[test]
    fn test_rejects_negative_bounce() {
        let config = ToggleConfig {
            bounce_scale: -0.1,
            ..default()
        };
        assert!(config.validate().is_err());

        let flat = ToggleConfig {
            bounce_scale: 0.0,
            ..default()
        };
        assert!(flat.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_finite_anchor() {
        let config = ToggleConfig {
            enabled_anchor: [f32::NAN, 0.0],
            ..default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_identical_anchors_are_allowed() {
        let config = ToggleConfig {
            disabled_anchor: [12.0, 4.0],
            enabled_anchor: [12.0, 4.0],
            ..default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.disabled_anchor(), config.enabled_anchor());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ToggleConfig = serde_json::from_str(
            r#"{ "is_on": true, "move_ease": "out-back" }"#,
        )
        .unwrap();
        assert!(config.is_on);
        assert_eq!(config.move_ease, EaseCurve::OutBack);
        assert_eq!(config.animation_duration, DEFAULT_ANIMATION_DURATION);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("toggle.json");
        let config = ToggleConfig {
            is_on: true,
            bounce_scale: 0.35,
            ..default()
        };
        config.save(&path).unwrap();
        assert_eq!(ToggleConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err = ToggleConfig::load("does/not/exist.json").unwrap_err();
        assert!(err.to_string().starts_with("Failed to read file"));
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{ "animation_duration": 0.0 }"#).unwrap();
        assert!(ToggleConfig::load(&path).is_err());
    }
}
