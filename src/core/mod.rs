//! Core application functionality
//!
//! This module contains:
//! - Application initialization
//! - Settings and CLI handling
//! - Error handling helpers

pub mod app;
pub mod cli;
pub mod errors;
pub mod settings;

// Re-export commonly used items
pub use app::create_app;
pub use cli::CliArgs;
pub use errors::ToggleResult;
pub use settings::ToggleSettings;
