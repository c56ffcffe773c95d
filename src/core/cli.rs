//! Command line arguments for the demo application

use crate::core::errors::{ensure, ToggleResult};
use crate::toggle::config::ToggleConfig;
use bevy::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// command line arguments for the animated toggle demo
#[derive(Parser, Debug, Clone, Resource)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// path to a json toggle config, defaults are used when omitted
    #[arg(long = "config")]
    pub config_path: Option<PathBuf>,

    /// start with the toggle switched on
    #[arg(long, default_value_t = false)]
    pub on: bool,

    /// display debug information
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl CliArgs {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn validate(&self) -> ToggleResult<()> {
        if let Some(path) = &self.config_path {
            ensure!(
                path.is_file(),
                "Toggle config does not exist: {}",
                path.display()
            );
        }
        Ok(())
    }

    /// Resolve the toggle config from the file (if any) and the flags
    pub fn toggle_config(&self) -> ToggleResult<ToggleConfig> {
        let mut config = match &self.config_path {
            Some(path) => ToggleConfig::load(path)?,
            None => ToggleConfig::default(),
        };
        if self.on {
            config.is_on = true;
        }
        config.validate()?;
        Ok(config)
    }
}
