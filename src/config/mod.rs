//! CLI configuration management for `pagecfg.toml`.
//!
//! The file is optional. When `-C` is not given and `pagecfg.toml` doesn't
//! exist in the working directory, defaults are used.
//!
//! # Sections
//!
//! | Section    | Purpose                                 |
//! |------------|-----------------------------------------|
//! | `[output]` | Output format, colors, JSON layout      |
//!
//! # Example
//!
//! ```toml
//! [output]
//! format = "json"
//! pretty = false
//! ```

pub mod defaults;
mod error;
mod output;

pub use error::ConfigError;
pub use output::{OutputConfig, OutputFormat};

use crate::cli::Cli;
use anyhow::Result;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Root configuration structure representing pagecfg.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PagecfgConfig {
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl PagecfgConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Read(path.to_path_buf(), err))?;
        Self::from_str(&content).map_err(|err| ConfigError::Parse(path.to_path_buf(), err))
    }

    /// Resolve the config for a CLI invocation.
    ///
    /// An explicit `-C` path must exist. The default path is optional.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_path(path)?,
            None => {
                let path = defaults::config_path();
                if path.exists() {
                    Self::from_path(&path)?
                } else {
                    Self::default()
                }
            }
        };
        config.update_with_cli(cli);
        Ok(config)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        Self::update_option(&mut self.output.format, cli.format.as_ref());
        if cli.color.is_some() {
            self.output.color = cli.color;
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
