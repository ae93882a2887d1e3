//! `[output]` section configuration.
//!
//! Controls how the CLI prints descriptors.

use super::defaults;
use clap::ValueEnum;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// Printed representation of registry data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned, human-readable lines
    Text,
    /// Descriptors in their JSON wire form
    Json,
}

/// `[output]` section in pagecfg.toml.
///
/// # Example
/// ```toml
/// [output]
/// format = "json"
/// color = false  # omit to color only on a terminal
/// pretty = false   # one JSON document per line
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "defaults::output::format")]
    #[educe(Default = defaults::output::format())]
    pub format: OutputFormat,

    /// Force colored `[module]` prefixes on or off.
    /// Unset: colored only when writing to a terminal.
    #[serde(default)]
    pub color: Option<bool>,

    /// Pretty-print JSON output.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub pretty: bool,
}
