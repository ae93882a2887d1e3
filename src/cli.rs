//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect the static page registry
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Config file path (default: pagecfg.toml, optional)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Colored log prefixes
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
    pub color: Option<bool>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the descriptor registered for a page
    Get {
        /// Page identifier, e.g. `home`
        page_id: String,
    },

    /// List every registered page
    List,

    /// Check the page table against its conventions
    Check,

    /// Print the content sections
    Sections,
}
