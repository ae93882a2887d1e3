//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

pub fn r#true() -> bool {
    true
}

/// Config file looked up in the working directory when `-C` is not given.
pub fn config_path() -> std::path::PathBuf {
    "pagecfg.toml".into()
}

// ============================================================================
// [output] Section Defaults
// ============================================================================

pub mod output {
    use super::super::OutputFormat;

    pub fn format() -> OutputFormat {
        OutputFormat::Text
    }
}
