//! Errors from loading `pagecfg.toml`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file `{0}`")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("config file `{0}` is not a valid pagecfg config")]
    Parse(PathBuf, #[source] toml::de::Error),
}
