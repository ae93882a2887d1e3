//! Error types for the page registry.

use thiserror::Error;

/// Registry lookup errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("page `{0}` is not registered")]
    NotFound(String),
}

/// Errors from parsing page types and sections out of their text keys
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown page type `{0}` (expected home, category or static)")]
    PageType(String),

    #[error("unknown section `{0}` (expected EDITORIAL, NOTES or DIARY)")]
    Section(String),
}
