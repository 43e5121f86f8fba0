//! Error types for loading configuration documents.

use thiserror::Error;

/// Errors that can occur while loading a configuration document.
#[derive(Debug, Error)]
pub enum Error {
    /// The YAML text could not be parsed.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The JSON text could not be parsed.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed, but its top level is not a mapping.
    #[error("config document must be a mapping at the top level, found {found}")]
    NotAMapping {
        /// Kind of value found at the top level.
        found: &'static str,
    },
}

/// Result type alias for document operations.
pub type Result<T> = std::result::Result<T, Error>;
