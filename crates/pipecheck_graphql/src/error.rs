//! Error types for validation service operations.
//!
//! None of these represent an invalid document: content problems come back as
//! [`pipecheck_config::ValidationResult::Invalid`]. These are failures to get
//! an answer at all.

use thiserror::Error;

/// Errors that can occur while talking to the validation service.
#[derive(Debug, Error)]
pub enum Error {
    /// The configured endpoint is not a usable URL.
    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint {
        /// The rejected endpoint.
        endpoint: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The service answered with a non-success HTTP status.
    #[error("API request failed: {0}")]
    ApiError(String),

    /// The service answered with GraphQL-level errors.
    #[error("GraphQL errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    /// The response envelope carried neither data nor errors.
    #[error("response contained no data")]
    MissingData,

    /// Response parsing failed.
    #[error("failed to parse response: {0}")]
    ParseError(String),

    /// The requested pipeline could not be loaded.
    #[error("pipeline '{pipeline}' unavailable: {reason}")]
    PipelineUnavailable {
        /// Pipeline name from the request.
        pipeline: String,
        /// Message or typename returned by the service.
        reason: String,
    },

    /// Network error.
    #[error(transparent)]
    Network(#[from] reqwest::Error),
}

/// Result type alias for validation service operations.
pub type Result<T> = std::result::Result<T, Error>;
