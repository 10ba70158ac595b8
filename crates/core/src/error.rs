//! Error types for the nl2sql domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

/// The top-level error type for all nl2sql prompt operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Tuning-parameter errors ---
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // --- Request validation errors ---
    #[error("Invalid request: {0}")]
    Request(#[from] RequestError),

    // --- Exemplar retrieval errors ---
    #[error("Retrieval error: {0}")]
    Retrieval(#[from] RetrievalError),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// A required tuning parameter is absent, malformed, or inconsistent.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required parameter: {0}")]
    MissingParameter(String),

    #[error("parameter {name} must be a non-negative integer, got {value:?}")]
    InvalidParameter { name: String, value: String },

    #[error("few-shot shown width ({shown}) exceeds exemplar recall width ({recall})")]
    ShownWidthExceedsRecall { shown: usize, recall: usize },

    #[error("parameter store error: {0}")]
    Source(String),
}

/// A required `ParseRequest` field is missing or empty.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("schema dataset name is empty")]
    MissingDatasetName,

    #[error("schema field name list is empty")]
    EmptyFieldList,
}

/// The exemplar retrieval collaborator failed. Propagated unmodified —
/// this crate adds no retry or suppression logic.
#[derive(Debug, Clone, Error)]
pub enum RetrievalError {
    #[error("exemplar recall failed: {0}")]
    RecallFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_displays_correctly() {
        let err = Error::Config(ConfigError::InvalidParameter {
            name: "few-shot-shown-width".into(),
            value: "abc".into(),
        });
        assert!(err.to_string().contains("few-shot-shown-width"));
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn request_error_displays_correctly() {
        let err = Error::Request(RequestError::MissingDatasetName);
        assert!(err.to_string().contains("dataset name"));
    }

    #[test]
    fn retrieval_error_wraps_collaborator_message() {
        let err = Error::Retrieval(RetrievalError::RecallFailed("index offline".into()));
        assert!(err.to_string().contains("index offline"));
    }
}
