//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business rule failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Storage I/O failed: {0}")]
    Io(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for RepoError {
    fn from(err: std::io::Error) -> Self {
        RepoError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(err: serde_json::Error) -> Self {
        RepoError::Serialization(err.to_string())
    }
}
