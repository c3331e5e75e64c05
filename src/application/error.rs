//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{}: {source}", path.display())]
    Domain {
        path: PathBuf,
        #[source]
        source: DomainError,
    },

    #[error("fixture {fixture} failed: expected {expected}, got {actual}")]
    Mismatch {
        fixture: String,
        expected: u64,
        actual: u64,
    },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ApplicationError {
    /// Attach the input path to a domain error.
    pub fn domain(path: impl Into<PathBuf>, source: DomainError) -> Self {
        Self::Domain {
            path: path.into(),
            source,
        }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
