//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent malformed puzzle input or a failed walk.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("line {line}: malformed node definition {content:?}: {reason}")]
    MalformedNode {
        line: usize,
        content: String,
        reason: &'static str,
    },

    #[error("step sequence is empty")]
    EmptySequence,

    #[error("node not found: {0}")]
    NodeNotFound(String),

    #[error("not a valid sequence symbol: {0:?}")]
    InvalidStep(char),

    #[error("terminal node {terminal} not reached within {limit} steps")]
    StepLimitExceeded { limit: u64, terminal: String },
}

impl DomainError {
    /// True for errors raised while reading the input text, as opposed to walking it.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            DomainError::MalformedNode { .. } | DomainError::EmptySequence
        )
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
