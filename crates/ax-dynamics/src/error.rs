//! Error types for plant construction.

use thiserror::Error;

/// Result type for dynamics operations.
pub type DynamicsResult<T> = Result<T, DynamicsError>;

/// Errors from building plant models.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DynamicsError {
    /// Invalid physical parameter.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
