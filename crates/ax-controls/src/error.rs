//! Error types for control law operations.

use thiserror::Error;

/// Result type for control law operations.
pub type ControlResult<T> = Result<T, ControlError>;

/// Errors that can occur when building or evaluating controllers.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ControlError {
    /// Invalid argument provided to a constructor.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Control law tag not recognized at a string boundary.
    #[error("Unknown control law: {name}")]
    UnknownLaw { name: String },
}
