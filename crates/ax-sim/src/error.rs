//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered while integrating a trajectory.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Convergence failed: {what}")]
    ConvergenceFailed { what: String },

    #[error("Deadline exceeded after {elapsed_ms} ms at t = {t}")]
    DeadlineExceeded { t: f64, elapsed_ms: u128 },

    #[error("Control error: {0}")]
    Control(#[from] ax_controls::ControlError),

    #[error("Dynamics error: {0}")]
    Dynamics(#[from] ax_dynamics::DynamicsError),

    #[error("Numeric error: {0}")]
    Core(#[from] ax_core::AxError),
}

pub type SimResult<T> = Result<T, SimError>;
