//! Error types for phase portrait generation.

use thiserror::Error;

use ax_sim::SimError;

/// Result type for phase portrait operations.
pub type PhaseResult<T> = Result<T, PhaseError>;

/// Errors from building or filling a phase grid.
///
/// Generation is fail-fast: the first failing cell aborts the whole grid,
/// carrying its coordinates, so a partially filled grid is never observable.
#[derive(Debug, Error)]
pub enum PhaseError {
    /// Invalid grid definition.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Shared parameters rejected before any cell ran.
    #[error("Simulation error: {0}")]
    Sim(#[from] SimError),

    /// One cell's integration failed.
    #[error("Cell ({row}, {col}) starting at ({theta0}, {omega0}) failed: {source}")]
    Cell {
        row: usize,
        col: usize,
        theta0: f64,
        omega0: f64,
        #[source]
        source: SimError,
    },
}
