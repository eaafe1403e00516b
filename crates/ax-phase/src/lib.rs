//! Phase portraits for the controlled axis.
//!
//! A phase portrait runs the trajectory integrator from a Cartesian grid of
//! initial conditions and collects the resulting state histories for
//! plotting in the `(theta, omega)` plane.
//!
//! Cells are independent by construction, so generation fans out over a
//! rayon thread pool and joins at grid assembly. Failure is fail-fast: one
//! bad cell aborts the grid with its coordinates attached.

pub mod error;
pub mod generate;
pub mod grid;

// Re-exports for public API
pub use error::{PhaseError, PhaseResult};
pub use generate::{generate_grid, generate_grid_with};
pub use grid::{GridDefinition, PhaseCell, PhaseGrid};
