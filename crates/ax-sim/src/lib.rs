//! Trajectory simulation for the controlled axis.
//!
//! Provides:
//! - DynamicsModel trait for pluggable continuous systems
//! - Fixed-step RK4 and adaptive RKF45 integrators
//! - Request validation ahead of all numerical work
//! - Fixed-grid state recording with reconstructed control history
//! - Optional angle normalization of recorded output

pub mod error;
pub mod integrator;
pub mod model;
pub mod request;
pub mod sim;
pub mod trajectory;

// Re-exports for public API
pub use error::{SimError, SimResult};
pub use integrator::{Integrator, IntegratorType, Rk4, Rkf45};
pub use model::DynamicsModel;
pub use request::{SimOptions, SimRequest};
pub use sim::{integrate, integrate_with};
pub use trajectory::Trajectory;
