//! ax-core: stable foundation for axisim.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - angle (wrap-to-(-pi, pi] with revolution counting)
//! - state (kinematic state of the controlled axis)
//! - error (shared error types)

pub mod angle;
pub mod error;
pub mod numeric;
pub mod state;

// Re-exports: nice ergonomics for downstream crates
pub use angle::*;
pub use error::{AxError, AxResult};
pub use numeric::*;
pub use state::*;
