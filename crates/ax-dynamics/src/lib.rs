//! Rigid-body dynamics for a single controlled axis.
//!
//! The plant is a double integrator: a rigid body rotating about one fixed
//! axis under an applied torque. [`RigidAxis`] holds the physical parameter
//! and exposes the state-space matrices; [`ClosedLoop`] wires a controller
//! into the torque input to form the autonomous system the integrators
//! march.

pub mod closed_loop;
pub mod error;
pub mod plant;

pub use closed_loop::ClosedLoop;
pub use error::{DynamicsError, DynamicsResult};
pub use plant::RigidAxis;
