//! Double-integrator plant for a rigid rotating axis.

use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};

use crate::error::{DynamicsError, DynamicsResult};

/// Rigid body rotating about a single fixed axis.
///
/// The open-loop dynamics are a torque-driven double integrator:
///
/// ```text
/// d  [theta]   [0 1] [theta]   [ 0 ]
/// -- [omega] = [0 0] [omega] + [1/I] * u
/// dt
/// ```
///
/// where I is the moment of inertia (kg·m²) and u the applied torque (N·m).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidAxis {
    /// Moment of inertia about the controlled axis (kg·m²)
    pub inertia: f64,
}

impl RigidAxis {
    /// Create a new axis model.
    ///
    /// # Errors
    /// Returns error if the inertia is not physical (zero, negative, or
    /// non-finite).
    pub fn new(inertia: f64) -> DynamicsResult<Self> {
        if !inertia.is_finite() {
            return Err(DynamicsError::InvalidArg {
                what: "axis inertia must be finite",
            });
        }
        if inertia <= 0.0 {
            return Err(DynamicsError::InvalidArg {
                what: "axis inertia must be positive",
            });
        }

        Ok(Self { inertia })
    }

    /// State-space matrices `(A, B)` of the open-loop plant.
    pub fn state_matrices(&self) -> (Matrix2<f64>, Vector2<f64>) {
        let a = Matrix2::new(0.0, 1.0, 0.0, 0.0);
        let b = Vector2::new(0.0, 1.0 / self.inertia);
        (a, b)
    }

    /// Angular acceleration under an applied torque (rad/s²).
    pub fn angular_acceleration(&self, torque: f64) -> f64 {
        torque / self.inertia
    }
}
