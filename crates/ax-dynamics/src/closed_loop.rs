//! Controller and plant composed into one autonomous system.

use ax_controls::Controller;
use ax_core::AxisState;
use nalgebra::Vector2;

use crate::plant::RigidAxis;

/// The feedback interconnection of controller and rigid axis.
///
/// At each derivative evaluation the controller reads the full state, its
/// command passes through saturation, and the saturated torque drives the
/// plant: `u = sat(law(x))`, `xdot = A*x + B*u`.
#[derive(Debug, Clone, Copy)]
pub struct ClosedLoop {
    pub controller: Controller,
    pub plant: RigidAxis,
}

impl ClosedLoop {
    pub fn new(controller: Controller, plant: RigidAxis) -> Self {
        Self { controller, plant }
    }

    /// Closed-loop state derivative.
    pub fn derivative(&self, state: &AxisState) -> AxisState {
        let u = self.controller.torque(state);
        let (a, b) = self.plant.state_matrices();

        let x = Vector2::new(state.theta, state.omega);
        let xdot = a * x + b * u;

        AxisState::new(xdot[0], xdot[1])
    }
}
