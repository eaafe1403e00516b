//! Controller: law output passed through actuator saturation.

use ax_core::AxisState;
use serde::{Deserialize, Serialize};

use crate::law::ControlLaw;
use crate::saturation::TorqueLimit;

/// A control law paired with the actuator's torque limit.
///
/// The limit does double duty: it clips whatever the law commands, and the
/// bang-bang law reads its magnitude as the torque authority to switch with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Controller {
    pub law: ControlLaw,
    pub limit: TorqueLimit,
}

impl Controller {
    pub fn new(law: ControlLaw, limit: TorqueLimit) -> Self {
        Self { law, limit }
    }

    /// Law output before saturation.
    pub fn raw_torque(&self, state: &AxisState) -> f64 {
        match self.law {
            ControlLaw::Pd { kp, kd } => kp * state.theta + kd * state.omega,
            ControlLaw::BangBang => {
                // Explicit three-way branch rather than -max_abs * sign():
                // an unbounded limit times sign(0) would be inf * 0 = NaN.
                if state.theta > 0.0 {
                    -self.limit.max_abs
                } else if state.theta < 0.0 {
                    self.limit.max_abs
                } else {
                    0.0
                }
            }
        }
    }

    /// Saturated torque command actually applied to the plant.
    pub fn torque(&self, state: &AxisState) -> f64 {
        self.limit.apply(self.raw_torque(state))
    }
}
