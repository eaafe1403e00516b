//! Actuator torque saturation.

use serde::{Deserialize, Serialize};

use crate::error::{ControlError, ControlResult};

/// Symmetric actuator limit clipping torque into `[-max_abs, +max_abs]`.
///
/// An infinite bound disables clipping entirely; the filter is then the
/// identity. That is the meaning callers opt into with
/// [`TorqueLimit::unbounded`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TorqueLimit {
    /// Maximum torque magnitude (N*m). `f64::INFINITY` means no limit.
    pub max_abs: f64,
}

impl TorqueLimit {
    /// Create a limit with the given magnitude.
    ///
    /// # Errors
    /// Negative and NaN bounds are rejected. A NaN bound would poison every
    /// later clamp, so it is refused here rather than at apply time.
    pub fn new(max_abs: f64) -> ControlResult<Self> {
        if max_abs.is_nan() {
            return Err(ControlError::InvalidArg {
                what: "torque limit cannot be NaN",
            });
        }
        if max_abs < 0.0 {
            return Err(ControlError::InvalidArg {
                what: "torque limit cannot be negative",
            });
        }
        Ok(Self { max_abs })
    }

    /// A limit that never clips.
    pub fn unbounded() -> Self {
        Self {
            max_abs: f64::INFINITY,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.max_abs.is_infinite()
    }

    /// Clip a torque command to the limit band.
    pub fn apply(&self, u: f64) -> f64 {
        u.clamp(-self.max_abs, self.max_abs)
    }
}
