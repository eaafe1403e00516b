//! Time history produced by a simulation run.

use ax_core::AxisState;
use serde::{Deserialize, Serialize};

/// Sampled closed-loop trajectory on a uniform time grid.
///
/// The three sequences share one length and indexing: sample `i` holds the
/// time `t[i] = t0 + i*dt`, the state reached there, and the control
/// reconstructed from that state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    /// Sample times (s)
    pub t: Vec<f64>,
    /// State at each sample
    pub x: Vec<AxisState>,
    /// Saturated control torque at each sample (N*m).
    ///
    /// Recomputed from the recorded states after integration rather than
    /// captured from solver internals. For switching laws the value at a
    /// sample can differ from the torque that actually drove the plant
    /// between the two samples bracketing a switch.
    pub u: Vec<f64>,
}

impl Trajectory {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Final recorded state.
    pub fn last_state(&self) -> Option<&AxisState> {
        self.x.last()
    }
}
