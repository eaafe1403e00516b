//! Initial-condition grid definition and the filled phase grid.

use ax_controls::Controller;
use ax_core::AxisState;
use ax_dynamics::RigidAxis;
use ax_sim::SimRequest;
use serde::{Deserialize, Serialize};

use crate::error::{PhaseError, PhaseResult};

/// Cartesian grid of initial conditions for a phase portrait.
///
/// Each axis gets `nx` uniformly spaced values including both endpoints, so
/// the portrait covers `nx * nx` starting states. Every cell integrates over
/// the same `[0, tf)` span at spacing `dt`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridDefinition {
    /// Lower bound of initial angle (rad)
    pub theta_min: f64,
    /// Upper bound of initial angle (rad)
    pub theta_max: f64,
    /// Lower bound of initial rate (rad/s)
    pub omega_min: f64,
    /// Upper bound of initial rate (rad/s)
    pub omega_max: f64,
    /// Points per axis (at least 2)
    pub nx: usize,
    /// Final time of every cell's run (s)
    pub tf: f64,
    /// Sample spacing of every cell's run (s)
    pub dt: f64,
}

impl Default for GridDefinition {
    /// The conventional portrait window: one revolution of angle, one rad/s
    /// of rate either way, 5 starts per axis, 20 s runs at 10 ms sampling.
    fn default() -> Self {
        Self {
            theta_min: -std::f64::consts::PI,
            theta_max: std::f64::consts::PI,
            omega_min: -1.0,
            omega_max: 1.0,
            nx: 5,
            tf: 20.0,
            dt: 0.01,
        }
    }
}

impl GridDefinition {
    /// Check the grid geometry.
    ///
    /// A single-point axis is a degenerate portrait and is rejected rather
    /// than silently collapsing to one trajectory. The time-grid and
    /// physical parameters are checked by request validation at generation
    /// time.
    pub fn validate(&self) -> PhaseResult<()> {
        if self.nx < 2 {
            return Err(PhaseError::InvalidArg {
                what: "grid needs at least 2 points per axis",
            });
        }

        for bound in [self.theta_min, self.theta_max, self.omega_min, self.omega_max] {
            if !bound.is_finite() {
                return Err(PhaseError::InvalidArg {
                    what: "grid bounds must be finite",
                });
            }
        }
        if self.theta_max <= self.theta_min {
            return Err(PhaseError::InvalidArg {
                what: "theta_max must be greater than theta_min",
            });
        }
        if self.omega_max <= self.omega_min {
            return Err(PhaseError::InvalidArg {
                what: "omega_max must be greater than omega_min",
            });
        }

        Ok(())
    }

    /// The simulation request for one cell of the grid.
    pub(crate) fn request_at(
        &self,
        controller: Controller,
        plant: RigidAxis,
        theta0: f64,
        omega0: f64,
    ) -> SimRequest {
        SimRequest::new(controller, plant, AxisState::new(theta0, omega0), self.tf)
            .with_grid(0.0, self.dt)
    }
}

/// One trajectory of the portrait.
///
/// Holds only the state sequence; phase portraits keep the angle unwrapped
/// (multi-revolution behavior is the point of the plot) and have no use for
/// the control history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseCell {
    /// Initial angle of this cell (rad)
    pub theta0: f64,
    /// Initial rate of this cell (rad/s)
    pub omega0: f64,
    /// State at each sample, angle unwrapped
    pub x: Vec<AxisState>,
}

/// A filled phase portrait: every cell's trajectory plus the shared axes.
///
/// Cells are stored row-major: cell `(i, j)` starts at
/// `(theta0s[i], omega0s[j])`. All cells share one time grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseGrid {
    /// Initial angles, one per row (rad)
    pub theta0s: Vec<f64>,
    /// Initial rates, one per column (rad/s)
    pub omega0s: Vec<f64>,
    /// Sample times shared by every cell (s)
    pub t: Vec<f64>,
    /// Trajectories in row-major `(i, j)` order
    pub cells: Vec<PhaseCell>,
}

impl PhaseGrid {
    /// Points per axis.
    pub fn nx(&self) -> usize {
        self.theta0s.len()
    }

    /// The trajectory starting at `(theta0s[i], omega0s[j])`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn cell(&self, i: usize, j: usize) -> &PhaseCell {
        assert!(i < self.nx() && j < self.omega0s.len(), "cell index out of range");
        &self.cells[i * self.omega0s.len() + j]
    }

    /// Samples per cell.
    pub fn samples_per_cell(&self) -> usize {
        self.t.len()
    }
}
