//! Simulation request: the full parameter set for one trajectory.

use std::time::Duration;

use ax_controls::{ControlLaw, Controller, TorqueLimit};
use ax_core::{AxisState, ensure_finite, ensure_positive};
use ax_dynamics::RigidAxis;
use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};
use crate::integrator::IntegratorType;

/// Everything needed to integrate one closed-loop trajectory.
///
/// The sample grid is half-open: samples sit at `t[i] = t0 + i*dt` for
/// `i < ceil((tf - t0)/dt)`, so `tf` itself is only sampled when the span
/// is not an exact multiple of `dt`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimRequest {
    pub controller: Controller,
    pub plant: RigidAxis,
    /// Initial state at `t0`
    pub x0: AxisState,
    /// Start time (s)
    pub t0: f64,
    /// Final time (s)
    pub tf: f64,
    /// Output sample spacing (s)
    pub dt: f64,
}

impl SimRequest {
    /// Request starting at t = 0 with the conventional 10 ms sample spacing.
    pub fn new(controller: Controller, plant: RigidAxis, x0: AxisState, tf: f64) -> Self {
        Self {
            controller,
            plant,
            x0,
            t0: 0.0,
            tf,
            dt: 0.01,
        }
    }

    /// Same request with an explicit start time and sample spacing.
    pub fn with_grid(mut self, t0: f64, dt: f64) -> Self {
        self.t0 = t0;
        self.dt = dt;
        self
    }

    /// Validate every parameter before any numerical work.
    ///
    /// Component constructors enforce their local invariants; requests can
    /// also be built as plain literals (or deserialized), so everything is
    /// re-checked here, plus the cross-field rules.
    pub fn validate(&self) -> SimResult<()> {
        RigidAxis::new(self.plant.inertia)?;
        TorqueLimit::new(self.controller.limit.max_abs)?;
        if let ControlLaw::Pd { kp, kd } = self.controller.law {
            ensure_finite(kp, "kp")?;
            ensure_finite(kd, "kd")?;
        }

        ensure_finite(self.x0.theta, "theta0")?;
        ensure_finite(self.x0.omega, "omega0")?;
        ensure_finite(self.t0, "t0")?;
        ensure_finite(self.tf, "tf")?;
        ensure_positive(self.dt, "dt")?;

        if self.tf <= self.t0 {
            return Err(SimError::InvalidArg {
                what: "tf must be greater than t0",
            });
        }

        Ok(())
    }

    /// Number of output samples: `ceil((tf - t0)/dt)` in floating point.
    pub fn sample_count(&self) -> usize {
        ((self.tf - self.t0) / self.dt).ceil() as usize
    }

    /// The uniform output grid `t[i] = t0 + i*dt`.
    pub fn time_grid(&self) -> Vec<f64> {
        let n = self.sample_count();
        (0..n).map(|i| self.t0 + i as f64 * self.dt).collect()
    }
}

/// Options for a simulation run, separate from the physical request.
#[derive(Clone, Debug, Default)]
pub struct SimOptions {
    /// Integrator selection (default: adaptive RKF45)
    pub integrator: IntegratorType,
    /// Optional wall-clock budget for the whole integration.
    ///
    /// Checked between output intervals, so pathological parameters cannot
    /// stall a run longer than one interval past the budget.
    pub deadline: Option<Duration>,
}
