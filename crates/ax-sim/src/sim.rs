//! Trajectory integration: validate, march, reconstruct, wrap.

use std::time::Instant;

use tracing::debug;

use ax_core::wrap_to_pi;
use ax_dynamics::ClosedLoop;

use crate::error::{SimError, SimResult};
use crate::integrator::{Integrator, IntegratorType, Rk4, Rkf45};
use crate::request::{SimOptions, SimRequest};
use crate::trajectory::Trajectory;

/// Integrate one closed-loop trajectory with default options.
///
/// See [`integrate_with`].
pub fn integrate(req: &SimRequest, normalize_output: bool) -> SimResult<Trajectory> {
    integrate_with(req, normalize_output, &SimOptions::default())
}

/// Integrate one closed-loop trajectory.
///
/// The request is validated up front; nothing numerical runs on malformed
/// input. States are recorded on the uniform grid `t[i] = t0 + i*dt`. The
/// control history is a second pass over the recorded states, and with
/// `normalize_output` the recorded angles are wrapped into (-pi, pi] as a
/// final pass, dropping revolution counts. Failures return no partial
/// trajectory.
pub fn integrate_with(
    req: &SimRequest,
    normalize_output: bool,
    opts: &SimOptions,
) -> SimResult<Trajectory> {
    req.validate()?;

    let model = ClosedLoop::new(req.controller, req.plant);
    let t = req.time_grid();
    let n = t.len();
    let started = Instant::now();

    let mut x = Vec::with_capacity(n);
    let mut state = req.x0;
    x.push(state);

    for i in 1..n {
        if let Some(deadline) = opts.deadline {
            let elapsed = started.elapsed();
            if elapsed > deadline {
                return Err(SimError::DeadlineExceeded {
                    t: t[i - 1],
                    elapsed_ms: elapsed.as_millis(),
                });
            }
        }

        state = match opts.integrator {
            IntegratorType::Rkf45 => {
                let integrator = Rkf45::default();
                integrator.step(&model, t[i - 1], &state, req.dt)?
            }
            IntegratorType::Rk4 => {
                let integrator = Rk4;
                integrator.step(&model, t[i - 1], &state, req.dt)?
            }
        };

        if !state.theta.is_finite() {
            return Err(SimError::NonFinite {
                what: "angular position",
                value: state.theta,
            });
        }
        if !state.omega.is_finite() {
            return Err(SimError::NonFinite {
                what: "angular rate",
                value: state.omega,
            });
        }

        x.push(state);
    }

    // Second pass, independent of the solve: the reported control is the
    // law applied to each recorded sample, not the solver's interior
    // evaluations.
    let u: Vec<f64> = x.iter().map(|xi| req.controller.torque(xi)).collect();

    if normalize_output {
        for xi in &mut x {
            xi.theta = wrap_to_pi(xi.theta).angle;
        }
    }

    debug!(
        "integrated {n} samples over [{}, {}) with {:?}",
        req.t0, req.tf, opts.integrator
    );

    Ok(Trajectory { t, x, u })
}
