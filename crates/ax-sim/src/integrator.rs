//! Fixed-step and adaptive time integrators.

use tracing::trace;

use crate::error::{SimError, SimResult};
use crate::model::DynamicsModel;

/// Trait for time integrators.
///
/// `step` carries the state across one output interval `[t, t + dt]`.
/// Fixed-step integrators take exactly one step; adaptive integrators are
/// free to subdivide the interval internally.
pub trait Integrator {
    /// Advance state across one output interval using the dynamics model.
    fn step<M: DynamicsModel>(
        &self,
        model: &M,
        t: f64,
        x: &M::State,
        dt: f64,
    ) -> SimResult<M::State>;
}

/// Integrator selection for simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntegratorType {
    /// Adaptive Runge-Kutta-Fehlberg 4(5) (default, substeps as needed).
    #[default]
    Rkf45,
    /// Classical 4th-order Runge-Kutta, one step per output interval.
    Rk4,
}

/// Classical RK4 (Runge-Kutta 4th order) integrator.
#[derive(Clone, Debug, Default)]
pub struct Rk4;

impl Integrator for Rk4 {
    fn step<M: DynamicsModel>(
        &self,
        model: &M,
        t: f64,
        x: &M::State,
        dt: f64,
    ) -> SimResult<M::State> {
        let k1 = model.rhs(t, x)?;

        let x2 = model.add(x, &model.scale(&k1, 0.5 * dt));
        let k2 = model.rhs(t + 0.5 * dt, &x2)?;

        let x3 = model.add(x, &model.scale(&k2, 0.5 * dt));
        let k3 = model.rhs(t + 0.5 * dt, &x3)?;

        let x4 = model.add(x, &model.scale(&k3, dt));
        let k4 = model.rhs(t + dt, &x4)?;

        // Combine: x_new = x + (dt/6) * (k1 + 2*k2 + 2*k3 + k4)
        let k_sum = model.add(
            &model.add(&k1, &model.scale(&k2, 2.0)),
            &model.add(&model.scale(&k3, 2.0), &k4),
        );

        Ok(model.add(x, &model.scale(&k_sum, dt / 6.0)))
    }
}

// Fehlberg 4(5) coefficients.
const A21: f64 = 1.0 / 4.0;
const A31: f64 = 3.0 / 32.0;
const A32: f64 = 9.0 / 32.0;
const A41: f64 = 1932.0 / 2197.0;
const A42: f64 = -7200.0 / 2197.0;
const A43: f64 = 7296.0 / 2197.0;
const A51: f64 = 439.0 / 216.0;
const A52: f64 = -8.0;
const A53: f64 = 3680.0 / 513.0;
const A54: f64 = -845.0 / 4104.0;
const A61: f64 = -8.0 / 27.0;
const A62: f64 = 2.0;
const A63: f64 = -3544.0 / 2565.0;
const A64: f64 = 1859.0 / 4104.0;
const A65: f64 = -11.0 / 40.0;

const C2: f64 = 1.0 / 4.0;
const C3: f64 = 3.0 / 8.0;
const C4: f64 = 12.0 / 13.0;
const C6: f64 = 1.0 / 2.0;

// 4th-order weights (error companion).
const B4_1: f64 = 25.0 / 216.0;
const B4_3: f64 = 1408.0 / 2565.0;
const B4_4: f64 = 2197.0 / 4104.0;
const B4_5: f64 = -1.0 / 5.0;

// 5th-order weights (propagated solution).
const B5_1: f64 = 16.0 / 135.0;
const B5_3: f64 = 6656.0 / 12825.0;
const B5_4: f64 = 28561.0 / 56430.0;
const B5_5: f64 = -9.0 / 50.0;
const B5_6: f64 = 2.0 / 55.0;

// Step size controller bounds.
const MIN_SHRINK: f64 = 0.2;
const MAX_GROWTH: f64 = 5.0;
const SAFETY: f64 = 0.9;

/// Embedded Runge-Kutta-Fehlberg 4(5) with adaptive substeps.
///
/// Each `step` call carries the state across one output interval,
/// subdividing it as the local error estimate demands. The 5th-order
/// solution is propagated; the 4th-order companion only feeds the error
/// estimate. Local error is measured against `abs_tol + rel_tol * |x|`
/// in the model's infinity norm.
#[derive(Clone, Debug)]
pub struct Rkf45 {
    /// Relative tolerance on the local error estimate
    pub rel_tol: f64,
    /// Absolute tolerance on the local error estimate
    pub abs_tol: f64,
    /// Substep attempt budget per output interval
    pub max_substeps: usize,
}

impl Default for Rkf45 {
    fn default() -> Self {
        Self {
            rel_tol: 1e-8,
            abs_tol: 1e-8,
            max_substeps: 10_000,
        }
    }
}

/// x + h * sum(coeff_i * k_i), built from the model's state arithmetic.
fn combine<M: DynamicsModel>(
    model: &M,
    x: &M::State,
    h: f64,
    terms: &[(f64, &M::State)],
) -> M::State {
    let mut acc = x.clone();
    for (coeff, k) in terms {
        acc = model.add(&acc, &model.scale(k, coeff * h));
    }
    acc
}

impl Integrator for Rkf45 {
    fn step<M: DynamicsModel>(
        &self,
        model: &M,
        t: f64,
        x: &M::State,
        dt: f64,
    ) -> SimResult<M::State> {
        let t_end = t + dt;
        let h_min = 1e-12 * dt;

        let mut t_cur = t;
        let mut x_cur = x.clone();
        let mut h = dt;
        let mut attempts = 0usize;

        loop {
            let remaining = t_end - t_cur;
            if remaining <= 0.0 {
                return Ok(x_cur);
            }

            let last = h >= remaining;
            let h_try = if last { remaining } else { h };

            let k1 = model.rhs(t_cur, &x_cur)?;
            let x2 = combine(model, &x_cur, h_try, &[(A21, &k1)]);
            let k2 = model.rhs(t_cur + C2 * h_try, &x2)?;
            let x3 = combine(model, &x_cur, h_try, &[(A31, &k1), (A32, &k2)]);
            let k3 = model.rhs(t_cur + C3 * h_try, &x3)?;
            let x4 = combine(model, &x_cur, h_try, &[(A41, &k1), (A42, &k2), (A43, &k3)]);
            let k4 = model.rhs(t_cur + C4 * h_try, &x4)?;
            let x5 = combine(
                model,
                &x_cur,
                h_try,
                &[(A51, &k1), (A52, &k2), (A53, &k3), (A54, &k4)],
            );
            let k5 = model.rhs(t_cur + h_try, &x5)?;
            let x6 = combine(
                model,
                &x_cur,
                h_try,
                &[(A61, &k1), (A62, &k2), (A63, &k3), (A64, &k4), (A65, &k5)],
            );
            let k6 = model.rhs(t_cur + C6 * h_try, &x6)?;

            let fifth = combine(
                model,
                &x_cur,
                h_try,
                &[
                    (B5_1, &k1),
                    (B5_3, &k3),
                    (B5_4, &k4),
                    (B5_5, &k5),
                    (B5_6, &k6),
                ],
            );
            let fourth = combine(
                model,
                &x_cur,
                h_try,
                &[(B4_1, &k1), (B4_3, &k3), (B4_4, &k4), (B4_5, &k5)],
            );

            let candidate_norm = model.norm_inf(&fifth);
            if !candidate_norm.is_finite() {
                return Err(SimError::NonFinite {
                    what: "integration state",
                    value: candidate_norm,
                });
            }

            let err = model.norm_inf(&model.add(&fifth, &model.scale(&fourth, -1.0)));
            let tol = self.abs_tol + self.rel_tol * model.norm_inf(&x_cur).max(candidate_norm);

            let accepted = err <= tol;
            if accepted {
                if last {
                    return Ok(fifth);
                }
                t_cur += h_try;
                x_cur = fifth;
            } else {
                trace!("rejected substep at t = {t_cur}: h = {h_try}, err = {err}");
            }

            // Standard 5th-order controller with a safety factor, clamped so
            // a single bad estimate cannot stall or fling the step size.
            let growth = if err > 0.0 {
                (SAFETY * (tol / err).powf(0.2)).clamp(MIN_SHRINK, MAX_GROWTH)
            } else {
                MAX_GROWTH
            };
            h = h_try * growth;

            if h < h_min {
                return Err(SimError::ConvergenceFailed {
                    what: format!("step size collapsed to {h:.3e} at t = {t_cur:.6}"),
                });
            }

            attempts += 1;
            if attempts >= self.max_substeps {
                return Err(SimError::ConvergenceFailed {
                    what: format!(
                        "substep budget ({}) exhausted at t = {t_cur:.6}",
                        self.max_substeps
                    ),
                });
            }
        }
    }
}
