//! DynamicsModel trait for pluggable continuous systems.

use ax_core::AxisState;
use ax_dynamics::ClosedLoop;

use crate::error::SimResult;

/// Trait for continuous-time system models.
///
/// A DynamicsModel must implement:
/// - State type (Clone, for snapshots)
/// - RHS (right-hand side) computation: x_dot = f(t, x)
/// - State arithmetic for integration: add states, scale by scalar
/// - An infinity norm, for the adaptive integrator's error control
///
/// Models are pure: `rhs` takes `&self`, so the same model value can back
/// many simultaneous integrations.
pub trait DynamicsModel {
    /// State type (must be Clone).
    type State: Clone;

    /// Compute state derivative dxdt = f(t, x).
    fn rhs(&self, t: f64, x: &Self::State) -> SimResult<Self::State>;

    /// Add two states element-wise: result = a + b.
    fn add(&self, a: &Self::State, b: &Self::State) -> Self::State;

    /// Scale a state by a scalar: result = scale * a.
    fn scale(&self, a: &Self::State, scale: f64) -> Self::State;

    /// Infinity norm of a state: max of component magnitudes.
    fn norm_inf(&self, a: &Self::State) -> f64;
}

impl DynamicsModel for ClosedLoop {
    type State = AxisState;

    fn rhs(&self, _t: f64, x: &AxisState) -> SimResult<AxisState> {
        Ok(self.derivative(x))
    }

    fn add(&self, a: &AxisState, b: &AxisState) -> AxisState {
        AxisState::new(a.theta + b.theta, a.omega + b.omega)
    }

    fn scale(&self, a: &AxisState, scale: f64) -> AxisState {
        AxisState::new(scale * a.theta, scale * a.omega)
    }

    fn norm_inf(&self, a: &AxisState) -> f64 {
        a.theta.abs().max(a.omega.abs())
    }
}
