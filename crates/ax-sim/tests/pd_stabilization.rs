//! Integration test: PD-stabilized return from an attitude offset.
//!
//! Plant: unit-inertia axis. Controller: PD with kp = kd = -1, giving a
//! damped oscillator (natural frequency 1 rad/s, damping ratio 0.5). The
//! transient never reaches the 1 N*m torque limit, so the loop behaves
//! linearly.
//!
//! Demonstrates:
//! - Fixed-grid recording with matching t/x/u lengths
//! - Long-run trend: angle envelope decays toward zero
//! - Adaptive and fixed-step integrators agreeing on the endpoint
//! - The wall-clock deadline option aborting cleanly

use std::time::Duration;

use ax_controls::{ControlLaw, Controller, TorqueLimit};
use ax_core::AxisState;
use ax_dynamics::RigidAxis;
use ax_sim::{IntegratorType, SimError, SimOptions, SimRequest, integrate, integrate_with};

fn pd_request() -> SimRequest {
    SimRequest::new(
        Controller::new(
            ControlLaw::Pd { kp: -1.0, kd: -1.0 },
            TorqueLimit::new(1.0).unwrap(),
        ),
        RigidAxis::new(1.0).unwrap(),
        AxisState::new(0.5, 0.0),
        20.0,
    )
}

#[test]
fn pd_return_settles() {
    let traj = integrate(&pd_request(), false).expect("integration failed");

    assert_eq!(traj.len(), 2000);
    assert_eq!(traj.t[0], 0.0);
    assert!((traj.t[1] - 0.01).abs() < 1e-12);
    assert_eq!(traj.x.len(), traj.t.len());
    assert_eq!(traj.u.len(), traj.t.len());

    // Damped oscillator envelope is exp(-t/2); by t = 20 the residual is
    // orders of magnitude below this bound.
    let final_state = traj.last_state().unwrap();
    assert!(
        final_state.theta.abs() < 1e-3,
        "theta did not settle: {}",
        final_state.theta
    );
    assert!(
        final_state.omega.abs() < 1e-3,
        "omega did not settle: {}",
        final_state.omega
    );

    // Large early, small late: compare peak |theta| over the first and
    // last quarters of the run.
    let quarter = traj.len() / 4;
    let early_peak = traj.x[..quarter]
        .iter()
        .map(|s| s.theta.abs())
        .fold(0.0, f64::max);
    let late_peak = traj.x[3 * quarter..]
        .iter()
        .map(|s| s.theta.abs())
        .fold(0.0, f64::max);
    assert!(
        late_peak < 0.05 * early_peak,
        "angle envelope did not decay (early peak {early_peak}, late peak {late_peak})"
    );
}

#[test]
fn torque_stays_within_limit() {
    let traj = integrate(&pd_request(), false).unwrap();
    for (i, &u) in traj.u.iter().enumerate() {
        assert!(u.abs() <= 1.0, "u[{i}] = {u} exceeds the limit");
    }
}

#[test]
fn integrators_agree_on_endpoint() {
    let req = pd_request();

    let adaptive = integrate(&req, false).unwrap();
    let fixed = integrate_with(
        &req,
        false,
        &SimOptions {
            integrator: IntegratorType::Rk4,
            deadline: None,
        },
    )
    .unwrap();

    let a = adaptive.last_state().unwrap();
    let f = fixed.last_state().unwrap();
    assert!((a.theta - f.theta).abs() < 1e-6);
    assert!((a.omega - f.omega).abs() < 1e-6);
}

#[test]
fn zero_deadline_aborts() {
    let opts = SimOptions {
        integrator: IntegratorType::Rkf45,
        deadline: Some(Duration::ZERO),
    };
    let err = integrate_with(&pd_request(), false, &opts).unwrap_err();
    assert!(matches!(err, SimError::DeadlineExceeded { .. }));
}
