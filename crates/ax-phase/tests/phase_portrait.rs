//! Integration test: phase portraits over the conventional window.
//!
//! Demonstrates:
//! - The default 5x5 grid shape with a shared per-cell sample count
//! - Unwrapped angles in cell trajectories (multi-revolution runs visible)
//! - Fail-fast abort naming the first failing cell
//! - Grids surviving a JSON round-trip

use std::f64::consts::PI;
use std::time::Duration;

use ax_controls::{ControlLaw, Controller, TorqueLimit};
use ax_dynamics::RigidAxis;
use ax_phase::{GridDefinition, PhaseError, PhaseGrid, generate_grid, generate_grid_with};
use ax_sim::SimOptions;

fn pd_controller() -> Controller {
    Controller::new(
        ControlLaw::Pd { kp: -1.0, kd: -1.0 },
        TorqueLimit::new(1.0).unwrap(),
    )
}

#[test]
fn default_window_gives_5x5_grid() {
    let grid = generate_grid(
        &GridDefinition::default(),
        &pd_controller(),
        &RigidAxis::new(1.0).unwrap(),
    )
    .expect("grid generation failed");

    assert_eq!(grid.nx(), 5);
    assert_eq!(grid.cells.len(), 25);
    assert_eq!(grid.samples_per_cell(), 2000);
    for cell in &grid.cells {
        assert_eq!(cell.x.len(), grid.samples_per_cell());
    }

    // Axis endpoints pinned exactly.
    assert_eq!(grid.theta0s[0], -PI);
    assert_eq!(grid.theta0s[4], PI);
    assert_eq!(grid.omega0s[0], -1.0);
    assert_eq!(grid.omega0s[4], 1.0);
}

#[test]
fn cell_angles_stay_unwrapped() {
    // Zero gains: free rotation. The cell starting at (pi, 1) climbs well
    // past pi over 20 s, which a normalized output could never show.
    let free = Controller::new(
        ControlLaw::Pd { kp: 0.0, kd: 0.0 },
        TorqueLimit::new(1.0).unwrap(),
    );
    let grid = generate_grid(
        &GridDefinition::default(),
        &free,
        &RigidAxis::new(1.0).unwrap(),
    )
    .unwrap();

    let spinning = grid.cell(4, 4);
    assert_eq!(spinning.theta0, PI);
    assert_eq!(spinning.omega0, 1.0);
    let final_theta = spinning.x.last().unwrap().theta;
    assert!(
        final_theta > 2.0 * PI,
        "angle was wrapped: final theta = {final_theta}"
    );
}

#[test]
fn first_failing_cell_aborts_the_grid() {
    let opts = SimOptions {
        deadline: Some(Duration::ZERO),
        ..SimOptions::default()
    };
    let err = generate_grid_with(
        &GridDefinition::default(),
        &pd_controller(),
        &RigidAxis::new(1.0).unwrap(),
        &opts,
    )
    .unwrap_err();

    match err {
        PhaseError::Cell { row, col, .. } => {
            assert!(row < 5 && col < 5);
        }
        other => panic!("expected a cell failure, got {other:?}"),
    }
}

#[test]
fn grid_round_trips_as_json() {
    let def = GridDefinition {
        nx: 2,
        tf: 0.1,
        ..GridDefinition::default()
    };
    let grid = generate_grid(&def, &pd_controller(), &RigidAxis::new(1.0).unwrap()).unwrap();

    let json = serde_json::to_string(&grid).unwrap();
    let back: PhaseGrid = serde_json::from_str(&json).unwrap();
    assert_eq!(back, grid);
}
