//! Phase portrait generation: one trajectory per grid cell, in parallel.

use rayon::prelude::*;
use tracing::debug;

use ax_controls::Controller;
use ax_core::linspace;
use ax_dynamics::RigidAxis;
use ax_sim::{SimOptions, integrate_with};

use crate::error::{PhaseError, PhaseResult};
use crate::grid::{GridDefinition, PhaseCell, PhaseGrid};

/// Generate a phase portrait with default simulation options.
///
/// See [`generate_grid_with`].
pub fn generate_grid(
    def: &GridDefinition,
    controller: &Controller,
    plant: &RigidAxis,
) -> PhaseResult<PhaseGrid> {
    generate_grid_with(def, controller, plant, &SimOptions::default())
}

/// Generate a phase portrait: `nx * nx` independent closed-loop runs.
///
/// The grid geometry and one prototype request are validated up front, so
/// parameter errors fail the grid before any cell work starts. Cells then
/// run as parallel tasks; each reads only its own request and produces only
/// its own slot, joined at assembly. Every cell integrates with angle
/// normalization off (portraits show the unwrapped angle) and keeps only
/// its state sequence.
///
/// Fail-fast: the first failing cell aborts generation with
/// [`PhaseError::Cell`] naming its coordinates. No partial grid is returned.
pub fn generate_grid_with(
    def: &GridDefinition,
    controller: &Controller,
    plant: &RigidAxis,
    opts: &SimOptions,
) -> PhaseResult<PhaseGrid> {
    def.validate()?;

    let theta0s = linspace(def.theta_min, def.theta_max, def.nx);
    let omega0s = linspace(def.omega_min, def.omega_max, def.nx);

    let prototype = def.request_at(*controller, *plant, theta0s[0], omega0s[0]);
    prototype.validate()?;
    let t = prototype.time_grid();

    let cells = (0..def.nx * def.nx)
        .into_par_iter()
        .map(|idx| {
            let (i, j) = (idx / def.nx, idx % def.nx);
            let (theta0, omega0) = (theta0s[i], omega0s[j]);
            let req = def.request_at(*controller, *plant, theta0, omega0);

            let traj =
                integrate_with(&req, false, opts).map_err(|source| PhaseError::Cell {
                    row: i,
                    col: j,
                    theta0,
                    omega0,
                    source,
                })?;

            Ok(PhaseCell {
                theta0,
                omega0,
                x: traj.x,
            })
        })
        .collect::<PhaseResult<Vec<_>>>()?;

    debug!(
        "generated {}x{} phase grid, {} samples per cell",
        def.nx,
        def.nx,
        t.len()
    );

    Ok(PhaseGrid {
        theta0s,
        omega0s,
        t,
        cells,
    })
}
