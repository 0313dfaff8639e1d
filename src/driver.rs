use log::{error, info};

use crate::config::Params;
use crate::mesh::Grid;
use crate::output::SnapshotWriter;
use crate::solver;

// ============================================================================
/**
 * Run the outer time loop on an initialized grid until `t_final`, emitting
 * CSV snapshots through `writer` on the configured cadence. Returns the
 * number of time steps taken.
 *
 * Each iteration picks the CFL-stable step, clamps it so the clock never
 * overshoots the final time, advances the grid, and emits a snapshot once
 * the accumulated output timer reaches `output_dt`. One snapshot is always
 * written at t = 0 and one more after the loop, unconditionally. A failed
 * snapshot write is reported and skipped; the run itself continues.
 */
pub fn run(grid: &mut Grid, params: &Params, writer: &mut SnapshotWriter) -> usize {
    let mut time = 0.0;
    let mut step_count = 0;
    let mut time_since_last_output = 0.0;

    info!("starting simulation");
    info!("output directory: {}", params.output_dir);

    emit(writer, grid, params);

    while time < params.t_final {
        let mut dt = solver::max_time_step(grid, params.cfl, params.gamma);
        if time + dt > params.t_final {
            dt = params.t_final - time;
        }

        solver::step(grid, &mut time, dt, params.gamma, params.bc);
        step_count += 1;
        time_since_last_output += dt;

        if time_since_last_output >= params.output_dt {
            emit(writer, grid, params);
            time_since_last_output = 0.0;
            info!("step {:>6}  t = {:.6}  dt = {:.6e}", step_count, time, dt);
        }
    }

    emit(writer, grid, params);
    info!("simulation complete after {} steps", step_count);

    step_count
}

/// Best-effort snapshot emission: a write failure costs one snapshot, not
/// the run.
fn emit(writer: &mut SnapshotWriter, grid: &Grid, params: &Params) {
    if let Err(e) = writer.write(grid, params.gamma) {
        error!("failed to write snapshot {}: {}", writer.next_index() - 1, e);
    }
}
