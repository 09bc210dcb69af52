//! Headless driving of a [`Visualizer`] with fixed time steps.

use tilepath_core::Point;

use crate::error::RunError;
use crate::visualizer::{Command, EditMode, Visualizer};

/// Place start and goal on the visualiser's grid, rejecting coordinates
/// outside it.
pub fn place_endpoints(vis: &mut Visualizer, start: Point, goal: Point) -> Result<(), RunError> {
    for (what, pos, mode) in [("start", start, EditMode::Start), ("goal", goal, EditMode::Goal)] {
        if !vis.grid().contains(pos) {
            return Err(RunError::OutOfBounds { what, pos });
        }
        vis.update(Command::SetMode(mode));
        vis.click_tile(pos);
    }
    Ok(())
}

/// Issue `run` and tick the visualiser by `dt` until the search finishes.
/// Returns the number of ticks used.
pub fn drive(vis: &mut Visualizer, run: Command, dt: f32, max_ticks: u64) -> Result<u64, RunError> {
    if !vis.update(run) {
        log::warn!("search not started: {}", vis.status());
        return Ok(0);
    }
    let mut ticks = 0;
    while vis.engine().is_running() {
        if ticks == max_ticks {
            return Err(RunError::Stalled { ticks });
        }
        vis.tick(dt);
        ticks += 1;
    }
    Ok(ticks)
}

/// Parse an `X,Z` coordinate pair.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, z) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Z but got {s:?}"))?;
    let x: i32 = x.trim().parse().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let z: i32 = z.trim().parse().map_err(|e| format!("bad z in {s:?}: {e}"))?;
    Ok((x, z).into())
}
