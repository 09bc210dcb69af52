//! The application context of a pathfinding visualiser.
//!
//! [`Visualizer`] owns the grid, the engine, the current edit mode and the
//! status history. A front end constructs one at startup, forwards user
//! intent as [`Command`]s and calls [`tick`](Visualizer::tick) once per frame.

use tilepath_core::{Grid, Point, TileState};
use tilepath_search::{Algorithm, ConfigError, EngineConfig, EngineState, PathfindingEngine};

use crate::status::StatusLog;

/// Slowest rate accepted by [`Command::SetSpeed`].
pub const MIN_SPEED: f32 = 1.0;
/// Fastest rate accepted by [`Command::SetSpeed`].
pub const MAX_SPEED: f32 = 100.0;

/// What a click on a tile does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditMode {
    #[default]
    Start,
    Goal,
    Obstacle,
    Clear,
}

/// User intent forwarded by a front end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    SetMode(EditMode),
    /// Apply the current edit mode to a tile.
    ClickTile(Point),
    ClearGrid,
    RunDijkstra,
    RunAStar,
    Pause,
    Resume,
    /// Abandon the search and wipe its annotations.
    Stop,
    /// Steps per second, clamped to [`MIN_SPEED`]..=[`MAX_SPEED`].
    SetSpeed(f32),
}

/// Summary of the user's edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridStats {
    pub has_start: bool,
    pub has_goal: bool,
    pub obstacles: usize,
}

/// Grid, engine and UI state of one visualiser session.
#[derive(Debug)]
pub struct Visualizer {
    grid: Grid,
    engine: PathfindingEngine,
    mode: EditMode,
    status: StatusLog,
    last_state: EngineState,
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Visualizer {
    /// A session over an empty standard grid.
    pub fn new() -> Self {
        Self::with_grid(Grid::new())
    }

    /// A session over an existing grid.
    pub fn with_grid(grid: Grid) -> Self {
        Self {
            grid,
            engine: PathfindingEngine::new(),
            mode: EditMode::default(),
            status: StatusLog::new(),
            last_state: EngineState::Idle,
        }
    }

    /// A session over an existing grid with a custom engine configuration.
    pub fn with_config(grid: Grid, config: EngineConfig) -> Result<Self, ConfigError> {
        let mut vis = Self::with_grid(grid);
        vis.engine = PathfindingEngine::with_config(config)?;
        Ok(vis)
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn engine(&self) -> &PathfindingEngine {
        &self.engine
    }

    #[inline]
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// The latest status message.
    #[inline]
    pub fn status(&self) -> &str {
        self.status.latest()
    }

    #[inline]
    pub fn status_log(&self) -> &StatusLog {
        &self.status
    }

    pub fn grid_stats(&self) -> GridStats {
        GridStats {
            has_start: self.grid.has_start(),
            has_goal: self.grid.has_goal(),
            obstacles: self.grid.count(TileState::Obstacle),
        }
    }

    /// Whether a new search may be launched: both endpoints are placed and
    /// no search is in progress.
    pub fn can_run(&self) -> bool {
        self.grid.has_start()
            && self.grid.has_goal()
            && matches!(
                self.engine.state(),
                EngineState::Idle | EngineState::Completed | EngineState::NoPathFound
            )
    }

    /// Apply a command. Returns whether it had any effect.
    pub fn update(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::SetMode(mode) => {
                self.mode = mode;
                true
            }
            Command::ClickTile(p) => self.click_tile(p),
            Command::ClearGrid => {
                self.grid.clear();
                self.engine.reset(&mut self.grid);
                self.last_state = EngineState::Idle;
                self.status.push("Grid cleared");
                true
            }
            Command::RunDijkstra => self.run(Algorithm::Dijkstra),
            Command::RunAStar => self.run(Algorithm::AStar),
            Command::Pause => {
                if !self.engine.is_running() {
                    return false;
                }
                self.engine.pause();
                self.status.push("Paused");
                true
            }
            Command::Resume => {
                if !self.engine.is_paused() {
                    return false;
                }
                self.engine.resume();
                self.status.push("Resumed");
                true
            }
            Command::Stop => {
                self.engine.stop();
                self.engine.reset(&mut self.grid);
                self.last_state = EngineState::Idle;
                self.status.push("Stopped");
                true
            }
            Command::SetSpeed(rate) => {
                if rate.is_nan() {
                    log::warn!("ignoring NaN speed");
                    return false;
                }
                self.engine
                    .set_speed(rate.clamp(MIN_SPEED, MAX_SPEED))
                    .is_ok()
            }
        }
    }

    /// Apply the current edit mode to tile `p`. Clicks outside the grid are
    /// ignored.
    pub fn click_tile(&mut self, p: Point) -> bool {
        if !self.grid.contains(p) {
            return false;
        }
        match self.mode {
            EditMode::Start => {
                self.grid.set_start(p);
                self.status.push("Start point set");
            }
            EditMode::Goal => {
                self.grid.set_goal(p);
                self.status.push("Goal point set");
            }
            EditMode::Obstacle => {
                if self.grid.get(p).is_endpoint() {
                    return false;
                }
                self.grid.set(p, TileState::Obstacle);
                self.status.push("Obstacle placed");
            }
            EditMode::Clear => {
                match self.grid.get(p) {
                    TileState::Start => self.grid.clear_start(),
                    TileState::Goal => self.grid.clear_goal(),
                    _ => self.grid.set(p, TileState::Empty),
                }
                self.status.push("Tile cleared");
            }
        }
        true
    }

    /// Advance the running search by `dt` seconds and report how it ended,
    /// if it just did. Returns the number of search steps taken.
    pub fn tick(&mut self, dt: f32) -> usize {
        let steps = self.engine.advance(&mut self.grid, dt);
        let state = self.engine.state();
        if state != self.last_state && state.is_terminal() {
            if state == EngineState::Completed {
                self.status.push("Path found successfully!");
            } else {
                self.status.push("No path exists!");
            }
        }
        self.last_state = state;
        steps
    }

    fn run(&mut self, algorithm: Algorithm) -> bool {
        if !self.can_run() {
            if self.engine.is_running() || self.engine.is_paused() {
                self.status.push("Algorithm running...");
            } else {
                self.status.push("Set start and goal first!");
            }
            return false;
        }
        let (Some(start), Some(goal)) = (self.grid.start(), self.grid.goal()) else {
            return false;
        };
        self.engine.start_search(&mut self.grid, algorithm, start, goal);
        self.last_state = self.engine.state();
        self.status.push(format!("Running {algorithm}..."));
        true
    }
}
