//! The stepped Dijkstra / A* state machine.
//!
//! A [`PathfindingEngine`] never runs a search to completion on its own.
//! A driver starts a search, then feeds wall-clock deltas to
//! [`advance`](PathfindingEngine::advance) once per tick; the engine turns
//! the accumulated time into discrete search steps at the configured rate,
//! annotating the tile map as it goes.

use std::collections::BinaryHeap;
use std::fmt;
use std::time::{Duration, Instant};

use tilepath_core::{Point, TileState};

use crate::config::{ConfigError, EngineConfig, check_rate};
use crate::distance::manhattan;
use crate::neighbors::Neighbors;
use crate::node::{NodeArena, OpenEntry, SearchNode};
use crate::traits::TileMap;

/// Relative slack when comparing accumulated time against the step interval.
const STEP_TOLERANCE: f32 = 1e-4;

// ---------------------------------------------------------------------------
// EngineState / Algorithm / SearchStats
// ---------------------------------------------------------------------------

/// Lifecycle of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineState {
    #[default]
    Idle,
    Running,
    Paused,
    /// The goal was dequeued and the path marked.
    Completed,
    /// The open set ran dry before the goal was reached.
    NoPathFound,
}

impl EngineState {
    /// Whether the state only changes through a new start or a reset.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, EngineState::Completed | EngineState::NoPathFound)
    }
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EngineState::Idle => "Idle",
            EngineState::Running => "Running",
            EngineState::Paused => "Paused",
            EngineState::Completed => "Path Found",
            EngineState::NoPathFound => "No Path Found",
        };
        f.write_str(name)
    }
}

/// Which search the engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    Dijkstra,
    AStar,
}

impl Algorithm {
    /// Heuristic estimate from `p` to `goal`: Manhattan distance for A*,
    /// zero for Dijkstra.
    #[inline]
    pub fn heuristic(self, p: Point, goal: Point) -> i32 {
        match self {
            Algorithm::Dijkstra => 0,
            Algorithm::AStar => manhattan(p, goal),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dijkstra => f.write_str("Dijkstra"),
            Algorithm::AStar => f.write_str("A*"),
        }
    }
}

/// Counters a presentation layer polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Nodes dequeued and expanded so far.
    pub nodes_explored: usize,
    /// Cells on the found path, start and goal included. 0 until Completed.
    pub path_length: usize,
    /// Wall-clock time since the search started, frozen once it finishes.
    pub elapsed: Duration,
}

// ---------------------------------------------------------------------------
// PathfindingEngine
// ---------------------------------------------------------------------------

/// Incremental grid search over a [`TileMap`].
///
/// Movement is four-directional with unit edge cost. Expanded tiles are
/// marked [`TileState::Visited`] and the final route [`TileState::Path`];
/// start and goal tiles keep their own markers.
#[derive(Debug)]
pub struct PathfindingEngine {
    state: EngineState,
    algorithm: Algorithm,
    config: EngineConfig,
    start: Option<Point>,
    goal: Option<Point>,
    arena: NodeArena,
    open: BinaryHeap<OpenEntry>,
    open_count: usize,
    closed: Vec<Point>,
    path: Vec<Point>,
    nodes_explored: usize,
    path_length: usize,
    started_at: Option<Instant>,
    elapsed: Duration,
    since_last_step: f32,
    nbuf: Neighbors,
}

impl Default for PathfindingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PathfindingEngine {
    /// Create an idle engine with the default configuration.
    pub fn new() -> Self {
        Self::build(EngineConfig::default())
    }

    /// Create an idle engine, rejecting an invalid configuration.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: EngineConfig) -> Self {
        Self {
            state: EngineState::Idle,
            algorithm: Algorithm::Dijkstra,
            config,
            start: None,
            goal: None,
            arena: NodeArena::default(),
            open: BinaryHeap::new(),
            open_count: 0,
            closed: Vec::new(),
            path: Vec::new(),
            nodes_explored: 0,
            path_length: 0,
            started_at: None,
            elapsed: Duration::ZERO,
            since_last_step: 0.0,
            nbuf: Neighbors::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    /// Begin a Dijkstra search from `start` to `goal`.
    pub fn start_dijkstra<M: TileMap>(&mut self, map: &mut M, start: Point, goal: Point) {
        self.start_search(map, Algorithm::Dijkstra, start, goal);
    }

    /// Begin an A* search from `start` to `goal`.
    pub fn start_astar<M: TileMap>(&mut self, map: &mut M, start: Point, goal: Point) {
        self.start_search(map, Algorithm::AStar, start, goal);
    }

    /// Discard any previous search (as [`reset`](Self::reset)) and seed a
    /// new one.
    ///
    /// Coordinates are not validated. A start outside the map leaves the
    /// open set empty, so the first step reports
    /// [`EngineState::NoPathFound`]; a goal outside the map is never
    /// reached and the search exhausts the reachable tiles.
    pub fn start_search<M: TileMap>(
        &mut self,
        map: &mut M,
        algorithm: Algorithm,
        start: Point,
        goal: Point,
    ) {
        self.reset(map);
        self.arena.reset(map.bounds());
        self.algorithm = algorithm;
        self.start = Some(start);
        self.goal = Some(goal);

        let root = SearchNode::new(start, 0, algorithm.heuristic(start, goal), None);
        if let Some(idx) = self.arena.insert(root) {
            self.open.push(OpenEntry { idx, f: root.f });
            self.open_count = 1;
        } else {
            log::warn!("{algorithm} search starts at {start}, outside {}", map.bounds());
        }

        self.state = EngineState::Running;
        self.started_at = Some(Instant::now());
        log::info!("{algorithm} search started: {start} -> {goal}");
    }

    /// Feed `dt` seconds of wall-clock time to a running search, performing
    /// one step per elapsed step interval. Returns the number of steps taken.
    ///
    /// Time only accumulates while [`EngineState::Running`]; leftover time
    /// below one interval carries over to the next call.
    pub fn advance<M: TileMap>(&mut self, map: &mut M, dt: f32) -> usize {
        if self.state != EngineState::Running || dt.is_nan() || dt <= 0.0 {
            return 0;
        }
        self.since_last_step += dt;

        let interval = self.config.step_interval();
        // Fractions of an interval rarely sum back to it exactly in f32.
        let due = interval * (1.0 - STEP_TOLERANCE);
        let mut steps = 0;
        while self.since_last_step >= due && self.state == EngineState::Running {
            self.since_last_step = (self.since_last_step - interval).max(0.0);
            self.search_step(map);
            steps += 1;
        }
        steps
    }

    /// Perform exactly one search step right away, ignoring the time budget.
    /// Returns `false` (and does nothing) unless the search is running.
    pub fn step<M: TileMap>(&mut self, map: &mut M) -> bool {
        if self.state != EngineState::Running {
            return false;
        }
        self.search_step(map);
        true
    }

    /// Step until the search completes or fails. Returns the number of
    /// steps taken; 0 if the search was not running.
    pub fn run_to_end<M: TileMap>(&mut self, map: &mut M) -> usize {
        let mut steps = 0;
        while self.step(map) {
            steps += 1;
        }
        steps
    }

    /// Suspend a running search.
    pub fn pause(&mut self) {
        if self.state == EngineState::Running {
            self.state = EngineState::Paused;
            log::debug!("search paused after {} nodes", self.nodes_explored);
        }
    }

    /// Continue a paused search.
    pub fn resume(&mut self) {
        if self.state == EngineState::Paused {
            self.state = EngineState::Running;
            log::debug!("search resumed");
        }
    }

    /// Abandon the current search without finalising its statistics. Map
    /// annotations stay until [`reset`](Self::reset).
    pub fn stop(&mut self) {
        if self.state != EngineState::Idle {
            log::debug!("search stopped in state {}", self.state);
        }
        self.state = EngineState::Idle;
        self.started_at = None;
        self.since_last_step = 0.0;
    }

    /// Return to [`EngineState::Idle`], releasing every node, clearing the
    /// statistics, and reverting all `Visited`/`Path` tiles on `map`.
    pub fn reset<M: TileMap>(&mut self, map: &mut M) {
        self.arena.clear();
        self.open.clear();
        self.open_count = 0;
        self.closed.clear();
        self.path.clear();
        self.start = None;
        self.goal = None;
        self.nodes_explored = 0;
        self.path_length = 0;
        self.started_at = None;
        self.elapsed = Duration::ZERO;
        self.since_last_step = 0.0;
        self.state = EngineState::Idle;
        map.clear_search_marks();
    }

    /// Change the stepping rate. Takes effect on the next interval.
    pub fn set_speed(&mut self, steps_per_second: f32) -> Result<(), ConfigError> {
        if let Err(e) = check_rate(steps_per_second) {
            log::warn!("rejected speed change: {e}");
            return Err(e);
        }
        self.config.steps_per_second = steps_per_second;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    #[inline]
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// The algorithm of the current (or last) search.
    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == EngineState::Running
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.state == EngineState::Paused
    }

    #[inline]
    pub fn nodes_explored(&self) -> usize {
        self.nodes_explored
    }

    #[inline]
    pub fn path_length(&self) -> usize {
        self.path_length
    }

    /// Wall-clock time of the search: live while running or paused, frozen
    /// once it completes or fails.
    pub fn elapsed(&self) -> Duration {
        match (self.state, self.started_at) {
            (EngineState::Running | EngineState::Paused, Some(t)) => t.elapsed(),
            _ => self.elapsed,
        }
    }

    pub fn stats(&self) -> SearchStats {
        SearchStats {
            nodes_explored: self.nodes_explored,
            path_length: self.path_length,
            elapsed: self.elapsed(),
        }
    }

    /// Current stepping rate.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.config.steps_per_second
    }

    #[inline]
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Start of the current search.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Goal of the current search.
    #[inline]
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    /// Expanded tiles, in expansion order.
    #[inline]
    pub fn explored(&self) -> &[Point] {
        &self.closed
    }

    /// The found route from start to goal; empty unless Completed.
    #[inline]
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Number of discovered tiles waiting to be expanded.
    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.open_count
    }

    /// The search record of `p`, if it has been discovered.
    #[inline]
    pub fn node(&self, p: Point) -> Option<&SearchNode> {
        self.arena.at(p)
    }

    // -----------------------------------------------------------------------
    // Search internals
    // -----------------------------------------------------------------------

    /// Pop the cheapest live entry, skipping entries superseded by a later
    /// relaxation or belonging to an already closed node.
    fn pop_open(&mut self) -> Option<usize> {
        while let Some(entry) = self.open.pop() {
            match self.arena.get(entry.idx) {
                Some(n) if !n.closed && n.f == entry.f => return Some(entry.idx),
                _ => continue,
            }
        }
        None
    }

    fn search_step<M: TileMap>(&mut self, map: &mut M) {
        let Some(ci) = self.pop_open() else {
            self.finish(EngineState::NoPathFound);
            return;
        };
        self.open_count = self.open_count.saturating_sub(1);

        let Some(current) = self.arena.get_mut(ci).map(|n| {
            n.closed = true;
            *n
        }) else {
            return;
        };

        if !map.tile(current.pos).is_endpoint() {
            map.set_tile(current.pos, TileState::Visited);
        }
        self.nodes_explored += 1;
        self.closed.push(current.pos);

        if Some(current.pos) == self.goal {
            self.reconstruct_path(map, ci);
            self.finish(EngineState::Completed);
            return;
        }

        let goal = self.goal.unwrap_or(current.pos);
        let tentative_g = current.g + 1;
        let mut nbuf = std::mem::take(&mut self.nbuf);
        let bounds = map.bounds();
        let neighbors = nbuf.cardinal(current.pos, |n| {
            bounds.contains(n) && map.tile(n) != TileState::Obstacle
        });

        for &np in neighbors {
            let Some(ni) = self.arena.idx(np) else {
                continue;
            };
            match self.arena.get_mut(ni) {
                Some(n) if n.closed => {}
                Some(n) if tentative_g < n.g => {
                    n.g = tentative_g;
                    n.h = self.algorithm.heuristic(np, goal);
                    n.f = n.g + n.h;
                    n.parent = Some(ci);
                    self.open.push(OpenEntry { idx: ni, f: n.f });
                }
                Some(_) => {}
                None => {
                    let h = self.algorithm.heuristic(np, goal);
                    let node = SearchNode::new(np, tentative_g, h, Some(ci));
                    self.arena.insert(node);
                    self.open.push(OpenEntry { idx: ni, f: node.f });
                    self.open_count += 1;
                }
            }
        }

        self.nbuf = nbuf;
    }

    fn reconstruct_path<M: TileMap>(&mut self, map: &mut M, goal_idx: usize) {
        self.path.clear();
        self.path.extend(self.arena.chain(goal_idx));
        self.path.reverse();
        for &p in &self.path {
            if !map.tile(p).is_endpoint() {
                map.set_tile(p, TileState::Path);
            }
        }
        self.path_length = self.path.len();
    }

    fn finish(&mut self, state: EngineState) {
        self.state = state;
        self.elapsed = self.started_at.map_or(Duration::ZERO, |t| t.elapsed());
        self.open.clear();
        self.open_count = 0;
        match state {
            EngineState::Completed => log::info!(
                "{} found a path of {} cells after exploring {} nodes in {:?}",
                self.algorithm,
                self.path_length,
                self.nodes_explored,
                self.elapsed
            ),
            _ => log::info!(
                "{} found no path after exploring {} nodes in {:?}",
                self.algorithm,
                self.nodes_explored,
                self.elapsed
            ),
        }
    }
}
