//! Stepped pathfinding over tile grids.
//!
//! This crate provides an incremental Dijkstra / A* engine for
//! four-directional, unit-cost grids. Instead of answering a query in one
//! call, [`PathfindingEngine`] advances a search a few steps per tick so a
//! presentation layer can animate the frontier:
//!
//! - **Dijkstra** ([`PathfindingEngine::start_dijkstra`]): uniform-cost
//!   expansion, priority `f = g`.
//! - **A\*** ([`PathfindingEngine::start_astar`]): priority `f = g + h` with
//!   the Manhattan heuristic.
//!
//! The engine reads and annotates any [`TileMap`]; [`tilepath_core::Grid`]
//! implements it.

mod config;
mod distance;
mod engine;
mod neighbors;
mod node;
mod traits;

pub use config::{ConfigError, DEFAULT_STEPS_PER_SECOND, EngineConfig};
pub use distance::manhattan;
pub use engine::{Algorithm, EngineState, PathfindingEngine, SearchStats};
pub use neighbors::Neighbors;
pub use node::{Chain, NodeArena, SearchNode};
pub use traits::TileMap;
