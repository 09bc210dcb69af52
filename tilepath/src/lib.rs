//! Tilepath: an interactive, step-by-step Dijkstra and A* visualiser core.
//!
//! The grid model lives in `tilepath-core` and the search engine in
//! `tilepath-search`; this crate ties them together into a [`Visualizer`]
//! session that a front end (or the bundled headless CLI) drives with
//! [`Command`]s and per-frame ticks.

pub mod driver;
pub mod error;
pub mod scenario;
pub mod status;
pub mod visualizer;

pub use driver::{drive, parse_point, place_endpoints};
pub use error::RunError;
pub use scenario::scatter_obstacles;
pub use status::{StatusEntry, StatusLog};
pub use visualizer::{Command, EditMode, GridStats, MAX_SPEED, MIN_SPEED, Visualizer};
