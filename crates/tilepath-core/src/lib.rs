//! **tilepath-core**: grid model for the tilepath pathfinding engine.
//!
//! This crate provides the types shared by the search engine and any
//! presentation layer: geometry primitives, tile states and their display
//! colours, the fixed-size tile [`Grid`], and ASCII layouts.

pub mod geom;
pub mod grid;
pub mod layout;
pub mod style;
pub mod tiles;

pub use geom::{Point, Range};
pub use grid::Grid;
pub use layout::{LayoutError, parse_layout};
pub use style::{Rgb, tile_color};
pub use tiles::TileState;
