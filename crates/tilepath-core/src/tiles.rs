//! The [`TileState`] of a single grid cell.

use std::fmt;

/// What occupies a grid cell.
///
/// `Visited` and `Path` are search annotations written by the pathfinding
/// engine; the other states are user edits.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileState {
    #[default]
    Empty,
    Start,
    Goal,
    Obstacle,
    Visited,
    Path,
}

impl TileState {
    /// Every state, in declaration order.
    pub const ALL: [TileState; 6] = [
        TileState::Empty,
        TileState::Start,
        TileState::Goal,
        TileState::Obstacle,
        TileState::Visited,
        TileState::Path,
    ];

    /// Whether the state is a search annotation (`Visited` or `Path`).
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(self, TileState::Visited | TileState::Path)
    }

    /// Whether the state is one of the two endpoints.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, TileState::Start | TileState::Goal)
    }

    /// The character used for this state in ASCII layouts.
    pub const fn glyph(self) -> char {
        match self {
            TileState::Empty => '.',
            TileState::Start => 'S',
            TileState::Goal => 'G',
            TileState::Obstacle => '#',
            TileState::Visited => 'o',
            TileState::Path => '*',
        }
    }

    /// Inverse of [`glyph`](TileState::glyph).
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(TileState::Empty),
            'S' => Some(TileState::Start),
            'G' => Some(TileState::Goal),
            '#' => Some(TileState::Obstacle),
            'o' => Some(TileState::Visited),
            '*' => Some(TileState::Path),
            _ => None,
        }
    }
}

impl fmt::Display for TileState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TileState::Empty => "empty",
            TileState::Start => "start",
            TileState::Goal => "goal",
            TileState::Obstacle => "obstacle",
            TileState::Visited => "visited",
            TileState::Path => "path",
        };
        f.write_str(name)
    }
}
