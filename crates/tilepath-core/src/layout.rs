//! ASCII layouts: building a [`Grid`] from text and printing one back.
//!
//! Each line is one `z` row and each character one `x` column, using the
//! glyphs of [`TileState::glyph`]:
//!
//! ```text
//! S..#....
//! ...#.##.
//! .#...#.G
//! ```

use std::fmt;
use std::str::FromStr;

use crate::geom::Point;
use crate::grid::Grid;
use crate::tiles::TileState;

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The layout has no cells.
    Empty,
    /// Row `z` has a different width than the first row.
    InconsistentWidth { z: i32, expected: i32, found: i32 },
    /// A character outside the tile alphabet was found.
    InvalidGlyph { ch: char, pos: Point },
    /// A second start or goal marker was found.
    DuplicateEndpoint { state: TileState, pos: Point },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("layout: no cells"),
            Self::InconsistentWidth { z, expected, found } => write!(
                f,
                "layout: row {z} is {found} cells wide, expected {expected}"
            ),
            Self::InvalidGlyph { ch, pos } => write!(f, "layout: invalid glyph {ch:?} at {pos}"),
            Self::DuplicateEndpoint { state, pos } => {
                write!(f, "layout: second {state} marker at {pos}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Parse a layout into a new grid sized to the text.
///
/// Surrounding whitespace is trimmed from the whole string and from each
/// line; blank lines are rejected through the width check.
pub fn parse_layout(s: &str) -> Result<Grid, LayoutError> {
    let rows: Vec<&str> = s.trim().lines().map(str::trim).collect();
    let width = rows.first().map_or(0, |r| r.chars().count()) as i32;
    if width == 0 {
        return Err(LayoutError::Empty);
    }

    for (z, row) in rows.iter().enumerate() {
        let found = row.chars().count() as i32;
        if found != width {
            return Err(LayoutError::InconsistentWidth {
                z: z as i32,
                expected: width,
                found,
            });
        }
    }

    let mut grid = Grid::with_size(width, rows.len() as i32);
    for (z, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            let pos = Point::new(x as i32, z as i32);
            let state = TileState::from_glyph(ch).ok_or(LayoutError::InvalidGlyph { ch, pos })?;
            match state {
                TileState::Start if grid.has_start() => {
                    return Err(LayoutError::DuplicateEndpoint { state, pos });
                }
                TileState::Goal if grid.has_goal() => {
                    return Err(LayoutError::DuplicateEndpoint { state, pos });
                }
                TileState::Start => grid.set_start(pos),
                TileState::Goal => grid.set_goal(pos),
                other => grid.set(pos, other),
            }
        }
    }
    Ok(grid)
}

impl FromStr for Grid {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_layout(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for z in 0..self.depth() {
            if z > 0 {
                f.write_str("\n")?;
            }
            for x in 0..self.width() {
                write!(f, "{}", self.get(Point::new(x, z)).glyph())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
S..#
.#.#
...G";

    #[test]
    fn parse_and_size() {
        let g = parse_layout(ROOM).unwrap();
        assert_eq!(g.width(), 4);
        assert_eq!(g.depth(), 3);
        assert_eq!(g.start(), Some(Point::new(0, 0)));
        assert_eq!(g.goal(), Some(Point::new(3, 2)));
        assert_eq!(g.get(Point::new(3, 0)), TileState::Obstacle);
        assert_eq!(g.count(TileState::Obstacle), 3);
    }

    #[test]
    fn display_matches_input() {
        let g: Grid = ROOM.parse().unwrap();
        assert_eq!(g.to_string(), ROOM);
    }

    #[test]
    fn indented_layout_is_accepted() {
        let g = parse_layout(
            "
            S.
            .G
            ",
        )
        .unwrap();
        assert_eq!(g.width(), 2);
        assert_eq!(g.goal(), Some(Point::new(1, 1)));
    }

    #[test]
    fn inconsistent_width_error() {
        assert_eq!(
            parse_layout("..\n..."),
            Err(LayoutError::InconsistentWidth {
                z: 1,
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn invalid_glyph_error() {
        let err = parse_layout("..\n.x").unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidGlyph {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
        assert_eq!(err.to_string(), "layout: invalid glyph 'x' at (1, 1)");
    }

    #[test]
    fn duplicate_endpoints_error() {
        assert!(matches!(
            parse_layout("S.S"),
            Err(LayoutError::DuplicateEndpoint {
                state: TileState::Start,
                ..
            })
        ));
        assert!(matches!(
            parse_layout("G\nG"),
            Err(LayoutError::DuplicateEndpoint {
                state: TileState::Goal,
                ..
            })
        ));
    }

    #[test]
    fn empty_layout_error() {
        assert_eq!(parse_layout("   \n "), Err(LayoutError::Empty));
    }
}
