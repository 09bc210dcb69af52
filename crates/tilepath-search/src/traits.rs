use tilepath_core::{Grid, Point, Range, TileState};

/// The grid abstraction the search engine reads and annotates.
///
/// Reads outside [`bounds`](TileMap::bounds) must return
/// [`TileState::Empty`] and writes there must be ignored.
pub trait TileMap {
    /// The rectangle of addressable tiles.
    fn bounds(&self) -> Range;

    /// State of the tile at `p`.
    fn tile(&self, p: Point) -> TileState;

    /// Overwrite the tile at `p`.
    fn set_tile(&mut self, p: Point, state: TileState);

    /// Revert every `Visited`/`Path` annotation to `Empty`.
    fn clear_search_marks(&mut self) {
        for p in self.bounds() {
            if self.tile(p).is_search_mark() {
                self.set_tile(p, TileState::Empty);
            }
        }
    }
}

impl TileMap for Grid {
    #[inline]
    fn bounds(&self) -> Range {
        Grid::bounds(self)
    }

    #[inline]
    fn tile(&self, p: Point) -> TileState {
        self.get(p)
    }

    #[inline]
    fn set_tile(&mut self, p: Point, state: TileState) {
        self.set(p, state);
    }

    fn clear_search_marks(&mut self) {
        Grid::clear_search_marks(self);
    }
}
