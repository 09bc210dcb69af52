//! The [`Grid`] type: a fixed-size 2D store of [`TileState`]s with start and
//! goal bookkeeping.
//!
//! Every accessor is total: reads outside the grid return
//! [`TileState::Empty`] and writes outside the grid are ignored.

use crate::geom::{Point, Range, RangeIter};
use crate::style::{Rgb, tile_color};
use crate::tiles::TileState;

/// Half the side of a rendered tile box.
pub const TILE_HALF_EXTENT: f32 = 0.45;

/// Height of a rendered tile box.
pub const TILE_HEIGHT: f32 = 0.15;

/// A 2D grid of tile states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Vec<TileState>,
    bounds: Range,
    start: Option<Point>,
    goal: Option<Point>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Side length of the standard square grid.
    pub const SIZE: i32 = 30;

    /// Create an empty `SIZE`×`SIZE` grid.
    pub fn new() -> Self {
        Self::with_size(Self::SIZE, Self::SIZE)
    }

    /// Create an empty grid of arbitrary dimensions. Negative sizes are
    /// treated as zero.
    pub fn with_size(width: i32, depth: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), depth.max(0));
        Self {
            tiles: vec![TileState::Empty; bounds.len()],
            bounds,
            start: None,
            goal: None,
        }
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn depth(&self) -> i32 {
        self.bounds.depth()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.x as usize) * (self.depth() as usize) + p.z as usize)
    }

    /// Read the tile at `p`.
    pub fn get(&self, p: Point) -> TileState {
        self.index(p)
            .map(|i| self.tiles[i])
            .unwrap_or_default()
    }

    /// Overwrite the tile at `p`.
    ///
    /// `Start` and `Goal` are routed through [`set_start`](Grid::set_start)
    /// and [`set_goal`](Grid::set_goal), so there is never more than one of
    /// each. Overwriting an endpoint with any other state removes that
    /// endpoint.
    pub fn set(&mut self, p: Point, state: TileState) {
        match state {
            TileState::Start => self.set_start(p),
            TileState::Goal => self.set_goal(p),
            _ => {
                if !self.contains(p) {
                    return;
                }
                if self.start == Some(p) {
                    self.start = None;
                }
                if self.goal == Some(p) {
                    self.goal = None;
                }
                self.put(p, state);
            }
        }
    }

    #[inline]
    fn put(&mut self, p: Point, state: TileState) {
        if let Some(i) = self.index(p) {
            self.tiles[i] = state;
        }
    }

    /// Move the start marker to `p`. The previous start cell becomes empty.
    pub fn set_start(&mut self, p: Point) {
        if !self.contains(p) {
            return;
        }
        self.clear_start();
        if self.goal == Some(p) {
            self.goal = None;
        }
        self.put(p, TileState::Start);
        self.start = Some(p);
    }

    /// Move the goal marker to `p`. The previous goal cell becomes empty.
    pub fn set_goal(&mut self, p: Point) {
        if !self.contains(p) {
            return;
        }
        self.clear_goal();
        if self.start == Some(p) {
            self.start = None;
        }
        self.put(p, TileState::Goal);
        self.goal = Some(p);
    }

    /// Remove the start marker, emptying its cell. No-op if unset.
    pub fn clear_start(&mut self) {
        if let Some(p) = self.start.take() {
            self.put(p, TileState::Empty);
        }
    }

    /// Remove the goal marker, emptying its cell. No-op if unset.
    pub fn clear_goal(&mut self) {
        if let Some(p) = self.goal.take() {
            self.put(p, TileState::Empty);
        }
    }

    #[inline]
    pub fn has_start(&self) -> bool {
        self.start.is_some()
    }

    #[inline]
    pub fn has_goal(&self) -> bool {
        self.goal.is_some()
    }

    /// Coordinates of the start marker, if any.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Coordinates of the goal marker, if any.
    #[inline]
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    /// Empty every cell and forget both endpoints.
    pub fn clear(&mut self) {
        self.tiles.fill(TileState::Empty);
        self.start = None;
        self.goal = None;
    }

    /// Revert every `Visited` and `Path` tile to `Empty`, returning how many
    /// tiles changed.
    pub fn clear_search_marks(&mut self) -> usize {
        let mut cleared = 0;
        for t in self.tiles.iter_mut().filter(|t| t.is_search_mark()) {
            *t = TileState::Empty;
            cleared += 1;
        }
        cleared
    }

    /// Number of tiles in `state`.
    pub fn count(&self, state: TileState) -> usize {
        self.tiles.iter().filter(|&&t| t == state).count()
    }

    /// Display colour of the tile at `p`.
    #[inline]
    pub fn color_at(&self, p: Point) -> Rgb {
        tile_color(self.get(p))
    }

    /// World-space centre of tile `p`, with the grid centred on the origin.
    pub fn tile_world_position(&self, p: Point) -> [f32; 3] {
        let x = p.x as f32 - self.width() as f32 / 2.0 + 0.5;
        let z = p.z as f32 - self.depth() as f32 / 2.0 + 0.5;
        [x, 0.0, z]
    }

    /// World-space bounding box `(min, max)` of tile `p`.
    pub fn tile_bounds(&self, p: Point) -> ([f32; 3], [f32; 3]) {
        let [cx, _, cz] = self.tile_world_position(p);
        (
            [cx - TILE_HALF_EXTENT, 0.0, cz - TILE_HALF_EXTENT],
            [cx + TILE_HALF_EXTENT, TILE_HEIGHT, cz + TILE_HALF_EXTENT],
        )
    }

    /// Row-major iterator over `(Point, TileState)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.bounds.iter(),
        }
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Point, TileState)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    inner: RangeIter,
}

impl Iterator for GridIter<'_> {
    type Item = (Point, TileState);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        Some((p, self.grid.get(p)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let g = Grid::new();
        assert_eq!(g.width(), Grid::SIZE);
        assert_eq!(g.depth(), Grid::SIZE);
        assert_eq!(g.count(TileState::Empty), 900);
        assert!(!g.has_start());
        assert!(!g.has_goal());
    }

    #[test]
    fn out_of_range_is_total() {
        let mut g = Grid::new();
        for p in [Point::new(-1, 0), Point::new(0, -1), Point::new(30, 0), Point::new(0, 30)] {
            g.set(p, TileState::Obstacle);
            assert_eq!(g.get(p), TileState::Empty);
        }
        assert_eq!(g.count(TileState::Obstacle), 0);

        g.set_start(Point::new(99, 99));
        g.set_goal(Point::new(-5, 3));
        assert!(!g.has_start());
        assert!(!g.has_goal());
    }

    #[test]
    fn set_and_get() {
        let mut g = Grid::with_size(4, 3);
        g.set(Point::new(3, 2), TileState::Obstacle);
        assert_eq!(g.get(Point::new(3, 2)), TileState::Obstacle);
        assert_eq!(g.get(Point::new(2, 3)), TileState::Empty);
    }

    #[test]
    fn single_start_for_every_pair() {
        let mut g = Grid::with_size(6, 6);
        let cells: Vec<_> = g.bounds().iter().collect();
        for &a in &cells {
            for &b in &cells {
                g.clear();
                g.set_start(a);
                g.set_start(b);
                assert_eq!(g.count(TileState::Start), 1);
                assert_eq!(g.get(b), TileState::Start);
                assert_eq!(g.start(), Some(b));
                if a != b {
                    assert_eq!(g.get(a), TileState::Empty);
                }
            }
        }
    }

    #[test]
    fn set_goal_moves_marker() {
        let mut g = Grid::new();
        g.set_goal(Point::new(1, 1));
        g.set_goal(Point::new(2, 2));
        assert_eq!(g.get(Point::new(1, 1)), TileState::Empty);
        assert_eq!(g.get(Point::new(2, 2)), TileState::Goal);
        assert_eq!(g.count(TileState::Goal), 1);
        assert_eq!(g.goal(), Some(Point::new(2, 2)));
    }

    #[test]
    fn start_over_goal_displaces_goal() {
        let mut g = Grid::new();
        g.set_goal(Point::new(3, 3));
        g.set_start(Point::new(3, 3));
        assert!(!g.has_goal());
        assert_eq!(g.get(Point::new(3, 3)), TileState::Start);

        // A later goal elsewhere must not wipe the start.
        g.set_goal(Point::new(4, 4));
        assert_eq!(g.get(Point::new(3, 3)), TileState::Start);
    }

    #[test]
    fn clear_endpoints() {
        let mut g = Grid::new();
        g.clear_start();
        g.clear_goal();

        g.set_start(Point::new(0, 0));
        g.set_goal(Point::new(5, 5));
        g.clear_start();
        g.clear_goal();
        assert!(!g.has_start());
        assert!(!g.has_goal());
        assert_eq!(g.get(Point::new(0, 0)), TileState::Empty);
        assert_eq!(g.get(Point::new(5, 5)), TileState::Empty);
    }

    #[test]
    fn clear_resets_everything() {
        let mut g = Grid::new();
        g.set_start(Point::new(0, 0));
        g.set_goal(Point::new(1, 0));
        g.set(Point::new(2, 2), TileState::Obstacle);
        g.set(Point::new(3, 3), TileState::Visited);
        g.clear();
        assert_eq!(g.count(TileState::Empty), 900);
        assert!(!g.has_start());
        assert!(!g.has_goal());
    }

    #[test]
    fn clear_search_marks_keeps_edits() {
        let mut g = Grid::with_size(5, 5);
        g.set_start(Point::new(0, 0));
        g.set_goal(Point::new(4, 4));
        g.set(Point::new(2, 2), TileState::Obstacle);
        g.set(Point::new(1, 0), TileState::Visited);
        g.set(Point::new(2, 0), TileState::Path);
        assert_eq!(g.clear_search_marks(), 2);
        assert_eq!(g.get(Point::new(0, 0)), TileState::Start);
        assert_eq!(g.get(Point::new(4, 4)), TileState::Goal);
        assert_eq!(g.get(Point::new(2, 2)), TileState::Obstacle);
        assert_eq!(g.count(TileState::Visited) + g.count(TileState::Path), 0);
    }

    #[test]
    fn world_geometry() {
        let g = Grid::new();
        assert_eq!(g.tile_world_position(Point::new(0, 0)), [-14.5, 0.0, -14.5]);
        assert_eq!(g.tile_world_position(Point::new(29, 15)), [14.5, 0.0, 0.5]);
        let (min, max) = g.tile_bounds(Point::new(15, 15));
        assert!((min[0] - 0.05).abs() < 1e-6);
        assert!((max[0] - 0.95).abs() < 1e-6);
        assert_eq!(max[1], TILE_HEIGHT);
    }

    #[test]
    fn iter_covers_grid() {
        let mut g = Grid::with_size(3, 2);
        g.set(Point::new(1, 0), TileState::Obstacle);
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 6);
        assert_eq!(items[1], (Point::new(1, 0), TileState::Obstacle));
    }

    #[test]
    fn set_keeps_endpoint_bookkeeping() {
        let mut g = Grid::with_size(5, 5);
        g.set(Point::new(0, 0), TileState::Start);
        g.set(Point::new(1, 1), TileState::Start);
        assert_eq!(g.count(TileState::Start), 1);
        assert_eq!(g.start(), Some(Point::new(1, 1)));

        g.set(Point::new(4, 4), TileState::Goal);
        assert_eq!(g.goal(), Some(Point::new(4, 4)));

        // Overwriting an endpoint drops it, and a later clear leaves the
        // new tile alone.
        g.set(Point::new(1, 1), TileState::Obstacle);
        assert!(!g.has_start());
        g.clear_start();
        assert_eq!(g.get(Point::new(1, 1)), TileState::Obstacle);

        g.set(Point::new(4, 4), TileState::Empty);
        assert!(!g.has_goal());
        assert_eq!(g.count(TileState::Goal), 0);
    }

    #[test]
    fn colors_follow_state() {
        let mut g = Grid::with_size(3, 3);
        g.set_start(Point::new(0, 0));
        g.set(Point::new(1, 1), TileState::Obstacle);
        assert_eq!(g.color_at(Point::new(0, 0)), tile_color(TileState::Start));
        assert_eq!(g.color_at(Point::new(1, 1)), tile_color(TileState::Obstacle));
        assert_eq!(g.color_at(Point::new(9, 9)), tile_color(TileState::Empty));
    }
}
