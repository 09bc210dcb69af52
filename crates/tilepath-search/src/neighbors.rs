use tilepath_core::Point;

/// Cached neighbour computation helper.
///
/// Enumerates the four axis-aligned neighbours of a tile (up, down, left,
/// right), filtered by a predicate. Diagonals are never produced.
#[derive(Debug)]
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the cardinal neighbours of `p`, keeping only those for which
    /// `keep` returns `true`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for n in p.neighbors_4() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_order_and_filter() {
        let mut nb = Neighbors::new();
        let p = Point::new(1, 1);
        assert_eq!(
            nb.cardinal(p, |_| true),
            &[
                Point::new(1, 0),
                Point::new(1, 2),
                Point::new(0, 1),
                Point::new(2, 1)
            ]
        );
        assert_eq!(nb.cardinal(p, |n| n.x >= 1 && n.z >= 1), &[Point::new(1, 2), Point::new(2, 1)]);
    }
}
