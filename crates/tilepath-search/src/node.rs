use tilepath_core::{Point, Range};

// ---------------------------------------------------------------------------
// SearchNode
// ---------------------------------------------------------------------------

/// The search record of one discovered tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub pos: Point,
    /// Cost of the best known path from the start.
    pub g: i32,
    /// Heuristic estimate to the goal; always 0 for Dijkstra.
    pub h: i32,
    /// Priority, `g + h`.
    pub f: i32,
    /// Arena index of the predecessor, `None` for the start node.
    pub parent: Option<usize>,
    pub(crate) closed: bool,
}

impl SearchNode {
    pub(crate) fn new(pos: Point, g: i32, h: i32, parent: Option<usize>) -> Self {
        Self {
            pos,
            g,
            h,
            f: g + h,
            parent,
            closed: false,
        }
    }

    /// Whether the node has already been expanded.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

// ---------------------------------------------------------------------------
// OpenEntry
// ---------------------------------------------------------------------------

/// A value record in the open set, ordered by `f` for use in `BinaryHeap`.
///
/// Entries are never updated in place: a cheaper path pushes a fresh entry
/// and the superseded one is skipped when popped.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) struct OpenEntry {
    pub(crate) idx: usize,
    pub(crate) f: i32,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f)
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// NodeArena
// ---------------------------------------------------------------------------

/// Owns every [`SearchNode`] of one search, keyed by a stable index derived
/// from the tile coordinate (`x * depth + z` relative to the range origin).
///
/// Predecessor links are indices into the arena, so releasing a search is a
/// single [`clear`](NodeArena::clear).
#[derive(Debug, Default)]
pub struct NodeArena {
    rng: Range,
    nodes: Vec<Option<SearchNode>>,
    len: usize,
}

impl NodeArena {
    /// Create an arena covering `rng`.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            nodes: vec![None; rng.len()],
            len: 0,
        }
    }

    /// Drop every node and cover `rng` from now on.
    pub fn reset(&mut self, rng: Range) {
        self.rng = rng;
        self.nodes.clear();
        self.nodes.resize(rng.len(), None);
        self.len = 0;
    }

    /// Drop every node, keeping the covered range.
    pub fn clear(&mut self) {
        self.nodes.fill(None);
        self.len = 0;
    }

    /// The covered range.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Number of live nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Convert a `Point` to an arena index. Returns `None` if out of range.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let z = (p.z - self.rng.min.z) as usize;
        Some(x * self.rng.depth() as usize + z)
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&SearchNode> {
        self.nodes.get(idx).and_then(Option::as_ref)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, idx: usize) -> Option<&mut SearchNode> {
        self.nodes.get_mut(idx).and_then(Option::as_mut)
    }

    /// The node recorded for `p`, if it has been discovered.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&SearchNode> {
        self.idx(p).and_then(|i| self.get(i))
    }

    /// Store `node` under its coordinate, returning its index.
    pub(crate) fn insert(&mut self, node: SearchNode) -> Option<usize> {
        let i = self.idx(node.pos)?;
        let slot = &mut self.nodes[i];
        if slot.is_none() {
            self.len += 1;
        }
        *slot = Some(node);
        Some(i)
    }

    /// Walk predecessor links from `idx` back to the root, yielding the
    /// visited coordinates goal-first.
    pub fn chain(&self, idx: usize) -> Chain<'_> {
        Chain {
            arena: self,
            next: Some(idx),
        }
    }
}

/// Iterator over a predecessor chain, see [`NodeArena::chain`].
pub struct Chain<'a> {
    arena: &'a NodeArena,
    next: Option<usize>,
}

impl Iterator for Chain<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let node = self.arena.get(self.next?)?;
        self.next = node.parent;
        Some(node.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn index_is_column_major() {
        let arena = NodeArena::new(Range::new(0, 0, 30, 30));
        assert_eq!(arena.idx(Point::new(0, 0)), Some(0));
        assert_eq!(arena.idx(Point::new(0, 29)), Some(29));
        assert_eq!(arena.idx(Point::new(1, 0)), Some(30));
        assert_eq!(arena.idx(Point::new(30, 0)), None);
        assert_eq!(arena.idx(Point::new(0, -1)), None);
    }

    #[test]
    fn insert_and_chain() {
        let mut arena = NodeArena::new(Range::new(0, 0, 4, 4));
        let a = arena.insert(SearchNode::new(Point::new(0, 0), 0, 0, None)).unwrap();
        let b = arena.insert(SearchNode::new(Point::new(1, 0), 1, 0, Some(a))).unwrap();
        let c = arena.insert(SearchNode::new(Point::new(1, 1), 2, 0, Some(b))).unwrap();
        assert_eq!(arena.len(), 3);
        let chain: Vec<_> = arena.chain(c).collect();
        assert_eq!(chain, vec![Point::new(1, 1), Point::new(1, 0), Point::new(0, 0)]);

        // Overwriting a slot does not grow the arena.
        arena.insert(SearchNode::new(Point::new(1, 1), 5, 0, Some(a)));
        assert_eq!(arena.len(), 3);

        arena.clear();
        assert!(arena.is_empty());
        assert!(arena.at(Point::new(0, 0)).is_none());
    }

    #[test]
    fn insert_out_of_range_is_rejected() {
        let mut arena = NodeArena::new(Range::new(0, 0, 2, 2));
        assert_eq!(arena.insert(SearchNode::new(Point::new(5, 5), 0, 0, None)), None);
        assert!(arena.is_empty());
    }

    #[test]
    fn open_entries_pop_min_first() {
        let mut heap = BinaryHeap::new();
        for (idx, f) in [(0, 5), (1, 2), (2, 9), (3, 2)] {
            heap.push(OpenEntry { idx, f });
        }
        let fs: Vec<_> = std::iter::from_fn(|| heap.pop().map(|e| e.f)).collect();
        assert_eq!(fs, vec![2, 2, 5, 9]);
    }

    #[test]
    fn reset_resizes() {
        let mut arena = NodeArena::new(Range::new(0, 0, 2, 2));
        arena.reset(Range::new(0, 0, 10, 10));
        assert_eq!(arena.range().len(), 100);
        assert_eq!(arena.idx(Point::new(9, 9)), Some(99));
    }
}
