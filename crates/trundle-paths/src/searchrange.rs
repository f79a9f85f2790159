use trundle_core::{Point, Range};

use crate::direction::Direction;
use crate::edges::RunEdge;

/// Sentinel value meaning "unreachable" in route cost maps.
pub const UNREACHABLE: i32 = i32::MAX;

/// Table slots per cell: one per arrival direction.
pub(crate) const SLOTS: usize = 4;

// ---------------------------------------------------------------------------
// Internal node for the priority-queue search
// ---------------------------------------------------------------------------

#[derive(Clone, Default)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

/// Reference into the node array, ordered by `g` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) g: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest g first.
        other.g.cmp(&self.g)
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchRange
// ---------------------------------------------------------------------------

/// Central coordinator for run-constrained searches on a grid rectangle.
///
/// The search state is a `(cell, arrival direction)` pair, so every table
/// holds four slots per cell. `SearchRange` owns all of them (node
/// bookkeeping, the best-cost map, the edge scratch buffer) so that repeated
/// queries incur no allocations after warm-up; a generation counter makes
/// each query start from a logically fresh table.
pub struct SearchRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) cost_map: Vec<i32>,
    pub(crate) generation: u32,
    // shared scratch buffer for run-edge generation
    pub(crate) ebuf: Vec<RunEdge>,
}

impl SearchRange {
    /// Create a new `SearchRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let w = rng.width().max(0) as usize;
        let len = rng.len() * SLOTS;
        Self {
            rng,
            width: w,
            nodes: vec![Node::default(); len],
            cost_map: vec![UNREACHABLE; len],
            generation: 0,
            ebuf: Vec::with_capacity(2 * 8),
        }
    }

    /// Replace the underlying range, reallocating tables as needed.
    ///
    /// If the new size fits within existing capacity, tables are preserved
    /// and only the generation counter is bumped so stale entries are
    /// ignored. Otherwise tables are reallocated.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len() * SLOTS;
        let old_capacity = self.nodes.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;

        if new_len <= old_capacity {
            self.generation = self.generation.wrapping_add(1);
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;

        self.cost_map.clear();
        self.cost_map.resize(new_len, UNREACHABLE);
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Query the best cost at `p` found by the last search, minimized over
    /// the four arrival directions.
    ///
    /// Returns [`UNREACHABLE`] if the point is outside the range or no
    /// direction reached it.
    pub fn cost_at(&self, p: Point) -> i32 {
        match self.cell_idx(p) {
            Some(ci) => {
                let base = ci * SLOTS;
                self.cost_map[base..base + SLOTS]
                    .iter()
                    .copied()
                    .min()
                    .unwrap_or(UNREACHABLE)
            }
            None => UNREACHABLE,
        }
    }

    // -----------------------------------------------------------------------
    // Slot helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat cell index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn cell_idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a `(cell, direction)` state to its table slot.
    #[inline]
    pub(crate) fn slot(&self, p: Point, dir: Direction) -> Option<usize> {
        Some(self.cell_idx(p)? * SLOTS + dir.index())
    }

    /// The cell a table slot belongs to.
    #[inline]
    pub(crate) fn cell_of(&self, slot: usize) -> Point {
        let ci = slot / SLOTS;
        let x = (ci % self.width) as i32 + self.rng.min.x;
        let y = (ci / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }

    /// The arrival direction a table slot belongs to.
    #[inline]
    pub(crate) fn dir_of(&self, slot: usize) -> Direction {
        Direction::ALL[slot % SLOTS]
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SearchRange {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rng.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SearchRange {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let range = Range::deserialize(deserializer)?;
        Ok(SearchRange::new(range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_round_trip() {
        let sr = SearchRange::new(Range::new(0, 0, 7, 5));
        for p in sr.range() {
            for d in Direction::ALL {
                let s = sr.slot(p, d).unwrap();
                assert_eq!(sr.cell_of(s), p);
                assert_eq!(sr.dir_of(s), d);
            }
        }
        assert!(sr.slot(Point::new(7, 0), Direction::Up).is_none());
        assert!(sr.slot(Point::new(0, -1), Direction::Up).is_none());
    }

    #[test]
    fn set_range_smaller_preserves_capacity() {
        let mut sr = SearchRange::new(Range::new(0, 0, 20, 20));
        let original_cap = sr.nodes.len(); // 400 cells x 4 slots
        let gen_before = sr.generation;

        let small = Range::new(0, 0, 5, 5);
        sr.set_range(small);
        assert_eq!(sr.range(), small);
        assert_eq!(sr.nodes.len(), original_cap);
        assert_eq!(sr.width, 5);
        // Generation bumped so stale entries are ignored.
        assert_ne!(sr.generation, gen_before);
    }

    #[test]
    fn set_range_larger_reallocates() {
        let mut sr = SearchRange::new(Range::new(0, 0, 5, 5));
        let old_cap = sr.nodes.len();

        let big = Range::new(0, 0, 20, 20);
        sr.set_range(big);
        assert_eq!(sr.range(), big);
        assert!(sr.nodes.len() > old_cap);
        assert_eq!(sr.nodes.len(), 400 * SLOTS);
        assert_eq!(sr.cost_map.len(), 400 * SLOTS);
    }

    #[test]
    fn cost_at_outside_range_is_unreachable() {
        let sr = SearchRange::new(Range::new(0, 0, 3, 3));
        assert_eq!(sr.cost_at(Point::new(5, 5)), UNREACHABLE);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn search_range_round_trip() {
        let rng = Range::new(0, 0, 9, 4);
        let sr = SearchRange::new(rng);
        let json = serde_json::to_string(&sr).unwrap();
        let back: SearchRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back.range(), rng);
        // Tables are freshly initialized (not serialized).
        assert_eq!(back.generation, 0);
        assert_eq!(back.cost_map.len(), rng.len() * SLOTS);
    }
}
