use tilepath_core::{Point, Range};

use crate::config::SearchConfig;

/// A position with an associated cost, returned from BFS map queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

/// Sentinel value meaning "unreachable" in distance maps.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Per-search scratch
// ---------------------------------------------------------------------------

pub(crate) const NO_PARENT: usize = usize::MAX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NodeState {
    Unseen,
    Open,
    Closed,
}

/// Cost bookkeeping for one cell during one search.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) h: i32,
    pub(crate) parent: usize,
    pub(crate) state: NodeState,
    /// Order in which the cell first entered the open set.
    pub(crate) seq: u64,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            h: 0,
            parent: NO_PARENT,
            state: NodeState::Unseen,
            seq: 0,
        }
    }
}

impl Node {
    #[inline]
    pub(crate) fn f(&self) -> i32 {
        self.g + self.h
    }
}

/// Scratch state owned by a single search, indexed by flat cell index.
/// Dropped when the search returns.
pub(crate) struct Scratch {
    pub(crate) nodes: Vec<Node>,
}

impl Scratch {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            nodes: vec![Node::default(); len],
        }
    }
}

/// Open-set entry, ordered for use in `BinaryHeap` (a max-heap).
///
/// The heap pops the smallest `f`, then the smallest `h`, then the cell that
/// was discovered first. Re-pushes after a cost improvement keep the cell's
/// original `seq`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) h: i32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .f
            .cmp(&self.f)
            .then(other.h.cmp(&self.h))
            .then(other.seq.cmp(&self.seq))
            .then(other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Entry point for searches on a grid rectangle.
///
/// `PathRange` holds only the rectangle and the search configuration. Each
/// query allocates its own scratch, so queries take `&self`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathRange {
    pub(crate) rng: Range,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) config: SearchConfig,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        Self::with_config(rng, SearchConfig::default())
    }

    pub fn with_config(rng: Range, config: SearchConfig) -> Self {
        Self { rng, config }
    }

    /// Replace the underlying range.
    pub fn set_range(&mut self, rng: Range) {
        self.rng = rng;
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        self.rng.index_of(p)
    }

    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        self.rng.point_at(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn entry(idx: usize, f: i32, h: i32, seq: u64) -> NodeRef {
        NodeRef { idx, f, h, seq }
    }

    #[test]
    fn heap_pops_lowest_f_then_lowest_h_then_oldest() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(0, 6, 4, 0));
        heap.push(entry(1, 5, 3, 1));
        heap.push(entry(2, 5, 1, 2));
        heap.push(entry(3, 5, 1, 3));
        heap.push(entry(4, 7, 0, 4));
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|e| e.idx)).collect();
        assert_eq!(order, vec![2, 3, 1, 0, 4]);
    }

    #[test]
    fn idx_round_trips_through_point() {
        let pr = PathRange::new(Range::new(3, 1, 8, 4));
        for p in pr.range() {
            let i = pr.idx(p).unwrap();
            assert_eq!(pr.point(i), p);
        }
        assert_eq!(pr.idx(Point::new(0, 0)), None);
    }

    #[test]
    fn set_range_keeps_config() {
        let cfg = SearchConfig::default().with_max_expansions(10);
        let mut pr = PathRange::with_config(Range::sized(5, 5), cfg);
        pr.set_range(Range::sized(20, 20));
        assert_eq!(pr.range(), Range::sized(20, 20));
        assert_eq!(pr.config(), cfg);
    }

    #[test]
    fn fresh_scratch_is_unseen() {
        let s = Scratch::new(4);
        assert!(s.nodes.iter().all(|n| n.state == NodeState::Unseen));
        assert!(s.nodes.iter().all(|n| n.parent == NO_PARENT));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn pathnode_round_trip() {
        let node = PathNode {
            pos: Point::new(3, 7),
            cost: 42,
        };
        let json = serde_json::to_string(&node).unwrap();
        let back: PathNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }

    #[test]
    fn pathrange_config_defaults_when_missing() {
        let json = r#"{"rng":{"min":{"x":1,"y":2},"max":{"x":10,"y":20}}}"#;
        let back: PathRange = serde_json::from_str(json).unwrap();
        assert_eq!(back.range(), Range::new(1, 2, 10, 20));
        assert_eq!(back.config(), SearchConfig::default());
    }
}
