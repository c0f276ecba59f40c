use std::collections::BinaryHeap;

use log::{debug, trace};
use tilepath_core::Point;

use crate::PathRange;
use crate::pathrange::{NO_PARENT, NodeRef, NodeState, Scratch};
use crate::traits::AstarPather;

/// How an A* search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// The goal was reached.
    Found,
    /// The frontier emptied without reaching the goal, or an endpoint was
    /// outside the range.
    Exhausted,
    /// The search stopped at [`SearchConfig::max_expansions`](crate::SearchConfig).
    LimitReached,
}

/// Outcome of [`PathRange::astar_search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub status: SearchStatus,
    /// Start to goal inclusive; `Some` exactly when `status` is `Found`.
    pub path: Option<Vec<Point>>,
    /// Number of cells moved to the closed set.
    pub expanded: usize,
    /// Largest open-set size seen, stale heap entries included.
    pub frontier_peak: usize,
}

impl SearchReport {
    fn failed(status: SearchStatus, expanded: usize, frontier_peak: usize) -> Self {
        Self {
            status,
            path: None,
            expanded,
            frontier_peak,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        self.status == SearchStatus::Found
    }

    /// Number of steps along the path, if one was found.
    pub fn steps(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }
}

impl PathRange {
    /// Compute the shortest path from `from` to `to` using A*.
    ///
    /// Returns the full path (including both endpoints) or `None` if no path
    /// exists within the current range. Endpoints are not checked against the
    /// pather: use [`find_path`](Self::find_path) for a validated search.
    pub fn astar_path<P: AstarPather>(&self, pather: &P, from: Point, to: Point) -> Option<Vec<Point>> {
        self.astar_search(pather, from, to).path
    }

    /// Run A* and report how the search went along with the path.
    pub fn astar_search<P: AstarPather>(&self, pather: &P, from: Point, to: Point) -> SearchReport {
        trace!("astar: {from} -> {to} in {}", self.rng);

        let (Some(start_idx), Some(goal_idx)) = (self.idx(from), self.idx(to)) else {
            debug!("astar: endpoint outside {}", self.rng);
            return SearchReport::failed(SearchStatus::Exhausted, 0, 0);
        };

        if start_idx == goal_idx {
            return SearchReport {
                status: SearchStatus::Found,
                path: Some(vec![from]),
                expanded: 0,
                frontier_peak: 1,
            };
        }

        let mut scratch = Scratch::new(self.rng.len());
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        let mut seq: u64 = 0;

        {
            let node = &mut scratch.nodes[start_idx];
            node.g = 0;
            node.h = pather.estimate(from, to);
            node.parent = NO_PARENT;
            node.state = NodeState::Open;
            node.seq = seq;
            open.push(NodeRef {
                idx: start_idx,
                f: node.f(),
                h: node.h,
                seq,
            });
        }

        let mut nbuf: Vec<Point> = Vec::with_capacity(4);
        let mut expanded = 0;
        let mut frontier_peak = open.len();

        let status = loop {
            let Some(current) = open.pop() else {
                break SearchStatus::Exhausted;
            };

            let ci = current.idx;
            let node = scratch.nodes[ci];

            // Skip entries superseded by a cheaper push or already closed.
            if node.state != NodeState::Open || node.f() != current.f {
                continue;
            }

            if ci == goal_idx {
                break SearchStatus::Found;
            }

            if let Some(max) = self.config.max_expansions {
                if expanded >= max {
                    break SearchStatus::LimitReached;
                }
            }

            scratch.nodes[ci].state = NodeState::Closed;
            expanded += 1;
            let cp = self.point(ci);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let n = &mut scratch.nodes[ni];
                if n.state == NodeState::Closed {
                    continue;
                }

                let tentative_g = node.g + pather.cost(cp, np);
                if n.state == NodeState::Open && tentative_g >= n.g {
                    continue;
                }

                if n.state == NodeState::Unseen {
                    seq += 1;
                    n.seq = seq;
                }
                n.g = tentative_g;
                n.h = pather.estimate(np, to);
                n.parent = ci;
                n.state = NodeState::Open;

                open.push(NodeRef {
                    idx: ni,
                    f: n.f(),
                    h: n.h,
                    seq: n.seq,
                });
            }
            frontier_peak = frontier_peak.max(open.len());
        };

        match status {
            SearchStatus::Found => SearchReport {
                status,
                path: Some(self.reconstruct(&scratch, goal_idx)),
                expanded,
                frontier_peak,
            },
            SearchStatus::Exhausted => {
                debug!("astar: no path {from} -> {to} after {expanded} expansions");
                SearchReport::failed(status, expanded, frontier_peak)
            }
            SearchStatus::LimitReached => {
                debug!("astar: gave up {from} -> {to} at {expanded} expansions");
                SearchReport::failed(status, expanded, frontier_peak)
            }
        }
    }

    /// Walk parent links back from `goal_idx`, then reverse into start → goal order.
    fn reconstruct(&self, scratch: &Scratch, goal_idx: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != NO_PARENT && path.len() < scratch.nodes.len() {
            path.push(self.point(ci));
            ci = scratch.nodes[ci].parent;
        }
        path.reverse();
        path
    }
}
