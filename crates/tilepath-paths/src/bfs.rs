use std::collections::VecDeque;

use tilepath_core::{Point, Range};

use crate::PathRange;
use crate::pathrange::{PathNode, UNREACHABLE};
use crate::traits::Pather;

/// Unit-step distances from a set of sources, produced by
/// [`PathRange::bfs_map`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    rng: Range,
    dist: Vec<i32>,
    reached: Vec<PathNode>,
}

impl DistanceMap {
    /// Distance at `p`, or [`UNREACHABLE`] if `p` was not reached or lies
    /// outside the range.
    pub fn at(&self, p: Point) -> i32 {
        match self.rng.index_of(p) {
            Some(i) => self.dist[i],
            None => UNREACHABLE,
        }
    }

    pub fn is_reachable(&self, p: Point) -> bool {
        self.at(p) != UNREACHABLE
    }

    /// Every reached cell, in non-decreasing order of distance.
    pub fn reached(&self) -> &[PathNode] {
        &self.reached
    }

    pub fn range(&self) -> Range {
        self.rng
    }
}

impl PathRange {
    /// Compute a multi-source breadth-first search distance map.
    ///
    /// Each step has cost 1. Expansion stops when the distance exceeds
    /// `max_dist`. Sources outside the range are ignored.
    pub fn bfs_map<P: Pather>(&self, pather: &P, sources: &[Point], max_dist: i32) -> DistanceMap {
        let mut dist = vec![UNREACHABLE; self.rng.len()];
        let mut reached = Vec::new();
        let mut queue: VecDeque<usize> = VecDeque::new();

        for &src in sources {
            if let Some(si) = self.idx(src) {
                if dist[si] != UNREACHABLE {
                    continue;
                }
                dist[si] = 0;
                queue.push_back(si);
                reached.push(PathNode { pos: src, cost: 0 });
            }
        }

        let mut nbuf: Vec<Point> = Vec::with_capacity(4);

        while let Some(ci) = queue.pop_front() {
            let current_dist = dist[ci];
            let cp = self.point(ci);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if dist[ni] != UNREACHABLE {
                    continue;
                }
                let nd = current_dist + 1;
                if nd > max_dist {
                    continue;
                }
                dist[ni] = nd;
                queue.push_back(ni);
                reached.push(PathNode { pos: np, cost: nd });
            }
        }

        DistanceMap {
            rng: self.rng,
            dist,
            reached,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Open rectangle, every in-range cell walkable.
    struct Open(Range);

    impl Pather for Open {
        fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
            buf.extend(p.neighbors_4().into_iter().filter(|&n| self.0.contains(n)));
        }
    }

    #[test]
    fn single_source_distances() {
        let rng = Range::sized(4, 3);
        let map = PathRange::new(rng).bfs_map(&Open(rng), &[Point::new(0, 0)], i32::MAX);
        assert_eq!(map.at(Point::new(0, 0)), 0);
        assert_eq!(map.at(Point::new(3, 2)), 5);
        assert_eq!(map.reached().len(), 12);
        assert!(map.reached().windows(2).all(|w| w[0].cost <= w[1].cost));
    }

    #[test]
    fn max_dist_bounds_expansion() {
        let rng = Range::sized(5, 5);
        let map = PathRange::new(rng).bfs_map(&Open(rng), &[Point::new(2, 2)], 1);
        assert_eq!(map.reached().len(), 5);
        assert!(!map.is_reachable(Point::new(0, 0)));
        assert_eq!(map.at(Point::new(9, 9)), UNREACHABLE);
    }

    #[test]
    fn multiple_sources_take_the_nearest() {
        let rng = Range::sized(7, 1);
        let map = PathRange::new(rng).bfs_map(
            &Open(rng),
            &[Point::new(0, 0), Point::new(6, 0), Point::new(6, 0)],
            i32::MAX,
        );
        assert_eq!(map.at(Point::new(3, 0)), 3);
        assert_eq!(map.at(Point::new(5, 0)), 1);
        assert_eq!(map.reached().len(), 7);
    }
}
