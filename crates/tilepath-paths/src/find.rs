use log::debug;
use tilepath_core::Point;

use crate::PathRange;
use crate::astar::SearchStatus;
use crate::error::PathError;
use crate::traits::Topology;
use crate::walk::WalkPather;

impl PathRange {
    /// Shortest 4-connected walkable path from `start` to `goal`, both
    /// inclusive.
    ///
    /// Returns `Ok(None)` when the goal cannot be reached, including when the
    /// configured expansion limit is hit first. Endpoints that are not cells
    /// of `topo` (or lie outside this range) and endpoints that are not
    /// walkable are rejected with a [`PathError`] before searching.
    pub fn find_path<T: Topology + ?Sized>(
        &self,
        topo: &T,
        start: Point,
        goal: Point,
    ) -> Result<Option<Vec<Point>>, PathError> {
        for p in [start, goal] {
            if !self.rng.contains(p) || !topo.contains(p) {
                return Err(PathError::NotInGrid(p));
            }
            if !topo.is_walkable(p) {
                return Err(PathError::Unwalkable(p));
            }
        }

        let report = self.astar_search(&WalkPather::new(topo), start, goal);
        if report.status == SearchStatus::LimitReached {
            debug!(
                "find_path: {start} -> {goal} treated as unreachable after {} expansions",
                report.expanded
            );
        }
        Ok(report.path)
    }
}

/// One-off validated search over the whole of `topo`, with default settings.
pub fn find_path<T: Topology + ?Sized>(
    topo: &T,
    start: Point,
    goal: Point,
) -> Result<Option<Vec<Point>>, PathError> {
    PathRange::new(topo.bounds()).find_path(topo, start, goal)
}
