use tilepath_core::{Point, Range};

/// Minimal pathfinding interface: neighbour enumeration.
pub trait Pather {
    /// Append neighbours of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}

/// Full A* pather with a heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of distance from `from` to `to`.
    ///
    /// Must be consistent: closed cells are never reopened, so an estimate
    /// that violates the triangle inequality can yield a longer path.
    fn estimate(&self, from: Point, to: Point) -> i32;
}

/// The view the engine needs of a grid: which cells exist, which of them can
/// be walked on, and how they connect.
pub trait Topology {
    /// Bounding rectangle of every cell the grid can hold.
    fn bounds(&self) -> Range;

    /// Whether a cell exists at `p`.
    fn contains(&self, p: Point) -> bool;

    /// Whether the cell at `p` exists and is walkable.
    fn is_walkable(&self, p: Point) -> bool;

    /// Append the existing cells one cardinal step away from `p` into `buf`,
    /// regardless of walkability.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.contains(n) {
                buf.push(n);
            }
        }
    }
}

impl<T: Topology + ?Sized> Topology for &T {
    fn bounds(&self) -> Range {
        (**self).bounds()
    }

    fn contains(&self, p: Point) -> bool {
        (**self).contains(p)
    }

    fn is_walkable(&self, p: Point) -> bool {
        (**self).is_walkable(p)
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        (**self).neighbors(p, buf)
    }
}
