use tilepath_core::Point;

use crate::distance::manhattan;
use crate::traits::{AstarPather, Pather, Topology, WeightedPather};

/// Adapts a [`Topology`] to the pather traits: walkable 4-neighbours,
/// unit step cost, Manhattan estimate.
#[derive(Debug, Clone, Copy)]
pub struct WalkPather<'a, T: ?Sized> {
    topo: &'a T,
}

impl<'a, T: Topology + ?Sized> WalkPather<'a, T> {
    pub fn new(topo: &'a T) -> Self {
        Self { topo }
    }

    pub fn topology(&self) -> &'a T {
        self.topo
    }
}

impl<T: Topology + ?Sized> Pather for WalkPather<'_, T> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        self.topo.neighbors(p, buf);
        buf.retain(|&n| self.topo.is_walkable(n));
    }
}

impl<T: Topology + ?Sized> WeightedPather for WalkPather<'_, T> {
    fn cost(&self, _from: Point, _to: Point) -> i32 {
        1
    }
}

impl<T: Topology + ?Sized> AstarPather for WalkPather<'_, T> {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}
