//! A walkability grid.
//!
//! [`WalkGrid`] stores one [`Tile`] per cell of a rectangle anchored at the
//! origin and implements [`Topology`] so the search engine can read it.

use tilepath_core::{Point, Range};
use tilepath_paths::Topology;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// Exists and can be walked on.
    #[default]
    Floor,
    /// Exists but blocks movement.
    Wall,
    /// Removed from the grid: not a neighbour of anything.
    Void,
}

impl Tile {
    #[inline]
    pub fn is_walkable(self) -> bool {
        self == Tile::Floor
    }

    #[inline]
    pub fn exists(self) -> bool {
        self != Tile::Void
    }
}

/// A 2D grid of [`Tile`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkGrid {
    tiles: Vec<Tile>,
    bounds: Range,
}

impl Default for WalkGrid {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

impl WalkGrid {
    pub const DEFAULT_WIDTH: i32 = 5;
    pub const DEFAULT_HEIGHT: i32 = 5;

    /// Create a new grid filled with [`Tile::Floor`]. Negative dimensions
    /// give an empty grid.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::sized(width, height);
        Self {
            tiles: vec![Tile::Floor; bounds.len()],
            bounds,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size as a Point (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Get the tile at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Tile> {
        self.bounds.index_of(p).map(|i| self.tiles[i])
    }

    /// Set the tile at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, tile: Tile) {
        if let Some(i) = self.bounds.index_of(p) {
            self.tiles[i] = tile;
        }
    }

    /// Fill the whole grid with `tile`.
    pub fn fill(&mut self, tile: Tile) {
        self.tiles.fill(tile);
    }

    /// Mark an existing cell as floor or wall. Returns `false` (and changes
    /// nothing) when `p` is out of bounds or removed.
    pub fn set_walkable(&mut self, p: Point, walkable: bool) -> bool {
        match self.at(p) {
            Some(t) if t.exists() => {
                self.set(p, if walkable { Tile::Floor } else { Tile::Wall });
                true
            }
            _ => false,
        }
    }

    /// Remove a cell from the grid. Returns whether a cell was removed.
    pub fn remove(&mut self, p: Point) -> bool {
        match self.at(p) {
            Some(t) if t.exists() => {
                self.set(p, Tile::Void);
                true
            }
            _ => false,
        }
    }

    /// Count how many cells hold `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Iterate over `(Point, Tile)` pairs in row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Point, Tile)> + '_ {
        self.bounds.iter().zip(self.tiles.iter().copied())
    }
}

impl Topology for WalkGrid {
    fn bounds(&self) -> Range {
        self.bounds
    }

    fn contains(&self, p: Point) -> bool {
        self.at(p).is_some_and(Tile::exists)
    }

    fn is_walkable(&self, p: Point) -> bool {
        self.at(p).is_some_and(Tile::is_walkable)
    }
}
