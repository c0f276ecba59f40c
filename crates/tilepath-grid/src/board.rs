//! Start/goal selection and the edit lock around a search.
//!
//! A [`Board`] owns a [`WalkGrid`] and the two selected endpoints. Running
//! [`execute`](Board::execute) successfully locks the board: the caller is
//! expected to move an agent along the returned path and then call
//! [`unlock`](Board::unlock). While locked, edits and selections fail with
//! [`BoardError::Locked`].

use std::fmt;

use log::debug;
use tilepath_core::Point;
use tilepath_paths::{PathError, PathRange, SearchConfig, Topology};

use crate::grid::WalkGrid;
use crate::layout::{self, Layout};

#[derive(Debug, Clone)]
pub struct Board {
    grid: WalkGrid,
    finder: PathRange,
    start: Option<Point>,
    goal: Option<Point>,
    locked: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(WalkGrid::DEFAULT_WIDTH, WalkGrid::DEFAULT_HEIGHT)
    }
}

impl Board {
    /// An all-floor board with nothing selected.
    pub fn new(width: i32, height: i32) -> Self {
        Self::from_grid(WalkGrid::new(width, height))
    }

    pub fn from_grid(grid: WalkGrid) -> Self {
        Self {
            finder: PathRange::new(grid.bounds()),
            grid,
            start: None,
            goal: None,
            locked: false,
        }
    }

    /// Build a board from a parsed layout, selecting its markers.
    pub fn from_layout(layout: Layout) -> Self {
        let mut board = Self::from_grid(layout.grid);
        board.start = layout.start;
        board.goal = layout.goal;
        board
    }

    pub fn set_search_config(&mut self, config: SearchConfig) {
        self.finder.set_config(config);
    }

    /// Replace the grid with a fresh all-floor one. Clears the selection and
    /// the lock.
    pub fn reset(&mut self, width: i32, height: i32) {
        self.grid = WalkGrid::new(width, height);
        self.finder.set_range(self.grid.bounds());
        self.start = None;
        self.goal = None;
        self.locked = false;
        debug!("board: reset to {width}x{height}");
    }

    #[inline]
    pub fn grid(&self) -> &WalkGrid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Whether both start and goal are selected.
    pub fn has_endpoints(&self) -> bool {
        self.start.is_some() && self.goal.is_some()
    }

    /// Select the start cell, replacing any previous start.
    pub fn select_start(&mut self, p: Point) -> Result<(), BoardError> {
        self.check_endpoint(p)?;
        debug!("board: start {:?} -> {p}", self.start);
        self.start = Some(p);
        Ok(())
    }

    /// Select the goal cell, replacing any previous goal.
    pub fn select_goal(&mut self, p: Point) -> Result<(), BoardError> {
        self.check_endpoint(p)?;
        debug!("board: goal {:?} -> {p}", self.goal);
        self.goal = Some(p);
        Ok(())
    }

    /// Clear both endpoints.
    pub fn deselect(&mut self) {
        self.start = None;
        self.goal = None;
    }

    /// Remove a cell from the grid, dropping it from the selection.
    /// Returns whether a cell was removed.
    pub fn remove_cell(&mut self, p: Point) -> Result<bool, BoardError> {
        self.check_unlocked()?;
        let removed = self.grid.remove(p);
        if removed {
            self.forget(p);
        }
        Ok(removed)
    }

    /// Mark a cell as floor or wall. A cell that becomes a wall is dropped
    /// from the selection. Returns whether the cell exists.
    pub fn set_walkable(&mut self, p: Point, walkable: bool) -> Result<bool, BoardError> {
        self.check_unlocked()?;
        let changed = self.grid.set_walkable(p, walkable);
        if changed && !walkable {
            self.forget(p);
        }
        Ok(changed)
    }

    /// Re-enable edits after the caller has finished with a path.
    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Search for a path between the selected endpoints.
    ///
    /// On success the board locks and the path is returned. When no path
    /// exists the selection is cleared, the board stays unlocked and
    /// `Ok(None)` is returned.
    pub fn execute(&mut self) -> Result<Option<Vec<Point>>, BoardError> {
        self.check_unlocked()?;
        let (Some(start), Some(goal)) = (self.start, self.goal) else {
            return Err(BoardError::MissingEndpoints);
        };

        match self.finder.find_path(&self.grid, start, goal)? {
            Some(path) => {
                debug!("board: path {start} -> {goal}, {} cells", path.len());
                self.locked = true;
                Ok(Some(path))
            }
            None => {
                debug!("board: no path {start} -> {goal}");
                self.deselect();
                self.locked = false;
                Ok(None)
            }
        }
    }

    /// Render the board in layout syntax with `path` overlaid.
    pub fn render(&self, path: &[Point]) -> String {
        layout::render(&self.grid, self.start, self.goal, path)
    }

    fn check_unlocked(&self) -> Result<(), BoardError> {
        if self.locked {
            Err(BoardError::Locked)
        } else {
            Ok(())
        }
    }

    fn check_endpoint(&self, p: Point) -> Result<(), BoardError> {
        self.check_unlocked()?;
        if !self.grid.contains(p) {
            return Err(BoardError::NotInGrid(p));
        }
        if !self.grid.is_walkable(p) {
            return Err(BoardError::Unwalkable(p));
        }
        Ok(())
    }

    fn forget(&mut self, p: Point) {
        if self.start == Some(p) {
            self.start = None;
        }
        if self.goal == Some(p) {
            self.goal = None;
        }
    }
}

/// Errors returned by [`Board`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// A path is being followed; call [`Board::unlock`] first.
    Locked,
    /// [`Board::execute`] needs both a start and a goal.
    MissingEndpoints,
    NotInGrid(Point),
    Unwalkable(Point),
}

impl From<PathError> for BoardError {
    fn from(e: PathError) -> Self {
        match e {
            PathError::NotInGrid(p) => Self::NotInGrid(p),
            PathError::Unwalkable(p) => Self::Unwalkable(p),
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Locked => write!(f, "board is locked while a path is followed"),
            Self::MissingEndpoints => write!(f, "select both a start and a goal cell first"),
            Self::NotInGrid(p) => write!(f, "{p} is not a cell of the board"),
            Self::Unwalkable(p) => write!(f, "{p} is not walkable"),
        }
    }
}

impl std::error::Error for BoardError {}
