use std::fmt;

use tilepath_core::Point;

/// Caller contract violations detected before a validated search starts.
///
/// An unreachable goal is not an error: it is reported as `Ok(None)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The endpoint lies outside the grid or names a removed cell.
    NotInGrid(Point),
    /// The endpoint exists but cannot be walked on.
    Unwalkable(Point),
}

impl PathError {
    /// The offending endpoint.
    pub fn point(&self) -> Point {
        match *self {
            Self::NotInGrid(p) | Self::Unwalkable(p) => p,
        }
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInGrid(p) => write!(f, "path endpoint {p} is not a cell of the grid"),
            Self::Unwalkable(p) => write!(f, "path endpoint {p} is not walkable"),
        }
    }
}

impl std::error::Error for PathError {}
