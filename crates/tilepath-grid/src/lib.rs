//! Grid topology for tilepath: a walkability grid, an ASCII layout format
//! for it, and a [`Board`] that tracks start/goal selection around searches.

pub mod board;
pub mod grid;
pub mod layout;

pub use board::{Board, BoardError};
pub use grid::{Tile, WalkGrid};
pub use layout::{Layout, LayoutError};
