//! **tilepath-core**: geometry primitives shared by the *tilepath* crates.
//!
//! A grid cell is addressed by a [`Point`]; a grid's extent is a half-open
//! [`Range`]. Both are small `Copy` values with no heap storage.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
