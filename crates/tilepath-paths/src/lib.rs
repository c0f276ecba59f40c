//! Shortest-path search on 2D grids.
//!
//! The engine is an A* search with a binary-heap open set. Ties on `f` are
//! broken by the smaller heuristic `h`, then by discovery order, so a given
//! grid and endpoint pair always yields the same path.
//!
//! - **A\*** over any [`AstarPather`] ([`PathRange::astar_path`],
//!   [`PathRange::astar_search`])
//! - **Validated grid search** over any [`Topology`] ([`PathRange::find_path`],
//!   [`find_path`])
//! - **BFS** unit-step distance maps ([`PathRange::bfs_map`])
//!
//! Every search owns its scratch state (costs and predecessor indices) and
//! drops it on return, so [`PathRange`] methods take `&self` and can run
//! concurrently over the same grid.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS |
//! | [`WeightedPather`] : [`Pather`] | |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//! | [`Topology`] | `find_path`, via [`WalkPather`] |

mod astar;
mod bfs;
mod config;
mod distance;
mod error;
mod find;
mod pathrange;
mod traits;
mod walk;

pub use astar::{SearchReport, SearchStatus};
pub use bfs::DistanceMap;
pub use config::SearchConfig;
pub use distance::manhattan;
pub use error::PathError;
pub use find::find_path;
pub use pathrange::{PathNode, PathRange, UNREACHABLE};
pub use traits::{AstarPather, Pather, Topology, WeightedPather};
pub use walk::WalkPather;
