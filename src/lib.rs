//! # grid_search_trace
//!
//! A grid-based shortest-path tracer. Runs a unit-weight
//! [Dijkstra](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) expansion
//! from a fixed start cell to a fixed finish cell on a uniform-cost 4-grid
//! (equivalent to
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search))
//! and records the order in which cells are visited, so a presentation layer
//! can replay the expansion step by step and then highlight the shortest path
//! recovered by backtracking predecessor links. Obstacle cells can be toggled
//! between runs to reshape the problem interactively.

pub mod dijkstra;
pub mod search_grid;

pub use dijkstra::{reconstruct_path, search, shortest_path, SearchError};
pub use search_grid::{GridError, SearchGrid};

/// Sentinel distance of a cell that has not been discovered by a search.
pub const UNREACHED: u32 = u32::MAX;

/// Maximum number of axis-aligned neighbours of a cell.
pub const N_NEIGHBOURS: usize = 4;
