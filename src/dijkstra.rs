use core::fmt;
use std::collections::VecDeque;

use grid_util::grid::Grid;
use grid_util::point::Point;
use log::{info, warn};

use crate::search_grid::SearchGrid;
use crate::UNREACHED;

/// Errors raised by the search contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A previous run left the search state populated; the grid must be
    /// reset before searching again.
    StaleState,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaleState => {
                write!(f, "search state is stale: reset the grid before searching again")
            }
        }
    }
}

impl std::error::Error for SearchError {}

/// Runs a unit-weight Dijkstra expansion from the grid's start cell and
/// returns the visitation order: every cell in the order it was finalized, up
/// to and including the finish cell if it was reached. Distances, visited
/// flags and predecessor links are written into the grid in place for
/// [reconstruct_path] to read back.
///
/// Since every step costs 1 a first-in-first-out frontier already pops cells
/// in non-decreasing distance order, so no priority queue is needed. Each
/// cell is labeled with its distance and predecessor when first discovered,
/// and obstacles are never discovered at all: they are skipped during
/// expansion, appear nowhere in the output and expand no neighbours.
///
/// An unreachable finish is not an error: the frontier simply drains without
/// ever containing the finish cell and the partial order is returned. Running
/// twice without an intervening [reset](SearchGrid::reset) is rejected as
/// [SearchError::StaleState], as the leftover labels of the first run would
/// corrupt the second.
pub fn search(grid: &mut SearchGrid) -> Result<Vec<Point>, SearchError> {
    if grid.is_searched() {
        return Err(SearchError::StaleState);
    }
    let start = grid.start();
    let finish = grid.finish();
    info!("Tracing expansion from {} towards {}", start, finish);

    grid.distance.set_point(start, 0);
    let mut frontier: VecDeque<Point> = VecDeque::new();
    frontier.push_back(start);

    let mut visit_order: Vec<Point> = Vec::new();
    while let Some(current) = frontier.pop_front() {
        grid.visited.set_point(current, true);
        visit_order.push(current);
        if current == finish {
            info!("Reached {} after visiting {} cells", finish, visit_order.len());
            grid.searched = true;
            return Ok(visit_order);
        }
        let current_distance = grid.distance.get_point(current);
        for neighbour in grid.neighbours(current) {
            if grid.grid.get_point(neighbour) || grid.distance.get_point(neighbour) != UNREACHED {
                continue;
            }
            grid.distance.set_point(neighbour, current_distance + 1);
            grid.predecessor.set_point(neighbour, Some(current));
            frontier.push_back(neighbour);
        }
    }
    warn!("{} is not reachable from {}", finish, start);
    grid.searched = true;
    Ok(visit_order)
}

/// Walks the predecessor chain backward from the finish cell and returns the
/// cells in start-to-finish order.
///
/// Only meaningful after [search] has run. If the finish was never reached
/// its chain is empty and the result is the single-element fallback
/// `[finish]`; callers that need to tell the two cases apart can check the
/// first element, or use [shortest_path].
pub fn reconstruct_path(grid: &SearchGrid) -> Vec<Point> {
    let mut path: Vec<Point> = itertools::unfold(Some(grid.finish()), |state| {
        let current = (*state)?;
        *state = grid.predecessor_of(current);
        Some(current)
    })
    .collect();
    path.reverse();
    path
}

/// The reconstructed shortest path, or [None] when the last search did not
/// reach the finish (or no search has run at all).
pub fn shortest_path(grid: &SearchGrid) -> Option<Vec<Point>> {
    let path = reconstruct_path(grid);
    if path.first() == Some(&grid.start()) {
        Some(path)
    } else {
        None
    }
}
