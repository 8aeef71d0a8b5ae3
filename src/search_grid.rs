use core::fmt;

use grid_util::grid::{BoolGrid, Grid, SimpleGrid};
use grid_util::point::Point;
use smallvec::SmallVec;

use crate::{N_NEIGHBOURS, UNREACHED};

/// Errors raised at the grid boundary: coordinates outside the grid and
/// attempts to break the endpoint invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate lies outside the grid bounds.
    OutOfBounds(Point),
    /// Start and finish were given as the same cell.
    EndpointsCoincide,
    /// The start or finish cell cannot be turned into an obstacle.
    ProtectedCell(Point),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "coordinate {} lies outside the grid", p),
            Self::EndpointsCoincide => write!(f, "start and finish must be distinct cells"),
            Self::ProtectedCell(p) => {
                write!(f, "cell {} is an endpoint and cannot become an obstacle", p)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// [SearchGrid] couples the obstacle layout in a [BoolGrid] ([true] meaning
/// blocked) with the per-cell search state written by
/// [search](crate::dijkstra::search): distance from the start, a visited flag
/// and a predecessor link, each kept in a row-major flat grid of its own. The
/// start and finish cells are fixed when the grid is created, are always
/// distinct and can never be obstacles.
///
/// Search state is stale after a run until [reset](Self::reset) restores the
/// defaults; a stale grid refuses a new search.
#[derive(Clone, Debug)]
pub struct SearchGrid {
    pub grid: BoolGrid,
    pub distance: SimpleGrid<u32>,
    pub visited: BoolGrid,
    pub predecessor: SimpleGrid<Option<Point>>,
    start: Point,
    finish: Point,
    pub(crate) searched: bool,
}

impl SearchGrid {
    /// Creates a grid with the given dimensions and endpoint cells. Both
    /// endpoints must be in bounds and distinct; they start (and stay) free
    /// of obstacles.
    pub fn with_endpoints(
        width: usize,
        height: usize,
        start: Point,
        finish: Point,
    ) -> Result<SearchGrid, GridError> {
        if start == finish {
            return Err(GridError::EndpointsCoincide);
        }
        let grid = BoolGrid::new(width, height, false);
        for p in [start, finish] {
            if p.x < 0 || p.y < 0 || !grid.index_in_bounds(p.x as usize, p.y as usize) {
                return Err(GridError::OutOfBounds(p));
            }
        }
        Ok(SearchGrid {
            grid,
            distance: SimpleGrid::new(width, height, UNREACHED),
            visited: BoolGrid::new(width, height, false),
            predecessor: SimpleGrid::new(width, height, None),
            start,
            finish,
            searched: false,
        })
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn finish(&self) -> Point {
        self.finish
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && self.grid.index_in_bounds(p.x as usize, p.y as usize)
    }

    pub fn is_obstacle(&self, p: Point) -> bool {
        self.in_bounds(p) && self.grid.get_point(p)
    }

    pub fn is_visited(&self, p: Point) -> bool {
        self.in_bounds(p) && self.visited.get_point(p)
    }

    /// Distance from the start recorded by the last search, or [None] if the
    /// cell was never discovered.
    pub fn distance_to(&self, p: Point) -> Option<u32> {
        if !self.in_bounds(p) {
            return None;
        }
        match self.distance.get_point(p) {
            UNREACHED => None,
            d => Some(d),
        }
    }

    /// The cell from which `p` was first discovered by the last search.
    pub fn predecessor_of(&self, p: Point) -> Option<Point> {
        if self.in_bounds(p) {
            self.predecessor.get_point(p)
        } else {
            None
        }
    }

    /// Flips the obstacle flag at `p` and returns the new flag. The start and
    /// finish cells are protected: an obstacle endpoint would make every
    /// search trivially unsolvable, so toggling either is rejected. No other
    /// cell is affected.
    pub fn toggle_obstacle(&mut self, p: Point) -> Result<bool, GridError> {
        if !self.in_bounds(p) {
            return Err(GridError::OutOfBounds(p));
        }
        if p == self.start || p == self.finish {
            return Err(GridError::ProtectedCell(p));
        }
        let blocked = !self.grid.get_point(p);
        self.grid.set_point(p, blocked);
        Ok(blocked)
    }

    /// The axis-aligned in-bounds neighbours of `p`, in the fixed order
    /// above, below, left, right. All four sides use the same strict bound,
    /// so cells in the last row and column are treated like any others.
    pub fn neighbours(&self, p: Point) -> SmallVec<[Point; N_NEIGHBOURS]> {
        [
            Point::new(p.x, p.y - 1),
            Point::new(p.x, p.y + 1),
            Point::new(p.x - 1, p.y),
            Point::new(p.x + 1, p.y),
        ]
        .into_iter()
        .filter(|n| self.in_bounds(*n))
        .collect()
    }

    /// Restores every cell's distance, visited flag and predecessor link to
    /// its default. Obstacles and endpoints are untouched. Required between
    /// search runs; see [search](crate::dijkstra::search).
    pub fn reset(&mut self) {
        for y in 0..self.grid.height {
            for x in 0..self.grid.width {
                self.distance.set(x, y, UNREACHED);
                self.visited.set(x, y, false);
                self.predecessor.set(x, y, None);
            }
        }
        self.searched = false;
    }

    /// Whether a search has run since the last reset, leaving the search
    /// state stale.
    pub fn is_searched(&self) -> bool {
        self.searched
    }
}

impl fmt::Display for SearchGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.grid.height as i32 {
            for x in 0..self.grid.width as i32 {
                let p = Point::new(x, y);
                if p == self.start {
                    write!(f, "S")?;
                } else if p == self.finish {
                    write!(f, "G")?;
                } else if self.grid.get_point(p) {
                    write!(f, "#")?;
                } else {
                    write!(f, ".")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Grid<bool> for SearchGrid {
    /// Builds a grid with the corner convention: the start in the top-left
    /// cell and the finish in the bottom-right one. Panics on grids of fewer
    /// than two cells, where the corners coincide and the endpoints could not
    /// be distinct. `default_value` seeds the obstacle flags, with both
    /// endpoints forced clear.
    fn new(width: usize, height: usize, default_value: bool) -> Self {
        assert!(
            width * height >= 2,
            "corner endpoints need a grid of at least two cells"
        );
        let start = Point::new(0, 0);
        let finish = Point::new(width as i32 - 1, height as i32 - 1);
        let mut base_grid = SearchGrid {
            grid: BoolGrid::new(width, height, default_value),
            distance: SimpleGrid::new(width, height, UNREACHED),
            visited: BoolGrid::new(width, height, false),
            predecessor: SimpleGrid::new(width, height, None),
            start,
            finish,
            searched: false,
        };
        base_grid.grid.set_point(start, false);
        base_grid.grid.set_point(finish, false);
        base_grid
    }
    fn get(&self, x: usize, y: usize) -> bool {
        self.grid.get(x, y)
    }
    /// Writes an obstacle flag. Writes to the start or finish cell are
    /// ignored; those cells stay free.
    fn set(&mut self, x: usize, y: usize, blocked: bool) {
        let p = Point::new(x as i32, y as i32);
        if p == self.start || p == self.finish {
            return;
        }
        self.grid.set(x, y, blocked);
    }
    fn width(&self) -> usize {
        self.grid.width()
    }
    fn height(&self) -> usize {
        self.grid.height()
    }
}
