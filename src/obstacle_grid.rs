use core::fmt;
use core::str::FromStr;
use fxhash::FxHashSet;
use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use itertools::iproduct;
use log::info;
use petgraph::unionfind::UnionFind;

use crate::cell::Cell;
use crate::error::GridError;

/// [ObstacleGrid] is a fixed `rows x cols` map of passable and blocked cells. The raw values live in
/// a [BoolGrid] where `true` marks a blocked cell, with columns along `x` and rows along `y`.
/// Connected components under 4-directional movement are computed once at construction in a
/// [UnionFind] so that unreachable goals are rejected without flood-filling the grid.
#[derive(Clone, Debug)]
pub struct ObstacleGrid {
    grid: BoolGrid,
    rows: usize,
    cols: usize,
    components: UnionFind<usize>,
}

impl ObstacleGrid {
    /// A grid without obstacles.
    pub fn new(rows: usize, cols: usize) -> Result<ObstacleGrid, GridError> {
        Self::with_blocked(rows, cols, [])
    }

    /// A grid where exactly the given cells are blocked.
    pub fn with_blocked<I>(rows: usize, cols: usize, blocked: I) -> Result<ObstacleGrid, GridError>
    where
        I: IntoIterator<Item = Cell>,
    {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        let mut grid = BoolGrid::new(cols, rows, false);
        for cell in blocked {
            if !Self::fits(rows, cols, cell) {
                return Err(GridError::CellOutOfBounds { cell, rows, cols });
            }
            grid.set_point(cell.into(), true);
        }
        Ok(Self::from_bool_grid(grid, rows, cols))
    }

    /// Builds a grid from a table of `0` (passable) and `1` (blocked) values, one slice per row.
    pub fn from_rows<R>(table: &[R]) -> Result<ObstacleGrid, GridError>
    where
        R: AsRef<[u8]>,
    {
        let rows = table
            .iter()
            .enumerate()
            .map(|(row, values)| {
                values
                    .as_ref()
                    .iter()
                    .enumerate()
                    .map(|(col, value)| match *value {
                        0 => Ok(false),
                        1 => Ok(true),
                        value => Err(GridError::InvalidValue { row, col, value }),
                    })
                    .collect::<Result<Vec<bool>, GridError>>()
            })
            .collect::<Result<Vec<_>, GridError>>()?;
        Self::from_blocked_rows(rows)
    }

    fn from_blocked_rows(table: Vec<Vec<bool>>) -> Result<ObstacleGrid, GridError> {
        let rows = table.len();
        let cols = table.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        if let Some((row, values)) = table.iter().enumerate().find(|(_, v)| v.len() != cols) {
            return Err(GridError::RaggedRow {
                row,
                expected: cols,
                found: values.len(),
            });
        }
        let mut grid = BoolGrid::new(cols, rows, false);
        for (row, values) in table.iter().enumerate() {
            for (col, &blocked) in values.iter().enumerate() {
                grid.set_point(Cell::new(row as i32, col as i32).into(), blocked);
            }
        }
        Ok(Self::from_bool_grid(grid, rows, cols))
    }

    fn from_bool_grid(grid: BoolGrid, rows: usize, cols: usize) -> ObstacleGrid {
        let mut obstacle_grid = ObstacleGrid {
            grid,
            rows,
            cols,
            components: UnionFind::new(rows * cols),
        };
        obstacle_grid.generate_components();
        obstacle_grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn fits(rows: usize, cols: usize, cell: Cell) -> bool {
        cell.row >= 0 && cell.col >= 0 && (cell.row as usize) < rows && (cell.col as usize) < cols
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        Self::fits(self.rows, self.cols, cell)
    }

    /// False for blocked cells and for cells outside the grid.
    pub fn is_passable(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.grid.get_point(Point::from(cell))
    }

    /// True only for in-bounds blocked cells.
    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && self.grid.get_point(Point::from(cell))
    }

    /// Passable orthogonal neighbours in the fixed up, down, left, right order. A blocked cell has
    /// no moves out of it.
    pub fn passable_neighbours(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        let neighbours = if self.is_passable(cell) {
            cell.neighbours().to_vec()
        } else {
            Vec::new()
        };
        neighbours
            .into_iter()
            .filter(move |n| self.is_passable(*n))
    }

    fn get_ix(&self, cell: Cell) -> usize {
        cell.row as usize * self.cols + cell.col as usize
    }

    /// Retrieves the component id of an in-bounds [Cell]. Blocked cells are singleton components.
    pub fn component(&self, cell: Cell) -> Option<usize> {
        self.in_bounds(cell)
            .then(|| self.components.find(self.get_ix(cell)))
    }

    /// Checks if the goal can be walked to from the start. A cell always reaches itself.
    pub fn reachable(&self, start: Cell, goal: Cell) -> bool {
        if !self.in_bounds(start) || !self.in_bounds(goal) {
            return false;
        }
        if start == goal {
            return true;
        }
        self.is_passable(start)
            && self.is_passable(goal)
            && self
                .components
                .equiv(self.get_ix(start), self.get_ix(goal))
    }

    pub fn unreachable(&self, start: Cell, goal: Cell) -> bool {
        !self.reachable(start, goal)
    }

    /// Links every passable cell to its passable right and lower neighbours.
    fn generate_components(&mut self) {
        info!(
            "Generating connected components for a {}x{} grid",
            self.rows, self.cols
        );
        for (row, col) in iproduct!(0..self.rows as i32, 0..self.cols as i32) {
            let cell = Cell::new(row, col);
            if !self.is_passable(cell) {
                continue;
            }
            for next in [Cell::new(row, col + 1), Cell::new(row + 1, col)] {
                if self.is_passable(next) {
                    let (a, b) = (self.get_ix(cell), self.get_ix(next));
                    self.components.union(a, b);
                }
            }
        }
    }

    /// Renders the grid with a path drawn over it.
    pub fn overlay<'a>(&'a self, path: &'a [Cell]) -> PathOverlay<'a> {
        PathOverlay { grid: self, path }
    }
}

impl fmt::Display for ObstacleGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for row in 0..self.rows as i32 {
            let values = (0..self.cols as i32)
                .map(|col| self.is_blocked(Cell::new(row, col)) as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}

/// Parses one row per non-empty line. Cells are `0` or `.` for passable and `1` or `#` for
/// blocked; whitespace between cells is ignored.
impl FromStr for ObstacleGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let table = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .enumerate()
                    .map(|(col, c)| match c {
                        '0' | '.' => Ok(false),
                        '1' | '#' => Ok(true),
                        value => Err(GridError::InvalidCell { row, col, value }),
                    })
                    .collect::<Result<Vec<bool>, GridError>>()
            })
            .collect::<Result<Vec<_>, GridError>>()?;
        Self::from_blocked_rows(table)
    }
}

/// [Display](fmt::Display) adapter returned by [ObstacleGrid::overlay]. Draws `S` and `G` at the
/// path ends, `*` along the path, `#` for blocked and `.` for free cells.
pub struct PathOverlay<'a> {
    grid: &'a ObstacleGrid,
    path: &'a [Cell],
}

impl fmt::Display for PathOverlay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let on_path: FxHashSet<Cell> = self.path.iter().copied().collect();
        let start = self.path.first();
        let goal = self.path.last();
        for row in 0..self.grid.rows as i32 {
            for col in 0..self.grid.cols as i32 {
                let cell = Cell::new(row, col);
                let c = if start == Some(&cell) {
                    'S'
                } else if goal == Some(&cell) {
                    'G'
                } else if on_path.contains(&cell) {
                    '*'
                } else if self.grid.is_blocked(cell) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
