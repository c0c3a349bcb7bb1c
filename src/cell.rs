use core::fmt;
use grid_util::point::Point;

/// Orthogonal moves in the order they are generated during search: up, down, left, right.
/// The order determines which of several equally short paths is returned.
pub const NEUMANN_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A position on an [ObstacleGrid](crate::ObstacleGrid), addressed by row and column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }

    /// Sum of absolute coordinate differences, the exact cost of an unobstructed 4-grid path.
    pub fn manhattan_distance(&self, other: &Cell) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// The four orthogonal neighbours, which may lie outside any grid.
    pub fn neighbours(&self) -> [Cell; 4] {
        NEUMANN_OFFSETS.map(|(dr, dc)| Cell::new(self.row + dr, self.col + dc))
    }

    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Cell {
        Cell::new(row, col)
    }
}

/// Columns map to `x` and rows to `y`, matching how [grid_util] lays out its grids.
impl From<Cell> for Point {
    fn from(cell: Cell) -> Point {
        Point::new(cell.col, cell.row)
    }
}

impl From<Point> for Cell {
    fn from(point: Point) -> Cell {
        Cell::new(point.y, point.x)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
