//! # grid_astar
//!
//! Shortest paths on a fixed obstacle grid with 4-directional, unit-cost movement. Implements
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic, which is
//! admissible and consistent here, so the first time the goal is taken from the frontier its path
//! is optimal. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
//!
//! ```
//! use grid_astar::{find_path, Cell, ObstacleGrid};
//!
//! let grid: ObstacleGrid = "
//!     .#.
//!     ...
//! "
//! .parse()
//! .unwrap();
//! let path = find_path(&grid, Cell::new(0, 0), Cell::new(0, 2)).unwrap().unwrap();
//! assert_eq!(path.len(), 5);
//! ```
pub mod best_first;
pub mod cell;
pub mod error;
pub mod obstacle_grid;
pub mod pathfinder;

pub use cell::Cell;
pub use error::{GridError, SearchError};
pub use obstacle_grid::{ObstacleGrid, PathOverlay};
pub use pathfinder::{find_path, is_valid_path, path_cost, Pathfinder, SearchOutcome};

/// Cost of a single orthogonal move.
pub const STEP_COST: i32 = 1;
