use itertools::Itertools;
use log::{debug, info, warn};

use crate::best_first::{best_first, SearchEnd};
use crate::cell::Cell;
use crate::error::SearchError;
use crate::obstacle_grid::ObstacleGrid;
use crate::STEP_COST;

/// Everything a single search produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Cells from start to goal inclusive, or [None] if the goal cannot be reached.
    pub path: Option<Vec<Cell>>,
    /// Cells in the order they were finalized. Empty when the search was skipped.
    pub expanded: Vec<Cell>,
}

impl SearchOutcome {
    /// Cost of the path, [None] without one.
    pub fn cost(&self) -> Option<i32> {
        self.path.as_deref().map(path_cost)
    }
}

/// A* over an [ObstacleGrid] with unit-cost orthogonal moves and the Manhattan heuristic.
#[derive(Clone, Debug, Default)]
pub struct Pathfinder {
    /// Upper bound on the number of cells one search expands. Taking the goal off the frontier is
    /// not an expansion, so `start == goal` succeeds under any bound. Unbounded if [None].
    pub max_expansions: Option<usize>,
}

impl Pathfinder {
    pub fn new() -> Pathfinder {
        Pathfinder {
            max_expansions: None,
        }
    }

    pub fn with_max_expansions(max_expansions: usize) -> Pathfinder {
        Pathfinder {
            max_expansions: Some(max_expansions),
        }
    }

    /// Manhattan distance scaled to the step cost, admissible and consistent on a 4-grid.
    pub fn heuristic(&self, p1: &Cell, p2: &Cell) -> i32 {
        p1.manhattan_distance(p2) * STEP_COST
    }

    /// Computes a shortest path from start to goal, both inclusive. Returns `Ok(None)` if the goal
    /// cannot be reached and an error if start or goal lie outside the grid.
    pub fn find_path(
        &self,
        grid: &ObstacleGrid,
        start: Cell,
        goal: Cell,
    ) -> Result<Option<Vec<Cell>>, SearchError> {
        self.search(grid, start, goal).map(|outcome| outcome.path)
    }

    /// Like [find_path](Self::find_path), but also reports which cells were expanded.
    pub fn search(
        &self,
        grid: &ObstacleGrid,
        start: Cell,
        goal: Cell,
    ) -> Result<SearchOutcome, SearchError> {
        for cell in [start, goal] {
            if !grid.in_bounds(cell) {
                return Err(SearchError::OutOfBounds {
                    cell,
                    rows: grid.rows(),
                    cols: grid.cols(),
                });
            }
        }
        // Check if start and goal are on the same connected component.
        if grid.unreachable(start, goal) {
            info!("{} is not reachable from {}", goal, start);
            return Ok(SearchOutcome {
                path: None,
                expanded: Vec::new(),
            });
        }
        info!("{} is reachable from {}, computing path", goal, start);
        let run = best_first(
            &start,
            |cell| {
                grid.passable_neighbours(*cell)
                    .map(|n| (n, STEP_COST))
                    .collect::<Vec<_>>()
            },
            |cell| self.heuristic(cell, &goal),
            |cell| *cell == goal,
            self.max_expansions,
        );
        debug!(
            "Search from {} to {} expanded {} cells and generated {} nodes",
            start,
            goal,
            run.expanded.len(),
            run.generated
        );
        let path = match run.end {
            SearchEnd::Found { path, cost } => {
                debug!("Found path of cost {}", cost);
                Some(path)
            }
            SearchEnd::Exhausted => {
                warn!("Reachable goal could not be pathed to, is the component map correct?");
                None
            }
            SearchEnd::LimitReached => {
                let limit = self.max_expansions.unwrap_or(run.expanded.len());
                debug!("Giving up on {} after {} expansions", goal, limit);
                return Err(SearchError::ExpansionLimit { limit });
            }
        };
        Ok(SearchOutcome {
            path,
            expanded: run.expanded.into_iter().collect(),
        })
    }
}

/// Shortest path on `grid` using a default [Pathfinder].
pub fn find_path(
    grid: &ObstacleGrid,
    start: Cell,
    goal: Cell,
) -> Result<Option<Vec<Cell>>, SearchError> {
    Pathfinder::new().find_path(grid, start, goal)
}

/// Total cost of walking the path, one [STEP_COST] per move.
pub fn path_cost(path: &[Cell]) -> i32 {
    path.len().saturating_sub(1) as i32 * STEP_COST
}

/// Checks that the path is non-empty, stays on passable cells and only makes orthogonal unit steps.
pub fn is_valid_path(grid: &ObstacleGrid, path: &[Cell]) -> bool {
    !path.is_empty()
        && path.iter().all(|c| grid.is_passable(*c))
        && path.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b))
}
