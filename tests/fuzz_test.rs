//! Fuzzes the pathfinder by checking for many random grids that a path is found exactly when the goal
//! is on the same connected component, and that its length matches a breadth-first search.
use grid_astar::{find_path, is_valid_path, Cell, ObstacleGrid};
use rand::prelude::*;
use std::collections::VecDeque;

fn random_grid(rows: usize, cols: usize, rng: &mut StdRng, density: f64) -> ObstacleGrid {
    let table = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| u8::from(rng.gen_bool(density)))
                .collect::<Vec<u8>>()
        })
        .collect::<Vec<_>>();
    ObstacleGrid::from_rows(&table).unwrap()
}

fn random_grid_cell(grid: &ObstacleGrid, rng: &mut StdRng) -> Cell {
    Cell::new(
        rng.gen_range(0..grid.rows()) as i32,
        rng.gen_range(0..grid.cols()) as i32,
    )
}

/// Number of moves on a shortest path, found by flood-filling from the start.
fn bfs_distance(grid: &ObstacleGrid, start: Cell, goal: Cell) -> Option<usize> {
    if start == goal {
        return Some(0);
    }
    let mut dist = vec![vec![None; grid.cols()]; grid.rows()];
    let mut queue = VecDeque::new();
    dist[start.row as usize][start.col as usize] = Some(0);
    queue.push_back(start);
    while let Some(cell) = queue.pop_front() {
        let d = dist[cell.row as usize][cell.col as usize].unwrap();
        for n in grid.passable_neighbours(cell) {
            let slot = &mut dist[n.row as usize][n.col as usize];
            if slot.is_none() {
                *slot = Some(d + 1);
                queue.push_back(n);
            }
        }
    }
    dist[goal.row as usize][goal.col as usize]
}

fn visualize_grid(grid: &ObstacleGrid, start: &Cell, end: &Cell) {
    for row in 0..grid.rows() as i32 {
        for col in 0..grid.cols() as i32 {
            let c = Cell::new(row, col);
            if *start == c {
                print!("S");
            } else if *end == c {
                print!("G");
            } else if grid.is_blocked(c) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, N, &mut rng, 0.4);
        let start = random_grid_cell(&grid, &mut rng);
        let end = random_grid_cell(&grid, &mut rng);
        let reachable = grid.reachable(start, end);
        let path = find_path(&grid, start, end).unwrap();
        // Show the grid if the outcome disagrees with the components
        if path.is_some() != reachable {
            visualize_grid(&grid, &start, &end);
        }
        assert_eq!(path.is_some(), reachable);
    }
}

#[test]
fn fuzz_distance() {
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_GRIDS {
        let rows = rng.gen_range(1..12);
        let cols = rng.gen_range(1..12);
        let grid = random_grid(rows, cols, &mut rng, 0.3);
        let start = random_grid_cell(&grid, &mut rng);
        let end = random_grid_cell(&grid, &mut rng);
        let path = find_path(&grid, start, end).unwrap();
        let expected = if grid.is_blocked(start) && start != end {
            None
        } else {
            bfs_distance(&grid, start, end)
        };
        match (&path, expected) {
            (Some(path), Some(moves)) => {
                if path.len() != moves + 1 {
                    visualize_grid(&grid, &start, &end);
                    println!("Path: {path:?}");
                }
                assert_eq!(path.len(), moves + 1);
                assert_eq!(path.first(), Some(&start));
                assert_eq!(path.last(), Some(&end));
                if start != end {
                    assert!(is_valid_path(&grid, path));
                }
            }
            (None, None) => {}
            _ => {
                visualize_grid(&grid, &start, &end);
                panic!("A* found {path:?}, breadth-first search found {expected:?} moves");
            }
        }
    }
}

/// Without obstacles the path length is one more than the Manhattan distance.
#[test]
fn open_grid_lengths() {
    let mut rng = StdRng::seed_from_u64(2);
    let grid = ObstacleGrid::new(8, 13).unwrap();
    for _ in 0..500 {
        let start = random_grid_cell(&grid, &mut rng);
        let end = random_grid_cell(&grid, &mut rng);
        let path = find_path(&grid, start, end).unwrap().unwrap();
        assert_eq!(path.len() as i32, start.manhattan_distance(&end) + 1);
        assert!(is_valid_path(&grid, &path));
    }
}

#[test]
fn repeated_searches_agree() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..200 {
        let grid = random_grid(9, 9, &mut rng, 0.25);
        let start = random_grid_cell(&grid, &mut rng);
        let end = random_grid_cell(&grid, &mut rng);
        assert_eq!(find_path(&grid, start, end), find_path(&grid, start, end));
    }
}
