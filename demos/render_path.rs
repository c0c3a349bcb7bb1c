use grid_astar::{Cell, ObstacleGrid, Pathfinder};

// Finds a path on the following grid, where # marks an obstacle
//  _____
// |S#   |
// | # # |
// |   # |
// |##   |
// |   #G|
//  _____
// S marks the start and G the goal. Run with RUST_LOG=debug to see the search statistics.
fn main() {
    env_logger::init();
    let grid = ObstacleGrid::from_rows(&[
        [0u8, 1, 0, 0, 0],
        [0, 1, 0, 1, 0],
        [0, 0, 0, 1, 0],
        [1, 1, 0, 0, 0],
        [0, 0, 0, 1, 0],
    ])
    .expect("the demo grid is rectangular");
    println!("{}", grid);
    let start = Cell::new(0, 0);
    let goal = Cell::new(4, 4);
    match Pathfinder::new().search(&grid, start, goal) {
        Ok(outcome) => match outcome.path {
            Some(path) => {
                println!("Path:");
                for c in &path {
                    println!("{}", c);
                }
                println!("\n{}", grid.overlay(&path));
                println!("Expanded {} cells", outcome.expanded.len());
            }
            None => println!("No path from {} to {}", start, goal),
        },
        Err(e) => eprintln!("{}", e),
    }
}
