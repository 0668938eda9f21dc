use rand::Rng;

use crate::maze::{Grid, Position, get_neighbors};

/// Carves a perfect maze into `grid` by randomized frontier growth from the start cell.
///
/// Expects every wall of `grid` to be standing. Returns the number of passages carved,
/// which is always `rows * cols - 1`.
pub fn randomized_prim<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> usize {
    let mut in_maze = vec![false; grid.len()];
    let mut in_frontier = vec![false; grid.len()];
    let mut frontiers: Vec<Position> = Vec::new();

    let seed = grid.start();
    in_maze[grid.ravel_index(seed)] = true;
    add_frontiers(seed, grid, &in_maze, &mut in_frontier, &mut frontiers);

    let mut carved = 0;
    while !frontiers.is_empty() {
        // Pick a random frontier cell and move it into the maze
        let frontier = frontiers.swap_remove(rng.random_range(0..frontiers.len()));
        let idx = grid.ravel_index(frontier);
        in_frontier[idx] = false;
        in_maze[idx] = true;

        // Connect it to one of its neighbors that is already part of the maze
        let maze_neighbors = get_neighbors(frontier, grid)
            .filter(|&c| in_maze[grid.ravel_index(c)])
            .collect::<Vec<_>>();
        if !maze_neighbors.is_empty() {
            let neighbor = maze_neighbors[rng.random_range(0..maze_neighbors.len())];
            grid.remove_wall(frontier, neighbor);
            carved += 1;
        }

        add_frontiers(frontier, grid, &in_maze, &mut in_frontier, &mut frontiers);
    }
    carved
}

/// Adds the neighbors of `coord` that are neither in the maze nor already queued.
fn add_frontiers(
    coord: Position,
    grid: &Grid,
    in_maze: &[bool],
    in_frontier: &mut [bool],
    frontiers: &mut Vec<Position>,
) {
    for neighbor in get_neighbors(coord, grid) {
        let idx = grid.ravel_index(neighbor);
        if !in_maze[idx] && !in_frontier[idx] {
            in_frontier[idx] = true;
            frontiers.push(neighbor);
        }
    }
}
