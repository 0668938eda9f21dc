use rand::{Rng, SeedableRng, rngs::StdRng};

mod braid;
mod prim;

pub use braid::braid;
pub use prim::randomized_prim;

use crate::error::MazeError;
use crate::maze::{Grid, Weight};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Random wall removals performed after the spanning tree is carved.
    /// Zero leaves a perfect maze.
    pub braid_iterations: usize,
}

impl GeneratorConfig {
    pub const DEFAULT_BRAID_ITERATIONS: usize = 50;
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            braid_iterations: Self::DEFAULT_BRAID_ITERATIONS,
        }
    }
}

/// Generates a braided, weighted maze with the default configuration.
pub fn generate<R: Rng + ?Sized>(rows: u16, cols: u16, rng: &mut R) -> Result<Grid, MazeError> {
    generate_with(rows, cols, &GeneratorConfig::default(), rng)
}

/// Generates a maze in three passes:
/// random weights for every cell, a spanning tree grown from the start cell,
/// then braiding to open extra routes.
///
/// The whole grid is built fresh; dimensions are validated before anything is allocated.
pub fn generate_with<R: Rng + ?Sized>(
    rows: u16,
    cols: u16,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Grid, MazeError> {
    let mut grid = Grid::new(rows, cols)?;

    (0..rows).for_each(|row| {
        (0..cols).for_each(|col| grid.set_weight((row, col), Weight::random(rng)));
    });

    let carved = randomized_prim(&mut grid, rng);
    let braided = braid(&mut grid, config.braid_iterations, rng);
    tracing::debug!(
        "[generate] {}x{} maze: {} tree passages, {} extra passages from {} braid iterations",
        rows,
        cols,
        carved,
        braided,
        config.braid_iterations
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{Direction, get_neighbors, get_open_neighbors};

    fn reachable_count(grid: &Grid) -> usize {
        let mut seen = vec![false; grid.len()];
        let mut stack = vec![grid.start()];
        seen[grid.ravel_index(grid.start())] = true;
        let mut count = 0;
        while let Some(cell) = stack.pop() {
            count += 1;
            for n in get_open_neighbors(cell, grid) {
                let idx = grid.ravel_index(n);
                if !seen[idx] {
                    seen[idx] = true;
                    stack.push(n);
                }
            }
        }
        count
    }

    #[test]
    fn test_invalid_dimensions() {
        let mut rng = get_rng(Some(1));
        assert_eq!(
            generate(0, 3, &mut rng),
            Err(MazeError::InvalidDimensions { rows: 0, cols: 3 })
        );
        assert!(generate(3, 0, &mut rng).is_err());
    }

    #[test]
    fn test_generated_maze_is_connected() {
        for seed in 0..20 {
            let mut rng = get_rng(Some(seed));
            let grid = generate(12, 9, &mut rng).unwrap();
            assert_eq!(reachable_count(&grid), grid.len(), "seed {}", seed);
        }
    }

    #[test]
    fn test_walls_are_symmetric() {
        for seed in 0..10 {
            let mut rng = get_rng(Some(seed));
            let grid = generate(8, 8, &mut rng).unwrap();
            for cell in grid.cells() {
                for direction in Direction::ALL {
                    if let Some(n) = grid.neighbor(cell.position(), direction) {
                        assert_eq!(
                            cell.has_wall(direction),
                            grid.has_wall(n, direction.opposite())
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_border_walls_stay_closed() {
        let mut rng = get_rng(Some(9));
        let grid = generate(5, 6, &mut rng).unwrap();
        for cell in grid.cells() {
            for direction in Direction::ALL {
                if grid.neighbor(cell.position(), direction).is_none() {
                    assert!(cell.has_wall(direction));
                }
            }
        }
    }

    #[test]
    fn test_weights_in_domain() {
        let mut rng = get_rng(Some(4));
        let grid = generate(10, 10, &mut rng).unwrap();
        assert!(
            grid.cells()
                .all(|c| matches!(c.weight.cost(), 1 | 5 | 10))
        );
    }

    #[test]
    fn test_same_seed_same_maze() {
        let a = generate(5, 5, &mut get_rng(Some(42))).unwrap();
        let b = generate(5, 5, &mut get_rng(Some(42))).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_braiding_adds_loops() {
        let config = GeneratorConfig {
            braid_iterations: 200,
        };
        let grid = generate_with(10, 10, &config, &mut get_rng(Some(8))).unwrap();
        let passages: usize = grid
            .cells()
            .map(|c| {
                get_open_neighbors(c.position(), &grid)
                    .filter(|&n| n > c.position())
                    .count()
            })
            .sum();
        assert!(passages > grid.len() - 1);
    }

    #[test]
    fn test_no_braiding_gives_perfect_maze() {
        let config = GeneratorConfig {
            braid_iterations: 0,
        };
        let grid = generate_with(6, 7, &config, &mut get_rng(Some(2))).unwrap();
        let passages: usize = grid
            .cells()
            .map(|c| {
                get_open_neighbors(c.position(), &grid)
                    .filter(|&n| n > c.position())
                    .count()
            })
            .sum();
        assert_eq!(passages, grid.len() - 1);
        // Every cell touches the tree
        assert!(
            grid.cells()
                .all(|c| get_open_neighbors(c.position(), &grid).count() >= 1
                    || get_neighbors(c.position(), &grid).count() == 0)
        );
    }

    #[test]
    fn test_single_cell_maze() {
        let grid = generate(1, 1, &mut get_rng(Some(0))).unwrap();
        assert_eq!(grid.start(), grid.end());
        assert_eq!(grid.len(), 1);
    }
}
