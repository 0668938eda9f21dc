use rand::Rng;

use crate::maze::{Direction, Grid};

/// Knocks down random walls to add loops to a perfect maze.
///
/// Each iteration picks a random cell and a random direction and opens the passage
/// if a neighbor exists there, whether or not the two cells are already connected.
/// Walls are only ever removed, so connectivity is preserved.
/// Returns how many walls were actually removed.
pub fn braid<R: Rng + ?Sized>(grid: &mut Grid, iterations: usize, rng: &mut R) -> usize {
    let mut removed = 0;
    for _ in 0..iterations {
        let cell = (
            rng.random_range(0..grid.rows()),
            rng.random_range(0..grid.cols()),
        );
        let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        if let Some(neighbor) = grid.neighbor(cell, direction) {
            if grid.remove_wall(cell, neighbor) {
                removed += 1;
            }
        }
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_braid_only_removes_walls() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut grid = Grid::new(6, 6).unwrap();
        let before = grid.clone();
        let removed = braid(&mut grid, 40, &mut rng);
        assert!(removed > 0);
        assert!(removed <= 40);
        for (old, new) in before.cells().zip(grid.cells()) {
            for direction in Direction::ALL {
                // No wall that was open before may be closed now
                if !old.has_wall(direction) {
                    assert!(!new.has_wall(direction));
                }
            }
        }
    }

    #[test]
    fn test_braid_on_single_cell_is_noop() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut grid = Grid::new(1, 1).unwrap();
        assert_eq!(braid(&mut grid, 50, &mut rng), 0);
        assert!(Direction::ALL.iter().all(|&d| grid.has_wall((0, 0), d)));
    }

    #[test]
    fn test_zero_iterations() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = Grid::new(4, 4).unwrap();
        assert_eq!(braid(&mut grid, 0, &mut rng), 0);
        assert_eq!(grid, Grid::new(4, 4).unwrap());
    }
}
