pub mod cell;
pub mod grid;

pub use cell::{Cell, Direction, Weight};
pub use grid::Grid;

/// A cell coordinate as `(row, col)`.
pub type Position = (u16, u16);

/// Get neighbors of a cell.
/// A neighbor is a cell one step away in a cardinal direction, regardless of walls.
/// Neighbors are yielded in the canonical north, east, south, west order.
pub fn get_neighbors(coord: Position, grid: &Grid) -> impl Iterator<Item = Position> + '_ {
    Direction::ALL
        .into_iter()
        .filter_map(move |direction| grid.neighbor(coord, direction))
}

/// Get the cells reachable from `coord` in a single step, i.e. grid neighbors with no wall in between.
/// Yielded in the canonical north, east, south, west order.
pub fn get_open_neighbors(coord: Position, grid: &Grid) -> impl Iterator<Item = Position> + '_ {
    Direction::ALL
        .into_iter()
        .filter(move |&direction| !grid.has_wall(coord, direction))
        .filter_map(move |direction| grid.neighbor(coord, direction))
}

/// Manhattan distance between two positions.
pub fn manhattan(a: Position, b: Position) -> u32 {
    a.0.abs_diff(b.0) as u32 + a.1.abs_diff(b.1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_neighbors() {
        let grid = Grid::new(3, 3).unwrap();
        let neighbors = get_neighbors((1, 1), &grid).collect::<Vec<_>>();
        assert_eq!(neighbors, vec![(0, 1), (1, 2), (2, 1), (1, 0)]);
        let corner = get_neighbors((0, 0), &grid).collect::<Vec<_>>();
        assert_eq!(corner, vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn test_get_open_neighbors() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert_eq!(get_open_neighbors((1, 1), &grid).count(), 0);
        grid.remove_wall((1, 1), (1, 0));
        grid.remove_wall((1, 1), (0, 1));
        let open = get_open_neighbors((1, 1), &grid).collect::<Vec<_>>();
        assert_eq!(open, vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(manhattan((0, 0), (2, 3)), 5);
        assert_eq!(manhattan((4, 1), (1, 4)), 6);
        assert_eq!(manhattan((2, 2), (2, 2)), 0);
    }
}
