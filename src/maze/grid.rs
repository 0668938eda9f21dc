use crate::error::MazeError;
use crate::maze::Position;

use super::cell::{Cell, Direction, Weight};

/// A fixed-size rectangle of cells. The grid is the sole owner of its cells;
/// anything that needs to point at a cell stores its [`Position`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Box<[Cell]>,
    rows: u16,
    cols: u16,
    start: Position,
    end: Position,
}

impl Grid {
    /// Creates a grid with every wall standing and every cell [`Weight::Light`].
    /// The start is the top-left corner and the end the bottom-right corner.
    pub fn new(rows: u16, cols: u16) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Cell::new((row, col), Weight::default())))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Ok(Grid {
            cells,
            rows,
            cols,
            start: (0, 0),
            end: (rows - 1, cols - 1),
        })
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    pub fn is_in_bounds(&self, coord: Position) -> bool {
        coord.0 < self.rows && coord.1 < self.cols
    }

    pub fn check_bounds(&self, coord: Position) -> Result<(), MazeError> {
        if self.is_in_bounds(coord) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                position: coord,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Dense index of a position, row-major.
    pub fn ravel_index(&self, coord: Position) -> usize {
        coord.0 as usize * self.cols as usize + coord.1 as usize
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// The in-bounds cell one step away in `direction`, ignoring walls.
    pub fn neighbor(&self, coord: Position, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.offset();
        let row = coord.0.checked_add_signed(dr as i16)?;
        let col = coord.1.checked_add_signed(dc as i16)?;
        self.is_in_bounds((row, col)).then_some((row, col))
    }

    /// The direction leading from `from` to the grid-adjacent `to`, if they are adjacent.
    pub fn direction_between(&self, from: Position, to: Position) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&d| self.neighbor(from, d) == Some(to))
    }

    pub fn has_wall(&self, coord: Position, direction: Direction) -> bool {
        self[coord].has_wall(direction)
    }

    /// Whether `a` and `b` are grid-adjacent with no wall between them.
    pub fn is_open(&self, a: Position, b: Position) -> bool {
        if !self.is_in_bounds(a) || !self.is_in_bounds(b) {
            return false;
        }
        match self.direction_between(a, b) {
            Some(direction) => !self.has_wall(a, direction),
            None => false,
        }
    }

    /// Removes the wall between two adjacent cells on both sides.
    ///
    /// # Returns
    /// `true` if a wall was removed, `false` if the passage was already open.
    ///
    /// # Panics
    /// If the cells are not grid-adjacent.
    pub fn remove_wall(&mut self, a: Position, b: Position) -> bool {
        let direction = self
            .direction_between(a, b)
            .expect("Cannot remove a wall between cells that are not adjacent");
        let was_closed = self.has_wall(a, direction);
        self[a].open(direction);
        self[b].open(direction.opposite());
        was_closed
    }

    /// Puts the wall between two adjacent cells back on both sides.
    ///
    /// # Panics
    /// If the cells are not grid-adjacent.
    pub fn insert_wall(&mut self, a: Position, b: Position) {
        let direction = self
            .direction_between(a, b)
            .expect("Cannot insert a wall between cells that are not adjacent");
        self[a].close(direction);
        self[b].close(direction.opposite());
    }

    pub fn weight(&self, coord: Position) -> Weight {
        self[coord].weight
    }

    pub fn set_weight(&mut self, coord: Position, weight: Weight) {
        self[coord].weight = weight;
    }

    /// Sum of the weights of every cell in `path` except the first one.
    /// Weight is charged for entering a cell, not for the one already occupied.
    pub fn path_cost(&self, path: &[Position]) -> u32 {
        path.iter().skip(1).map(|&c| self.weight(c).cost()).sum()
    }
}

impl std::ops::Index<Position> for Grid {
    type Output = Cell;

    fn index(&self, index: Position) -> &Self::Output {
        &self.cells[self.ravel_index(index)]
    }
}

impl std::ops::IndexMut<Position> for Grid {
    fn index_mut(&mut self, index: Position) -> &mut Self::Output {
        let idx = self.ravel_index(index);
        &mut self.cells[idx]
    }
}
