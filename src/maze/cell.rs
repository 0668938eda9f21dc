use rand::Rng;

use crate::maze::Position;

/// One of the four cardinal directions.
/// The declaration order is the canonical neighbor order used everywhere in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Index of this direction in a cell's wall array.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Row and column offsets of a step in this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }
}

/// Cost charged for entering a cell.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weight {
    #[default]
    Light,
    Medium,
    Heavy,
}

impl Weight {
    pub const LEVELS: [Weight; 3] = [Weight::Light, Weight::Medium, Weight::Heavy];

    pub fn cost(self) -> u32 {
        match self {
            Weight::Light => 1,
            Weight::Medium => 5,
            Weight::Heavy => 10,
        }
    }

    /// Draws one of the three levels with equal probability.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Weight {
        Weight::LEVELS[rng.random_range(0..Weight::LEVELS.len())]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    /// Indexed by [`Direction::index`], `true` means the wall blocks traversal.
    walls: [bool; 4],
    pub weight: Weight,
}

impl Cell {
    /// A cell with all four walls standing.
    pub fn new(position: Position, weight: Weight) -> Self {
        Cell {
            position,
            walls: [true; 4],
            weight,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.index()]
    }

    pub fn walls(&self) -> [bool; 4] {
        self.walls
    }

    /// Only the grid may open walls, so that both sides stay in sync.
    pub(super) fn open(&mut self, direction: Direction) {
        self.walls[direction.index()] = false;
    }

    pub(super) fn close(&mut self, direction: Direction) {
        self.walls[direction.index()] = true;
    }
}
