use crate::maze::Position;
use crate::solvers::{SolveResult, Solver};

/// A solved route kept for display, tagged with the solver that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct PathLayer {
    pub solver: Solver,
    pub path: Vec<Position>,
    pub cost: u32,
}

/// Solved routes drawn on top of the maze, oldest first.
/// Regenerating the maze or clearing the paths empties it.
#[derive(Debug, Default)]
pub struct PathHistory {
    layers: Vec<PathLayer>,
}

impl PathHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the route of a solve. Unreachable results leave no layer.
    pub fn add(&mut self, result: &SolveResult) -> bool {
        if result.path.is_empty() {
            return false;
        }
        self.layers.push(PathLayer {
            solver: result.solver,
            path: result.path.clone(),
            cost: result.cost,
        });
        true
    }

    pub fn clear(&mut self) {
        self.layers.clear();
    }

    pub fn layers(&self) -> &[PathLayer] {
        &self.layers
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// The most recent layer covering `coord`, if any.
    pub fn layer_at(&self, coord: Position) -> Option<&PathLayer> {
        self.layers.iter().rev().find(|layer| layer.path.contains(&coord))
    }
}

/// Steps through the cells a search visited, one per tick, so a host can replay the search.
pub struct Playback<'a> {
    visited_order: &'a [Position],
    /// Number of cells revealed so far. Always between 0 and visited_order.len()
    revealed: usize,
}

impl<'a> Playback<'a> {
    pub fn new(visited_order: &'a [Position]) -> Self {
        Playback {
            visited_order,
            revealed: 0,
        }
    }

    /// Reveals the next cell and returns it, or `None` once everything is shown.
    pub fn forward(&mut self) -> Option<Position> {
        let next = self.visited_order.get(self.revealed).copied()?;
        self.revealed += 1;
        Some(next)
    }

    /// Hides the most recently revealed cell and returns it.
    pub fn backward(&mut self) -> Option<Position> {
        match self.revealed {
            0 => None, // Nothing revealed yet
            _ => {
                self.revealed -= 1;
                self.visited_order.get(self.revealed).copied()
            }
        }
    }

    pub fn reset(&mut self) {
        self.revealed = 0;
    }

    pub fn is_finished(&self) -> bool {
        self.revealed == self.visited_order.len()
    }

    /// Cells revealed so far, in visiting order.
    pub fn revealed(&self) -> &'a [Position] {
        &self.visited_order[..self.revealed]
    }
}
