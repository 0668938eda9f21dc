use std::collections::VecDeque;

use super::Scratch;
use crate::maze::{Grid, Position, get_open_neighbors};

/// Breadth-first search. Finds a route with the fewest steps, ignoring weights.
pub(super) fn solve_bfs(
    grid: &Grid,
    start: Position,
    goal: Position,
    scratch: &mut Scratch,
    visited_order: &mut Vec<Position>,
) -> bool {
    let mut queue = VecDeque::from([start]);
    scratch[start].visited = true;

    while let Some(current) = queue.pop_front() {
        visited_order.push(current);
        if current == goal {
            return true;
        }
        for neighbor in get_open_neighbors(current, grid) {
            if !scratch[neighbor].visited {
                scratch[neighbor].visited = true;
                scratch[neighbor].parent = Some(current);
                queue.push_back(neighbor);
            }
        }
    }

    false // No path found
}
