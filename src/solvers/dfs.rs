use super::Scratch;
use crate::maze::{Grid, Position, get_open_neighbors};

/// Depth-first search with an explicit stack.
/// Neighbors are pushed in north, east, south, west order, so the west neighbor is explored first.
pub(super) fn solve_dfs(
    grid: &Grid,
    start: Position,
    goal: Position,
    scratch: &mut Scratch,
    visited_order: &mut Vec<Position>,
) -> bool {
    let mut stack = vec![start];
    scratch[start].visited = true;

    while let Some(current) = stack.pop() {
        visited_order.push(current);
        if current == goal {
            return true;
        }
        for neighbor in get_open_neighbors(current, grid) {
            if !scratch[neighbor].visited {
                scratch[neighbor].visited = true;
                scratch[neighbor].parent = Some(current);
                stack.push(neighbor);
            }
        }
    }

    false
}
