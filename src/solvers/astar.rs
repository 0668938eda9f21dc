use std::{cmp::Reverse, collections::BinaryHeap};

use super::Scratch;
use crate::maze::{Grid, Position, get_open_neighbors, manhattan};

/// A* search ordered by `f = g + h` with `h` the Manhattan distance to the goal.
///
/// Every weight is at least 1, so `h` never overestimates and each step changes it by at most 1;
/// the first time the goal is popped its cost is minimal.
pub(super) fn solve_astar(
    grid: &Grid,
    start: Position,
    goal: Position,
    scratch: &mut Scratch,
    visited_order: &mut Vec<Position>,
) -> bool {
    // Ties on f are broken by the smaller heuristic, i.e. the cell closer to the goal
    let mut pq: BinaryHeap<Reverse<(u32, u32, Position)>> = BinaryHeap::new();
    let h_start = manhattan(start, goal);
    scratch[start].g_cost = 0;
    scratch[start].f_cost = h_start;
    pq.push(Reverse((h_start, h_start, start)));

    while let Some(Reverse((_, _, current))) = pq.pop() {
        if scratch[current].visited {
            continue;
        }
        scratch[current].visited = true;
        visited_order.push(current);
        if current == goal {
            return true;
        }

        let current_cost = scratch[current].g_cost;
        for neighbor in get_open_neighbors(current, grid) {
            if scratch[neighbor].visited {
                continue;
            }
            let new_cost = current_cost + grid.weight(neighbor).cost();
            if new_cost < scratch[neighbor].g_cost {
                let h = manhattan(neighbor, goal);
                let state = &mut scratch[neighbor];
                state.g_cost = new_cost;
                state.f_cost = new_cost + h;
                state.parent = Some(current);
                pq.push(Reverse((state.f_cost, h, neighbor)));
            }
        }
    }

    false
}
