use std::{cmp::Reverse, collections::BinaryHeap};

use super::Scratch;
use crate::maze::{Grid, Position, get_open_neighbors};

/// Dijkstra's algorithm over cell weights. Entering a cell costs its weight.
///
/// Stale heap entries are skipped on pop instead of being decreased in place,
/// so a cell may sit in the heap several times.
pub(super) fn solve_dijkstra(
    grid: &Grid,
    start: Position,
    goal: Position,
    scratch: &mut Scratch,
    visited_order: &mut Vec<Position>,
) -> bool {
    // Using Reverse to turn the max-heap into a min-heap
    let mut pq: BinaryHeap<Reverse<(u32, Position)>> = BinaryHeap::new();
    scratch[start].g_cost = 0;
    pq.push(Reverse((0, start)));

    while let Some(Reverse((_, current))) = pq.pop() {
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
            // Only relax neighbors that we can reach with a lower cost
            if new_cost < scratch[neighbor].g_cost {
                scratch[neighbor].g_cost = new_cost;
                scratch[neighbor].parent = Some(current);
                pq.push(Reverse((new_cost, neighbor)));
            }
        }
    }

    false
}
