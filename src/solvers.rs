use std::time::{Duration, Instant};

mod astar;
mod bfs;
mod dfs;
mod dijkstra;

use astar::solve_astar;
use bfs::solve_bfs;
use dfs::solve_dfs;
use dijkstra::solve_dijkstra;

use crate::error::MazeError;
use crate::maze::{Grid, Position};

/// Per-cell bookkeeping for a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SearchState {
    /// Discovered (BFS/DFS) or finalized (Dijkstra/A*)
    visited: bool,
    /// The cell from which this cell was reached on the best route found so far
    parent: Option<Position>,
    /// Accumulated weight from the start, `u32::MAX` when unknown
    g_cost: u32,
    /// `g_cost` plus the heuristic estimate to the goal (A* only)
    f_cost: u32,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            visited: false,
            parent: None,
            g_cost: u32::MAX,
            f_cost: u32::MAX,
        }
    }
}

/// Search state for every cell of a grid, created fresh for each solve so nothing
/// leaks from a previous run and the grid itself is never written to.
struct Scratch {
    states: Box<[SearchState]>,
    cols: u16,
}

impl Scratch {
    fn new(grid: &Grid) -> Self {
        Self {
            states: vec![SearchState::default(); grid.len()].into_boxed_slice(),
            cols: grid.cols(),
        }
    }

    /// Follows parent links back from `goal` and returns the route from the start to `goal`.
    fn backtrack(&self, goal: Position) -> Vec<Position> {
        let mut path = vec![goal];
        let mut current = goal;
        while let Some(parent) = self[current].parent {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        path
    }
}

impl std::ops::Index<Position> for Scratch {
    type Output = SearchState;

    fn index(&self, index: Position) -> &Self::Output {
        &self.states[index.0 as usize * self.cols as usize + index.1 as usize]
    }
}

impl std::ops::IndexMut<Position> for Scratch {
    fn index_mut(&mut self, index: Position) -> &mut Self::Output {
        &mut self.states[index.0 as usize * self.cols as usize + index.1 as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Solver {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
}

impl Solver {
    pub const ALL: [Solver; 4] = [Solver::Bfs, Solver::Dfs, Solver::Dijkstra, Solver::AStar];

    /// Whether the reported cost is the weighted cost rather than the step count.
    pub fn is_weighted(self) -> bool {
        matches!(self, Solver::Dijkstra | Solver::AStar)
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Dijkstra => write!(f, "Dijkstra's Algorithm"),
            Solver::AStar => write!(f, "A* Search"),
        }
    }
}

impl std::str::FromStr for Solver {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Solver::Bfs),
            "dfs" => Ok(Solver::Dfs),
            "dijkstra" => Ok(Solver::Dijkstra),
            "astar" | "a*" => Ok(Solver::AStar),
            other => Err(format!(
                "unknown solver '{}', expected one of: bfs, dfs, dijkstra, astar",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    Found,
    Unreachable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    pub solver: Solver,
    pub status: SolveStatus,
    /// Route from start to goal inclusive, empty when the goal is unreachable
    pub path: Vec<Position>,
    /// Cells in the order the search took them off its frontier
    pub visited_order: Vec<Position>,
    /// Weighted cost for Dijkstra and A*, number of steps for BFS and DFS.
    /// Zero when unreachable.
    pub cost: u32,
    /// Wall-clock time spent in the search
    pub duration: Duration,
}

impl SolveResult {
    pub fn is_found(&self) -> bool {
        self.status == SolveStatus::Found
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration.as_secs_f64() * 1000.0
    }
}

/// Solves the maze from its own start to its own end.
pub fn solve_maze(grid: &Grid, solver: Solver) -> SolveResult {
    run(grid, solver, grid.start(), grid.end())
}

/// Solves the maze between two arbitrary cells.
pub fn solve(
    grid: &Grid,
    solver: Solver,
    start: Position,
    goal: Position,
) -> Result<SolveResult, MazeError> {
    grid.check_bounds(start)?;
    grid.check_bounds(goal)?;
    Ok(run(grid, solver, start, goal))
}

/// Runs every solver on the same grid, in [`Solver::ALL`] order.
pub fn compare(grid: &Grid) -> Vec<SolveResult> {
    let results = Solver::ALL
        .into_iter()
        .map(|solver| solve_maze(grid, solver))
        .collect::<Vec<_>>();
    tracing::debug!(
        "[compare] ran {} solvers on a {}x{} grid",
        results.len(),
        grid.rows(),
        grid.cols()
    );
    results
}

fn run(grid: &Grid, solver: Solver, start: Position, goal: Position) -> SolveResult {
    let started = Instant::now();
    let mut scratch = Scratch::new(grid);
    let mut visited_order = Vec::new();
    let found = match solver {
        Solver::Bfs => solve_bfs(grid, start, goal, &mut scratch, &mut visited_order),
        Solver::Dfs => solve_dfs(grid, start, goal, &mut scratch, &mut visited_order),
        Solver::Dijkstra => solve_dijkstra(grid, start, goal, &mut scratch, &mut visited_order),
        Solver::AStar => solve_astar(grid, start, goal, &mut scratch, &mut visited_order),
    };
    let path = if found {
        scratch.backtrack(goal)
    } else {
        Vec::new()
    };
    let duration = started.elapsed();

    let (status, cost) = match (found, solver.is_weighted()) {
        (false, _) => (SolveStatus::Unreachable, 0),
        (true, true) => (SolveStatus::Found, scratch[goal].g_cost),
        (true, false) => (SolveStatus::Found, path.len().saturating_sub(1) as u32),
    };
    tracing::info!(
        "[solve] {}: {:?}, path length {}, cost {}, {} cells visited in {:?}",
        solver,
        status,
        path.len(),
        cost,
        visited_order.len(),
        duration
    );

    SolveResult {
        solver,
        status,
        path,
        visited_order,
        cost,
        duration,
    }
}
