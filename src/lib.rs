pub mod error;
pub mod generators;
pub mod history;
pub mod maze;
pub mod render;
pub mod solvers;

pub use error::MazeError;
pub use generators::{GeneratorConfig, generate, generate_with, get_rng};
pub use maze::{Grid, Position};
pub use solvers::{SolveResult, SolveStatus, Solver, compare, solve, solve_maze};
