use std::time::Duration;

use mazerun::{Solver, generate, get_rng, solve_maze};

/// Generates `num_iters` mazes of the largest size and reports the average search time of every solver.
fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10);
    let size = args
        .next()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(u8::MAX as u16);

    let mut rng = get_rng(Some(0));
    let mut totals = [Duration::ZERO; Solver::ALL.len()];
    let mut visited = [0usize; Solver::ALL.len()];
    for _ in 0..num_iters {
        let grid = generate(size, size, &mut rng)?;
        for (i, solver) in Solver::ALL.into_iter().enumerate() {
            let result = solve_maze(&grid, solver);
            totals[i] += result.duration;
            visited[i] += result.visited_order.len();
        }
    }

    println!("{} mazes of {}x{}", num_iters, size, size);
    for (i, solver) in Solver::ALL.into_iter().enumerate() {
        let runs = num_iters.max(1) as u32;
        println!(
            "{:<28} avg {:>10.3?}  avg visited {:>8}",
            solver.to_string(),
            totals[i] / runs,
            visited[i] / num_iters.max(1)
        );
    }
    Ok(())
}
