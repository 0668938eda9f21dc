use std::{io::Write, path::PathBuf, time::Duration};

use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;

use mazerun::{
    GeneratorConfig, Grid, SolveResult, Solver, compare, generate_with, get_rng,
    history::{PathHistory, Playback},
    render::render,
    solve_maze,
};

/// Generate a braided, weighted maze and solve it with BFS, DFS, Dijkstra or A*.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// Number of rows in the maze
    #[arg(short, long, default_value_t = 20)]
    rows: u16,

    /// Number of columns in the maze
    #[arg(short, long, default_value_t = 20)]
    cols: u16,

    /// Seed for a reproducible maze
    #[arg(short, long)]
    seed: Option<u64>,

    /// Solving algorithm: bfs, dfs, dijkstra or astar
    #[arg(long, default_value = "bfs")]
    solver: Solver,

    /// Random wall removals after the spanning tree is carved
    #[arg(short, long, default_value_t = GeneratorConfig::DEFAULT_BRAID_ITERATIONS)]
    braid: usize,

    /// Run all four solvers on the same maze and print a comparison
    #[arg(long, default_value_t = false)]
    compare: bool,

    /// Replay the visited cells one by one before showing the route
    #[arg(short, long, default_value_t = false, conflicts_with = "compare")]
    animate: bool,

    /// Delay between animation frames, in milliseconds
    #[arg(long, default_value_t = 10)]
    delay_ms: u64,

    /// Only print the statistics, do not draw the maze
    #[arg(long, default_value_t = false)]
    no_render: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Install the global subscriber. The returned guard must live until the program exits
/// so buffered file logs get flushed.
fn init_logging(args: &Args) -> std::io::Result<Option<WorkerGuard>> {
    let level = if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    match &args.log_file {
        Some(path) => {
            let file_name = path.file_name().ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("log file path {} has no file name", path.display()),
                )
            })?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| std::path::Path::new("."));
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

fn print_summary(results: &[SolveResult]) {
    println!(
        "{:<28} {:>11} {:>6} {:>6} {:>8} {:>10}",
        "Solver", "Status", "Length", "Cost", "Visited", "Time (ms)"
    );
    for result in results {
        println!(
            "{:<28} {:>11} {:>6} {:>6} {:>8} {:>10.3}",
            result.solver.to_string(),
            format!("{:?}", result.status),
            result.path.len(),
            result.cost,
            result.visited_order.len(),
            result.duration_ms()
        );
    }
}

/// Replays the search on the terminal, one visited cell per frame.
fn animate(
    stdout: &mut std::io::Stdout,
    grid: &Grid,
    result: &SolveResult,
    history: &PathHistory,
    delay: Duration,
) -> std::io::Result<()> {
    let mut playback = Playback::new(&result.visited_order);
    while playback.forward().is_some() {
        render(stdout, grid, playback.revealed(), history)?;
        std::thread::sleep(delay);
    }
    Ok(())
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    let _guard = init_logging(&args)?;

    let config = GeneratorConfig {
        braid_iterations: args.braid,
    };
    let mut rng = get_rng(args.seed);
    let grid = generate_with(args.rows, args.cols, &config, &mut rng)?;
    tracing::info!(
        "[main] generated {}x{} maze (seed {:?})",
        grid.rows(),
        grid.cols(),
        args.seed
    );

    let mut stdout = std::io::stdout();
    let mut history = PathHistory::new();

    let results = if args.compare {
        compare(&grid)
    } else {
        let result = solve_maze(&grid, args.solver);
        if args.animate && !args.no_render {
            animate(
                &mut stdout,
                &grid,
                &result,
                &history,
                Duration::from_millis(args.delay_ms),
            )?;
        }
        vec![result]
    };

    for result in &results {
        history.add(result);
    }

    if !args.no_render {
        let visited = match results.as_slice() {
            [single] => single.visited_order.as_slice(),
            _ => &[],
        };
        render(&mut stdout, &grid, visited, &history)?;
    }

    print_summary(&results);
    if results.iter().any(|r| !r.is_found()) {
        println!("No path found to the goal.");
    }
    stdout.flush()
}
