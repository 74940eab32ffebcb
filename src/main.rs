use clap::{Parser, Subcommand, ValueEnum};
use rat_maze::grid::{Coord, Grid, Move};
use rat_maze::report::console::ConsoleReporter;
use rat_maze::report::NullReporter;
use rat_maze::search::{solve, SolveConfig, SolveReport};
use rat_maze::MazeError;
use std::collections::HashSet;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "rat-maze")]
#[command(about = "rat-maze - Concurrent maze solver")]
#[command(version)]
#[command(subcommand_required = true)]
#[command(arg_required_else_help = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// CLI exploration order selection
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum CliOrder {
    /// Try the down move before the right move at each cell
    #[default]
    DownRight,
    /// Try the right move before the down move at each cell
    RightDown,
}

impl From<CliOrder> for [Move; 2] {
    fn from(cli: CliOrder) -> Self {
        match cli {
            CliOrder::DownRight => [Move::Down, Move::Right],
            CliOrder::RightDown => [Move::Right, Move::Down],
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a maze file (cells: `1`/`.` open, `0`/`#` blocked)
    Solve {
        /// Path to the maze file
        maze: PathBuf,
        /// Number of worker slots (defaults to available parallelism)
        #[arg(long, short = 'j')]
        jobs: Option<usize>,
        /// Per-visit pacing delay in milliseconds (observability only)
        #[arg(long, default_value = "100")]
        delay_ms: u64,
        /// Exploration order at each cell
        #[arg(long, value_enum, default_value = "down-right")]
        order: CliOrder,
        /// Suppress the per-visit event stream
        #[arg(long, short)]
        quiet: bool,
        /// Enable verbose output
        #[arg(long, short)]
        verbose: bool,
    },
    /// Print an editable all-open N×N maze template
    Template {
        /// Maze size (N)
        size: usize,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), MazeError> {
    match args.command {
        Commands::Solve {
            maze,
            jobs,
            delay_ms,
            order,
            quiet,
            verbose,
        } => run_solve(&maze, jobs, delay_ms, order, quiet, verbose),
        Commands::Template { size } => run_template(size),
    }
}

fn run_solve(
    path: &PathBuf,
    jobs: Option<usize>,
    delay_ms: u64,
    order: CliOrder,
    quiet: bool,
    verbose: bool,
) -> Result<(), MazeError> {
    setup_logging(verbose);

    let text = std::fs::read_to_string(path)?;
    let mut grid = Grid::parse(&text)?;
    let n = grid.size();
    let start = Coord::new(0, 0);
    let goal = Coord::new(n - 1, n - 1);

    // The maze author owns the endpoints; they are always passable.
    grid.force_open(start);
    grid.force_open(goal);
    let rendered = grid.clone();

    let mut config = SolveConfig::default().with_moves(order.into());
    if let Some(jobs) = jobs {
        config = config.with_workers(jobs);
    }

    let report = if quiet {
        solve(grid, start, goal, &config, Arc::new(NullReporter))
    } else {
        let (reporter, printer) = ConsoleReporter::spawn(Duration::from_millis(delay_ms));
        let report = solve(grid, start, goal, &config, Arc::new(reporter));
        // All senders are gone once solve returns; drain what remains.
        printer.finish();
        report
    };

    println!();
    print_grid(&rendered, &report, start, goal);
    println!();
    if report.found {
        println!("Solution found!");
    } else {
        println!("No solution exists!");
    }
    print!("{}", report.statistics.format_summary());
    Ok(())
}

fn run_template(size: usize) -> Result<(), MazeError> {
    // Same dimension rule the parser enforces on the way back in.
    if size == 0 {
        return Err(MazeError::InvalidDimension);
    }
    for _ in 0..size {
        println!("{}", ".".repeat(size));
    }
    Ok(())
}

/// Render the maze with the surviving path marks.
fn print_grid(grid: &Grid, report: &SolveReport, start: Coord, goal: Coord) {
    let on_path: HashSet<Coord> = report.path_cells.iter().copied().collect();
    let n = grid.size();
    for x in 0..n {
        let mut line = String::with_capacity(n);
        for y in 0..n {
            let cell = Coord::new(x, y);
            let ch = if cell == start {
                'S'
            } else if cell == goal {
                'E'
            } else if on_path.contains(&cell) {
                '*'
            } else if grid.is_open(cell) {
                '.'
            } else {
                '#'
            };
            line.push(ch);
        }
        println!("{line}");
    }
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("rat_maze=debug,warn")
    } else {
        EnvFilter::new("rat_maze=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
