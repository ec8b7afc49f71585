use clap::Parser;
use log::debug;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

mod maze;
mod render;
mod search;

use maze::{Maze, MazeError};
use render::{NullRenderer, Render, TerminalRenderer};
use search::config::ExploreConfig;
use search::coordinator::run_parallel_explore;
use search::result::ExploreResult;

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "parmaze")]
#[command(about = "parmaze - parallel maze explorer")]
#[command(version)]
struct Args {
    /// Path to the maze description file
    maze: PathBuf,

    /// Number of worker threads
    #[arg(long, short = 'j')]
    workers: Option<usize>,

    /// Disable the live terminal rendering of the search
    #[arg(long)]
    no_render: bool,

    /// Delay between rendered frames in milliseconds
    #[arg(long, default_value = "150")]
    delay_ms: u64,

    /// Print search statistics after the run
    #[arg(long, short)]
    verbose: bool,
}

fn run(args: &Args) -> Result<ExploreResult, Box<dyn std::error::Error>> {
    let maze = Maze::load(&args.maze)?;
    let start = maze.start().ok_or(MazeError::MissingStart)?;
    debug!(
        "loaded {}x{} maze, start at {}",
        maze.rows(),
        maze.cols(),
        start
    );

    let mut config = ExploreConfig::default();
    if let Some(workers) = args.workers {
        config = config.with_workers(workers);
    }

    let renderer: Arc<dyn Render> = if args.no_render {
        Arc::new(NullRenderer)
    } else {
        Arc::new(TerminalRenderer::new(Duration::from_millis(args.delay_ms)))
    };

    Ok(run_parallel_explore(maze, start, &config, renderer))
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(result) => {
            print!("{}", result);
            if args.verbose {
                print!("{}", result.statistics.format_summary());
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
