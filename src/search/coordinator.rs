//! Pool construction and the coordinator loop.

use std::sync::Arc;
use std::thread;
use std::time::Instant;

use log::{debug, warn};

use super::channel::{report_channel, WorkerMessage};
use super::config::ExploreConfig;
use super::result::{ExitReport, ExploreResult, ExploreStatistics};
use super::task::Task;
use super::worker::run_worker;
use super::SearchContext;
use crate::maze::{Maze, Position};
use crate::render::Render;

/// Explore `maze` outward from `start` with a fixed pool of workers.
///
/// Returns once every worker has terminated: either some worker reached an
/// exit, or the component reachable from `start` is exhausted. The caller
/// is responsible for `start` being the maze's start cell; any in-bounds
/// seed works, which is what the tests rely on.
pub fn run_parallel_explore(
    maze: Maze,
    start: Position,
    config: &ExploreConfig,
    renderer: Arc<dyn Render>,
) -> ExploreResult {
    let start_time = Instant::now();
    let num_workers = config.num_workers;

    let ctx = Arc::new(SearchContext::new(maze, renderer));
    ctx.queue.push(Task::seed(start));

    let (report_tx, report_rx) = report_channel();

    let handles: Vec<_> = (0..num_workers)
        .map(|worker_id| {
            let ctx = Arc::clone(&ctx);
            let reports = report_tx.clone();
            thread::spawn(move || run_worker(worker_id, &ctx, &reports))
        })
        .collect();

    // Keeping the coordinator's sender alive would keep the channel open
    // after every worker is done.
    drop(report_tx);

    let mut exit = None;
    let mut worker_statistics = Vec::with_capacity(num_workers);
    for msg in report_rx {
        match msg {
            WorkerMessage::ExitFound {
                worker_id,
                position,
                path,
            } => {
                debug!("worker {worker_id} reported the exit at {position}");
                exit = Some(ExitReport { position, path });
            }
            WorkerMessage::Finished { worker_id, stats } => {
                worker_statistics.push((worker_id, stats));
            }
        }
    }

    for handle in handles {
        if handle.join().is_err() {
            warn!("a worker panicked before terminating");
        }
    }

    worker_statistics.sort_by_key(|(id, _)| *id);

    let mut statistics = ExploreStatistics {
        num_workers,
        ..Default::default()
    };
    for (_, stats) in &worker_statistics {
        statistics.absorb(stats);
    }
    statistics.elapsed_time = start_time.elapsed();

    ExploreResult {
        exit,
        maze: ctx.grid.snapshot(),
        statistics,
        worker_statistics,
    }
}
