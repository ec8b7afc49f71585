//! The worker loop: the state machine each pool thread runs.
//!
//! A worker repeatedly pops a task, claims the task's frontier cell through
//! the shared grid, hands a snapshot to the renderer, and forks successor
//! tasks for every traversable neighbor. It stops when the queue reports
//! that no work can ever arrive again or when the exit signal is set.

use crossbeam_channel::Sender;
use log::{debug, info};

use super::channel::WorkerMessage;
use super::queue::Popped;
use super::SearchContext;
use crate::maze::Visit;

/// Counters a worker accumulates over its lifetime, reported to the
/// coordinator in its final [`WorkerMessage::Finished`] message.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkerStats {
    /// Tasks popped and processed to any outcome.
    pub tasks_processed: u64,
    /// Cells this worker transitioned from open to visited.
    pub cells_visited: u64,
    /// Tasks discarded because their frontier was a wall or already
    /// visited by another task.
    pub tasks_discarded: u64,
    /// Successor tasks this worker forked and pushed.
    pub tasks_spawned: u64,
}

/// Run the worker loop until termination.
///
/// Always sends a final [`WorkerMessage::Finished`]; if this worker wins
/// the exit signal, a [`WorkerMessage::ExitFound`] precedes it.
pub fn run_worker(worker_id: usize, ctx: &SearchContext, reports: &Sender<WorkerMessage>) {
    debug!("worker {worker_id} started");
    let mut stats = WorkerStats::default();

    loop {
        let task = match ctx.queue.pop() {
            Popped::Task(task) => task,
            Popped::Terminate => break,
        };
        stats.tasks_processed += 1;

        // Another worker may have found the exit while this task sat in
        // the queue; in-flight work is discarded without touching the grid.
        if ctx.signal.is_set() {
            ctx.queue.complete(Vec::new());
            break;
        }

        let frontier = task.frontier();
        match ctx.grid.try_visit(frontier) {
            Visit::Exit => {
                if ctx.signal.try_set() {
                    info!("worker {worker_id} found the exit at {frontier}");
                    let _ = reports.send(WorkerMessage::ExitFound {
                        worker_id,
                        position: frontier,
                        path: task.into_path(),
                    });
                    ctx.queue.close();
                }
                ctx.queue.complete(Vec::new());
                break;
            }
            Visit::Blocked => {
                stats.tasks_discarded += 1;
                ctx.queue.complete(Vec::new());
            }
            Visit::Explored => {
                stats.cells_visited += 1;

                // Best effort: a failed draw never affects the search.
                let _ = ctx.renderer.draw(&ctx.grid.snapshot());

                let successors: Vec<_> = ctx
                    .grid
                    .open_neighbors(frontier)
                    .into_iter()
                    .map(|next| task.fork(next))
                    .collect();
                stats.tasks_spawned += successors.len() as u64;
                ctx.queue.complete(successors);
            }
        }
    }

    debug!(
        "worker {worker_id} terminating after {} tasks",
        stats.tasks_processed
    );
    let _ = reports.send(WorkerMessage::Finished { worker_id, stats });
}
