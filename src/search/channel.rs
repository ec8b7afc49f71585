//! Worker-to-coordinator reporting and the exit cancellation signal.

#![allow(dead_code)]

use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::atomic::{AtomicBool, Ordering};

use super::worker::WorkerStats;
use crate::maze::Position;

/// Message sent from a worker to the coordinator.
#[derive(Debug, Clone)]
pub enum WorkerMessage {
    /// The worker reached an exit cell. At most one of these is sent per
    /// run; the [`ExitSignal`] gates the report.
    ExitFound {
        worker_id: usize,
        position: Position,
        path: Vec<Position>,
    },
    /// The worker has terminated.
    Finished { worker_id: usize, stats: WorkerStats },
}

/// Write-once flag signalling that an exit has been reached.
///
/// Reads and the single false-to-true transition are sequentially
/// consistent. A stale read delays a worker by at most one unit of work; it
/// can never resurrect the search once the flag is set.
#[derive(Debug, Default)]
pub struct ExitSignal {
    found: AtomicBool,
}

impl ExitSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether some worker has already reached an exit.
    pub fn is_set(&self) -> bool {
        self.found.load(Ordering::SeqCst)
    }

    /// Attempt the false-to-true transition. Exactly one caller per run
    /// observes `true`; that worker reports the exit and closes the queue.
    pub fn try_set(&self) -> bool {
        self.found
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }
}

/// Create the worker-to-coordinator channel. Unbounded, so reporting never
/// blocks a worker.
pub fn report_channel() -> (Sender<WorkerMessage>, Receiver<WorkerMessage>) {
    unbounded()
}
