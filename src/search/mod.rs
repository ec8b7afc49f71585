//! Parallel maze exploration engine
//!
//! The engine is a fixed pool of worker threads sharing one
//! [`SearchContext`]:
//! - Grid: the mutex-guarded maze with atomic per-cell check-and-set
//! - Queue: blocking task distribution with structural termination
//! - Signal: write-once cancellation when an exit is reached
//! - Renderer: best-effort observer of grid snapshots
//!
//! Workers flood outward from the start cell in no particular order; the
//! first worker to reach an exit cancels the rest. The engine guarantees
//! only that each cell is visited at most once and that at most one exit
//! is reported.

pub mod channel;
pub mod config;
pub mod coordinator;
pub mod queue;
pub mod result;
pub mod task;
pub mod worker;

#[allow(unused_imports)]
pub use config::ExploreConfig;
#[allow(unused_imports)]
pub use coordinator::run_parallel_explore;
#[allow(unused_imports)]
pub use result::{ExploreResult, ExploreStatistics};

use std::sync::Arc;

use crate::maze::{Maze, SharedGrid};
use crate::render::Render;
use channel::ExitSignal;
use queue::TaskQueue;

/// Shared state for one exploration run, constructed once and handed to
/// every worker by reference. Tests build a context around a synthetic
/// maze without touching any process-global state.
pub struct SearchContext {
    /// Single source of truth for cell state.
    pub grid: SharedGrid,
    /// Work distribution and termination detection.
    pub queue: TaskQueue,
    /// Set exactly once, by the worker that reaches an exit.
    pub signal: ExitSignal,
    /// Observer for grid snapshots; never correctness-relevant.
    pub renderer: Arc<dyn Render>,
}

impl SearchContext {
    pub fn new(maze: Maze, renderer: Arc<dyn Render>) -> Self {
        Self {
            grid: SharedGrid::new(maze),
            queue: TaskQueue::new(),
            signal: ExitSignal::new(),
            renderer,
        }
    }
}
