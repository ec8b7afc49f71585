//! Exploration results and statistics.

#![allow(dead_code)]

use std::fmt;
use std::time::Duration;

use super::worker::WorkerStats;
use crate::maze::{Maze, Position};

/// The report produced by the worker that won the exit signal.
#[derive(Debug, Clone)]
pub struct ExitReport {
    /// Grid position of the exit cell that was reached.
    pub position: Position,
    /// The path the winning task took from the start to the exit.
    pub path: Vec<Position>,
}

/// Outcome of a parallel exploration run.
#[derive(Debug)]
pub struct ExploreResult {
    /// The exit, if any worker reached one. `None` means the reachable
    /// component of the maze was exhausted without finding one.
    pub exit: Option<ExitReport>,
    /// Final grid state, visited marks included.
    pub maze: Maze,
    /// Statistics aggregated over all workers.
    pub statistics: ExploreStatistics,
    /// Per-worker statistics, sorted by worker id.
    pub worker_statistics: Vec<(usize, WorkerStats)>,
}

/// Statistics aggregated over all workers of a run.
#[derive(Debug, Clone, Default)]
pub struct ExploreStatistics {
    /// Size of the worker pool.
    pub num_workers: usize,
    /// Wall-clock time of the whole run.
    pub elapsed_time: Duration,
    /// Tasks popped and processed to any outcome.
    pub tasks_processed: u64,
    /// Cells transitioned from open to visited.
    pub cells_visited: u64,
    /// Tasks discarded as stale (frontier already visited or a wall).
    pub tasks_discarded: u64,
    /// Successor tasks forked and pushed.
    pub tasks_spawned: u64,
}

impl ExploreStatistics {
    /// Fold one worker's counters into the totals.
    pub fn absorb(&mut self, stats: &WorkerStats) {
        self.tasks_processed += stats.tasks_processed;
        self.cells_visited += stats.cells_visited;
        self.tasks_discarded += stats.tasks_discarded;
        self.tasks_spawned += stats.tasks_spawned;
    }

    /// Cells visited per second.
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.cells_visited as f64 / secs
        }
    }

    /// Format statistics as a human-readable string.
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Workers: {}\n", self.num_workers));
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed_time));
        s.push_str(&format!("Tasks processed: {}\n", self.tasks_processed));
        s.push_str(&format!("Cells visited: {}\n", self.cells_visited));
        s.push_str(&format!("Stale tasks discarded: {}\n", self.tasks_discarded));
        s.push_str(&format!("Successor tasks spawned: {}\n", self.tasks_spawned));
        s.push_str(&format!("Throughput: {:.0} cells/sec\n", self.throughput()));
        s
    }
}

impl fmt::Display for ExploreResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.exit {
            Some(report) => {
                writeln!(f, "Exit found at {}!", report.position)?;
                writeln!(f, "Path length: {} cells", report.path.len())
            }
            None => writeln!(f, "Exit not found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_exit(exit: Option<ExitReport>) -> ExploreResult {
        ExploreResult {
            exit,
            maze: Maze::parse("1 2\ne s").unwrap(),
            statistics: ExploreStatistics::default(),
            worker_statistics: Vec::new(),
        }
    }

    #[test]
    fn test_absorb_sums_counters() {
        let mut totals = ExploreStatistics::default();
        totals.absorb(&WorkerStats {
            tasks_processed: 3,
            cells_visited: 2,
            tasks_discarded: 1,
            tasks_spawned: 4,
        });
        totals.absorb(&WorkerStats {
            tasks_processed: 2,
            cells_visited: 1,
            tasks_discarded: 1,
            tasks_spawned: 0,
        });

        assert_eq!(totals.tasks_processed, 5);
        assert_eq!(totals.cells_visited, 3);
        assert_eq!(totals.tasks_discarded, 2);
        assert_eq!(totals.tasks_spawned, 4);
    }

    #[test]
    fn test_throughput_zero_division() {
        let stats = ExploreStatistics::default();
        assert_eq!(stats.throughput(), 0.0);
    }

    #[test]
    fn test_display_found() {
        let result = result_with_exit(Some(ExitReport {
            position: Position::new(0, 1),
            path: vec![Position::new(0, 0), Position::new(0, 1)],
        }));

        let text = result.to_string();
        assert!(text.contains("Exit found at (0, 1)!"));
        assert!(text.contains("Path length: 2 cells"));
    }

    #[test]
    fn test_display_not_found() {
        let result = result_with_exit(None);
        assert!(result.to_string().contains("Exit not found"));
    }

    #[test]
    fn test_format_summary_mentions_counters() {
        let mut stats = ExploreStatistics::default();
        stats.num_workers = 4;
        stats.cells_visited = 17;

        let summary = stats.format_summary();
        assert!(summary.contains("Workers: 4"));
        assert!(summary.contains("Cells visited: 17"));
    }
}
