//! Shared, mutex-guarded view of a maze used by concurrent workers.
//!
//! All cell mutation during a search goes through [`SharedGrid::try_visit`],
//! a single check-and-set under one lock acquisition. Checking whether a
//! cell is open and marking it visited as two separately-locked steps would
//! let two workers observe the same cell as open before either marks it,
//! and the cell would be expanded twice.

#![allow(dead_code)]

use std::sync::{Mutex, MutexGuard};

use super::{Cell, Maze, Position};

/// Outcome of a visit attempt on a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// The cell was open (or the start) and is now marked visited.
    Explored,
    /// The cell is an exit marker; it is left untouched.
    Exit,
    /// The cell is a wall or was already visited; nothing changed.
    Blocked,
}

/// A maze shared between worker threads.
pub struct SharedGrid {
    inner: Mutex<Maze>,
}

impl SharedGrid {
    pub fn new(maze: Maze) -> Self {
        Self {
            inner: Mutex::new(maze),
        }
    }

    /// Atomically inspect `pos` and claim it for exploration.
    ///
    /// Panics if `pos` lies outside the grid: the engine only generates
    /// in-bounds neighbors, so an out-of-bounds visit is a logic error in
    /// neighbor computation, not valid input.
    pub fn try_visit(&self, pos: Position) -> Visit {
        let mut maze = self.lock();
        assert!(maze.contains(pos), "visit out of bounds: {pos}");
        let idx = maze.index(pos);
        match maze.cells[idx] {
            Cell::Exit => Visit::Exit,
            Cell::Open | Cell::Start => {
                maze.cells[idx] = Cell::Visited;
                Visit::Explored
            }
            Cell::Wall | Cell::Visited => Visit::Blocked,
        }
    }

    /// Bounds-checked read of a single cell.
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.lock().cell(pos)
    }

    /// In-bounds neighbors of `pos` that are currently traversable, in the
    /// fixed expansion order. Filtered under a single lock acquisition so
    /// the expanding worker sees one consistent view of the frontier.
    pub fn open_neighbors(&self, pos: Position) -> Vec<Position> {
        let maze = self.lock();
        maze.neighbors(pos)
            .into_iter()
            .filter(|&n| maze.cells[maze.index(n)].is_traversable())
            .collect()
    }

    /// A consistent copy of the whole grid, taken under the same lock as
    /// [`SharedGrid::try_visit`] so a renderer never observes a torn state.
    pub fn snapshot(&self) -> Maze {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Maze> {
        self.inner.lock().expect("maze lock poisoned")
    }
}
