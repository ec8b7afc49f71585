//! Terminal rendering of grid snapshots.
//!
//! Rendering is an observer: the engine hands a [`Maze`] snapshot to a
//! [`Render`] implementation after each visited cell and ignores the
//! outcome. The terminal renderer redraws the whole grid with one colored
//! glyph per cell and paces itself with a fixed frame delay so progress is
//! visible to a human. The delay is cosmetic; nothing in the engine relies
//! on it.

use std::io::{self, Write};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor, queue,
    style::{Attribute, Color, Print, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use crate::maze::{Cell, Maze};

/// Observer for grid snapshots.
pub trait Render: Send + Sync {
    /// Draw one snapshot. The engine treats failures as non-events.
    fn draw(&self, maze: &Maze) -> io::Result<()>;
}

/// Renderer that draws nothing; used when visualization is disabled and by
/// the test suite.
pub struct NullRenderer;

impl Render for NullRenderer {
    fn draw(&self, _maze: &Maze) -> io::Result<()> {
        Ok(())
    }
}

/// Highlight color for a cell, if it gets one.
fn cell_color(cell: Cell) -> Option<Color> {
    match cell {
        Cell::Wall => Some(Color::White),
        Cell::Visited => Some(Color::Green),
        Cell::Start | Cell::Exit => Some(Color::Blue),
        Cell::Open => None,
    }
}

/// Full-screen colored redraw on stdout.
///
/// Concurrent draws from different workers are serialized by an internal
/// lock so frames never interleave.
pub struct TerminalRenderer {
    out: Mutex<io::Stdout>,
    frame_delay: Duration,
}

impl TerminalRenderer {
    pub fn new(frame_delay: Duration) -> Self {
        Self {
            out: Mutex::new(io::stdout()),
            frame_delay,
        }
    }
}

impl Render for TerminalRenderer {
    fn draw(&self, maze: &Maze) -> io::Result<()> {
        {
            let mut out = self.out.lock().expect("stdout lock poisoned");
            queue!(out, cursor::MoveTo(0, 0), Clear(ClearType::FromCursorDown))?;
            for row in 0..maze.rows() {
                for cell in maze.row_cells(row) {
                    match cell_color(*cell) {
                        Some(color) => queue!(
                            out,
                            SetAttribute(Attribute::Bold),
                            SetForegroundColor(color),
                            Print(cell.glyph()),
                            SetAttribute(Attribute::Reset),
                        )?,
                        None => queue!(out, Print(cell.glyph()))?,
                    }
                    queue!(out, Print(' '))?;
                }
                queue!(out, Print('\n'))?;
            }
            out.flush()?;
        }

        if !self.frame_delay.is_zero() {
            thread::sleep(self.frame_delay);
        }
        Ok(())
    }
}
