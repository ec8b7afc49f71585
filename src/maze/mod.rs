//! Maze data model and loading
//!
//! A maze is a fixed-size rectangular grid of cells parsed from a
//! whitespace-delimited text description. This module owns the plain data
//! types and the parser; during a search the grid is shared between worker
//! threads through [`SharedGrid`].

#![allow(dead_code)]

pub mod grid;

pub use grid::{SharedGrid, Visit};

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced while loading a maze description.
#[derive(Debug, Error)]
pub enum MazeError {
    /// The maze file could not be read.
    #[error("failed to read maze file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The leading row/column counts are missing or not integers.
    #[error("invalid maze header: expected row and column counts")]
    InvalidHeader,
    /// Row or column count is zero.
    #[error("maze dimensions must be non-zero")]
    EmptyGrid,
    /// The description ran out of cell codes before the grid was full.
    #[error("maze description ends before cell ({row}, {col})")]
    Truncated { row: usize, col: usize },
    /// A cell code token with more than one character.
    #[error("invalid cell code {code:?}: cell codes are single characters")]
    InvalidCell { code: String },
    /// More than one start cell in the description.
    #[error("maze defines more than one start cell")]
    MultipleStarts,
    /// No start cell in the description.
    #[error("maze has no start cell")]
    MissingStart,
}

/// A zero-based (row, column) grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// State of a single maze cell.
///
/// `Wall`, `Start` and `Exit` are fixed at load time. `Open` transitions to
/// `Visited` exactly once per cell over a whole run; `Visited` never appears
/// in the input format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Impassable wall (`#`).
    Wall,
    /// Unexplored floor (any code other than `#`, `e`, `s`).
    Open,
    /// The unique start cell (`e`).
    Start,
    /// An exit cell (`s`).
    Exit,
    /// A cell the search has already explored.
    Visited,
}

impl Cell {
    /// Decode a single-character cell code. Unknown codes are open floor.
    fn from_code(code: char) -> Self {
        match code {
            '#' => Cell::Wall,
            'e' => Cell::Start,
            's' => Cell::Exit,
            _ => Cell::Open,
        }
    }

    /// Whether a worker may expand into this cell.
    pub fn is_traversable(self) -> bool {
        matches!(self, Cell::Open | Cell::Exit)
    }

    /// Single-character glyph used for text output.
    pub fn glyph(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Open => '.',
            Cell::Start => 'e',
            Cell::Exit => 's',
            Cell::Visited => 'o',
        }
    }
}

/// A rectangular grid of cells with at most one start position.
#[derive(Debug, Clone)]
pub struct Maze {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    start: Option<Position>,
}

impl Maze {
    /// Load a maze description from a file.
    pub fn load(path: &Path) -> Result<Self, MazeError> {
        let input = fs::read_to_string(path).map_err(|source| MazeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&input)
    }

    /// Parse a maze description: a row count and a column count followed by
    /// one single-character code per cell, all whitespace-delimited.
    pub fn parse(input: &str) -> Result<Self, MazeError> {
        let mut tokens = input.split_whitespace();

        let rows: usize = tokens
            .next()
            .and_then(|t| t.parse().ok())
            .ok_or(MazeError::InvalidHeader)?;
        let cols: usize = tokens
            .next()
            .and_then(|t| t.parse().ok())
            .ok_or(MazeError::InvalidHeader)?;
        if rows == 0 || cols == 0 {
            return Err(MazeError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(rows * cols);
        let mut start = None;
        for row in 0..rows {
            for col in 0..cols {
                let token = tokens.next().ok_or(MazeError::Truncated { row, col })?;
                let mut chars = token.chars();
                let code = chars.next().ok_or_else(|| MazeError::InvalidCell {
                    code: token.to_string(),
                })?;
                if chars.next().is_some() {
                    return Err(MazeError::InvalidCell {
                        code: token.to_string(),
                    });
                }

                let cell = Cell::from_code(code);
                if cell == Cell::Start {
                    if start.is_some() {
                        return Err(MazeError::MultipleStarts);
                    }
                    start = Some(Position::new(row, col));
                }
                cells.push(cell);
            }
        }

        Ok(Self {
            rows,
            cols,
            cells,
            start,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The start position, if the description contained one.
    pub fn start(&self) -> Option<Position> {
        self.start
    }

    /// Whether `pos` lies inside the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Bounds-checked read of a single cell.
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        if self.contains(pos) {
            Some(self.cells[self.index(pos)])
        } else {
            None
        }
    }

    /// One row of cells as a slice. Panics if `row` is out of bounds.
    pub fn row_cells(&self, row: usize) -> &[Cell] {
        let from = row * self.cols;
        &self.cells[from..from + self.cols]
    }

    /// In-bounds 4-neighborhood of `pos` in the fixed expansion order:
    /// up, right, down, left.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        let mut out = Vec::with_capacity(4);
        if pos.row > 0 {
            out.push(Position::new(pos.row - 1, pos.col));
        }
        if pos.col + 1 < self.cols {
            out.push(Position::new(pos.row, pos.col + 1));
        }
        if pos.row + 1 < self.rows {
            out.push(Position::new(pos.row + 1, pos.col));
        }
        if pos.col > 0 {
            out.push(Position::new(pos.row, pos.col - 1));
        }
        out
    }

    /// Number of cells currently marked visited.
    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Visited).count()
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for (col, cell) in self.row_cells(row).iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
