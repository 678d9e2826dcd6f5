//! Puzzle layer: a terrain grid plus start and goal.
//!
//! Levels are written as text, one line per grid row:
//!
//! ```text
//! ooo-------
//! oSoooo----
//! ooooooooo-
//! -ooooooooo
//! -----ooGoo
//! ------ooo-
//! ```
//!
//! - `o` tile, `S` start tile, `G` goal tile
//! - `-`, `.` or space: void
//!
//! Blank lines before and after the level are ignored, trailing whitespace is trimmed and short
//! rows are padded with void.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::core::cell::Cell;
use crate::search::bfs::Solver;
use crate::search::resources::ResourceLimits;
use crate::search::SearchError;
use crate::terrain::{Grid, Terrain};

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("unknown tile {tile:?} at row {row}, column {col}")]
    UnknownTile { tile: char, row: usize, col: usize },
    #[error("level has no {0:?} marker")]
    MissingMarker(char),
    #[error("level has more than one {marker:?} marker (second at row {row}, column {col})")]
    DuplicateMarker { marker: char, row: usize, col: usize },
    #[error("level is empty")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Void,
    Floor,
    Start,
    Goal,
}

impl Tile {
    fn from_char(c: char) -> Option<Tile> {
        match c {
            '-' | '.' | ' ' => Some(Tile::Void),
            'o' | 'O' => Some(Tile::Floor),
            'S' => Some(Tile::Start),
            'G' => Some(Tile::Goal),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Puzzle {
    pub name: String,
    pub grid: Grid,
    pub start: Cell,
    pub goal: Cell,
    pub limits: ResourceLimits,
}

impl Puzzle {
    pub fn new(name: impl Into<String>, grid: Grid, start: Cell, goal: Cell) -> Self {
        Self {
            name: name.into(),
            grid,
            start,
            goal,
            limits: ResourceLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: ResourceLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self, PuzzleError> {
        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        let first = lines.iter().position(|l| !l.is_empty());
        let last = lines.iter().rposition(|l| !l.is_empty());
        let (first, last) = match (first, last) {
            (Some(f), Some(l)) => (f, l),
            _ => return Err(PuzzleError::Empty),
        };
        let lines = &lines[first..=last];

        let rows = lines.len();
        let cols = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        let mut grid = Grid::new(rows as i32, cols as i32);
        let mut start: Option<Cell> = None;
        let mut goal: Option<Cell> = None;

        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let tile =
                    Tile::from_char(ch).ok_or(PuzzleError::UnknownTile { tile: ch, row, col })?;
                let cell = Cell::new(row as i32, col as i32);
                let marker = match tile {
                    Tile::Void => continue,
                    Tile::Floor => None,
                    Tile::Start => Some(('S', &mut start)),
                    Tile::Goal => Some(('G', &mut goal)),
                };
                if let Some((marker, slot)) = marker {
                    if slot.is_some() {
                        return Err(PuzzleError::DuplicateMarker { marker, row, col });
                    }
                    *slot = Some(cell);
                }
                grid.set(cell, true);
            }
        }

        let start = start.ok_or(PuzzleError::MissingMarker('S'))?;
        let goal = goal.ok_or(PuzzleError::MissingMarker('G'))?;
        Ok(Self::new(name, grid, start, goal))
    }

    /// Load a level file. The puzzle is named after the file stem.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PuzzleError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| PuzzleError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::parse(name, &text)
    }

    /// Check that start and goal sit on traversable cells. Intended for CLIs and tests.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.grid.is_traversable(self.start) {
            return Err(SearchError::InvalidPuzzle {
                reason: format!("start {} is not a tile", self.start),
            });
        }
        if !self.grid.is_traversable(self.goal) {
            return Err(SearchError::InvalidPuzzle {
                reason: format!("goal {} is not a tile", self.goal),
            });
        }
        Ok(())
    }

    pub fn solver(&self) -> Solver<'_, Grid> {
        Solver::new(self.start, self.goal, &self.grid).with_limits(self.limits)
    }
}
