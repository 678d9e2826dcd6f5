use std::fmt;
use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// A grid position as `(row, col)`.
///
/// Ordering is lexicographic by row, then column. Block canonical form relies on it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const ORIGIN: Cell = Cell { row: 0, col: 0 };

    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// True iff `other` shares a row or column with `self` at distance exactly one.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        u64::from(self.row.abs_diff(other.row)) + u64::from(self.col.abs_diff(other.col)) == 1
    }

    /// `self + offset`, or `None` if either coordinate leaves the `i32` range.
    #[inline]
    pub fn checked_add(self, offset: Cell) -> Option<Cell> {
        Some(Cell::new(
            self.row.checked_add(offset.row)?,
            self.col.checked_add(offset.col)?,
        ))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Cell {
    type Output = Cell;

    #[inline]
    fn add(self, rhs: Cell) -> Self::Output {
        Cell::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Mul<i32> for Cell {
    type Output = Cell;

    #[inline]
    fn mul(self, rhs: i32) -> Cell {
        Cell {
            row: self.row * rhs,
            col: self.col * rhs,
        }
    }
}
