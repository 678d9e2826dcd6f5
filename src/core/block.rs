use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::cell::Cell;
use crate::core::moves::Move;

/// The cells covered by the block.
///
/// Invariants:
/// - `first == second` (standing) or the two cells are adjacent along a row or column (lying);
/// - `first <= second` lexicographically, so physically identical placements compare and hash
///   equal regardless of how they were built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Cell; 2]", into = "[Cell; 2]")]
pub struct Block {
    first: Cell,
    second: Cell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Standing,
    /// Both cells on one row.
    Horizontal,
    /// Both cells in one column.
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BlockError {
    #[error("block cells {first} and {second} are not in canonical order")]
    NotCanonical { first: Cell, second: Cell },
    #[error("block cells {first} and {second} are neither identical nor adjacent")]
    NotAdjacent { first: Cell, second: Cell },
}

impl Block {
    /// A standing block on `cell`.
    #[inline]
    pub const fn standing(cell: Cell) -> Self {
        Self {
            first: cell,
            second: cell,
        }
    }

    /// Checked constructor. The pair must already be in canonical order.
    pub fn new(first: Cell, second: Cell) -> Result<Self, BlockError> {
        if first > second {
            return Err(BlockError::NotCanonical { first, second });
        }
        if first != second && !first.is_adjacent(second) {
            return Err(BlockError::NotAdjacent { first, second });
        }
        Ok(Self { first, second })
    }

    /// Like [`Block::new`] but accepts the cells in either order.
    pub fn normalized(a: Cell, b: Cell) -> Result<Self, BlockError> {
        if a <= b {
            Self::new(a, b)
        } else {
            Self::new(b, a)
        }
    }

    /// Orders two cells that are known to form a valid block.
    #[inline]
    pub(crate) fn ordered(a: Cell, b: Cell) -> Self {
        debug_assert!(a == b || a.is_adjacent(b), "malformed block {a} / {b}");
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    #[inline]
    pub fn first(&self) -> Cell {
        self.first
    }

    #[inline]
    pub fn second(&self) -> Cell {
        self.second
    }

    #[inline]
    pub fn cells(&self) -> [Cell; 2] {
        [self.first, self.second]
    }

    #[inline]
    pub fn is_standing(&self) -> bool {
        self.first == self.second
    }

    /// True iff the block stands on `cell`.
    #[inline]
    pub fn stands_on(&self, cell: Cell) -> bool {
        self.is_standing() && self.first == cell
    }

    pub fn orientation(&self) -> Orientation {
        if self.is_standing() {
            Orientation::Standing
        } else if self.first.row == self.second.row {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// See [`crate::rules::tilt::tilt`].
    #[inline]
    pub fn tilt(self, mv: Move) -> Block {
        crate::rules::tilt::tilt(self, mv)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_standing() {
            write!(f, "standing {}", self.first)
        } else {
            write!(f, "lying {}-{}", self.first, self.second)
        }
    }
}

impl TryFrom<[Cell; 2]> for Block {
    type Error = BlockError;

    fn try_from(cells: [Cell; 2]) -> Result<Self, Self::Error> {
        Block::new(cells[0], cells[1])
    }
}

impl From<Block> for [Cell; 2] {
    fn from(b: Block) -> Self {
        b.cells()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_is_derived_from_cells() {
        let b = Block::new(Cell::new(2, 3), Cell::new(2, 4)).unwrap();
        assert_eq!(b.orientation(), Orientation::Horizontal);
        let b = Block::new(Cell::new(2, 3), Cell::new(3, 3)).unwrap();
        assert_eq!(b.orientation(), Orientation::Vertical);
        assert_eq!(
            Block::standing(Cell::new(1, 1)).orientation(),
            Orientation::Standing
        );
    }

    #[test]
    fn ordered_sorts_the_pair() {
        let b = Block::ordered(Cell::new(1, 2), Cell::new(1, 1));
        assert_eq!(b.first(), Cell::new(1, 1));
        assert_eq!(b.second(), Cell::new(1, 2));
    }
}
