//! Terrain predicates: which cells may carry part of the block.
//!
//! The search never enumerates the terrain. It only asks about single cells, so any
//! `Fn(Cell) -> bool` works as terrain; [`Grid`] is the dense table used by puzzles.

mod grid;

pub use grid::Grid;

use crate::core::block::Block;
use crate::core::cell::Cell;

pub trait Terrain {
    fn is_traversable(&self, cell: Cell) -> bool;

    /// True iff every cell the block covers is traversable.
    #[inline]
    fn allows(&self, block: &Block) -> bool {
        self.is_traversable(block.first())
            && (block.is_standing() || self.is_traversable(block.second()))
    }
}

impl<F> Terrain for F
where
    F: Fn(Cell) -> bool,
{
    #[inline]
    fn is_traversable(&self, cell: Cell) -> bool {
        self(cell)
    }
}
