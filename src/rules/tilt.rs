use crate::core::block::{Block, Orientation};
use crate::core::cell::Cell;
use crate::core::moves::Move;

/// The configuration reached by tipping `block` over in direction `mv`.
///
/// - Standing on `p`: the block ends up lying over `p + d` and `p + 2d`.
/// - Lying along the direction of travel: it stands up one cell past the leading end.
/// - Lying across the direction of travel: both cells roll one step sideways.
///
/// Total over well-formed blocks whose coordinates stay two cells away from the `i32` bounds;
/// terrain is the caller's concern. [`checked_tilt`] covers the full coordinate range.
pub fn tilt(block: Block, mv: Move) -> Block {
    let d = mv.delta();
    let along = match block.orientation() {
        Orientation::Standing => {
            let p = block.first();
            return Block::ordered(p + d, p + d * 2);
        }
        Orientation::Horizontal => mv.is_horizontal(),
        Orientation::Vertical => !mv.is_horizontal(),
    };

    if along {
        Block::standing(leading(block, mv) + d)
    } else {
        Block::ordered(block.first() + d, block.second() + d)
    }
}

/// Like [`tilt`], but `None` when the result would leave the `i32` coordinate range.
pub fn checked_tilt(block: Block, mv: Move) -> Option<Block> {
    let d = mv.delta();
    let along = match block.orientation() {
        Orientation::Standing => {
            let near = block.first().checked_add(d)?;
            return Some(Block::ordered(near, near.checked_add(d)?));
        }
        Orientation::Horizontal => mv.is_horizontal(),
        Orientation::Vertical => !mv.is_horizontal(),
    };

    if along {
        Some(Block::standing(leading(block, mv).checked_add(d)?))
    } else {
        Some(Block::ordered(
            block.first().checked_add(d)?,
            block.second().checked_add(d)?,
        ))
    }
}

#[inline]
fn leading(block: Block, mv: Move) -> Cell {
    if mv.is_negative() {
        block.first()
    } else {
        block.second()
    }
}

/// All four successors of `block`, in [`Move::EXPANSION_ORDER`].
pub fn neighbors(block: Block) -> [(Block, Move); 4] {
    Move::EXPANSION_ORDER.map(|mv| (tilt(block, mv), mv))
}

/// The successors of `block` that stay inside the `i32` coordinate range, in
/// [`Move::EXPANSION_ORDER`]. Matches [`neighbors`] away from the bounds.
pub fn successors(block: Block) -> impl Iterator<Item = (Block, Move)> {
    Move::EXPANSION_ORDER
        .into_iter()
        .filter_map(move |mv| checked_tilt(block, mv).map(|next| (next, mv)))
}
