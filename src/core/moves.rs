use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::cell::Cell;

/// One of the four tilt directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Move {
    Up,
    Right,
    Down,
    Left,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid move {token:?} at position {index}")]
pub struct MoveParseError {
    pub index: usize,
    pub token: String,
}

impl Move {
    /// Declaration order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Right, Move::Down, Move::Left];

    /// Order in which a block's successors are generated during search.
    ///
    /// Only affects which of several equally short paths is returned.
    pub const EXPANSION_ORDER: [Move; 4] = [Move::Left, Move::Right, Move::Up, Move::Down];

    /// Unit step in this direction. Rows grow downwards.
    #[inline]
    pub const fn delta(self) -> Cell {
        match self {
            Move::Up => Cell::new(-1, 0),
            Move::Right => Cell::new(0, 1),
            Move::Down => Cell::new(1, 0),
            Move::Left => Cell::new(0, -1),
        }
    }

    #[inline]
    pub const fn opposite(self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Right => Move::Left,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
        }
    }

    /// True for `Left`/`Right`.
    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Move::Left | Move::Right)
    }

    /// True when the step decreases the row or column.
    #[inline]
    pub const fn is_negative(self) -> bool {
        matches!(self, Move::Up | Move::Left)
    }

    pub const fn letter(self) -> char {
        match self {
            Move::Up => 'U',
            Move::Right => 'R',
            Move::Down => 'D',
            Move::Left => 'L',
        }
    }

    pub fn from_letter(c: char) -> Option<Move> {
        match c.to_ascii_uppercase() {
            'U' => Some(Move::Up),
            'R' => Some(Move::Right),
            'D' => Some(Move::Down),
            'L' => Some(Move::Left),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Move::Up => "UP",
            Move::Right => "RIGHT",
            Move::Down => "DOWN",
            Move::Left => "LEFT",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Accepts a single letter (`u`, `R`, ...) or a full name (`up`, `RIGHT`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(m) = Move::from_letter(c) {
                return Ok(m);
            }
        }
        Move::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(t))
            .ok_or_else(|| MoveParseError {
                index: 0,
                token: t.to_string(),
            })
    }
}
