//! Shortest tilt sequences for a 1x1x2 block rolling across a grid terrain.
//!
//! The block either stands on one cell or lies across two adjacent cells. Tipping it over in one
//! of four directions moves it according to fixed geometric rules ([`rules::tilt`]); a
//! breadth-first search ([`search::bfs`]) finds the fewest tilts from standing on the start cell
//! to standing on the goal cell, never letting any part of the block leave the terrain.
//!
//! ```
//! use rolling_block::core::cell::Cell;
//! use rolling_block::core::moves::Move;
//! use rolling_block::search::bfs::solve;
//!
//! let terrain = |c: Cell| (0..3).contains(&c.row) && (0..4).contains(&c.col);
//! let moves = solve(Cell::new(0, 0), Cell::new(0, 3), &terrain);
//! assert_eq!(moves, vec![Move::Right, Move::Right]);
//! ```

pub mod config;
pub mod core;
pub mod logging;
pub mod puzzle;
pub mod puzzles;
pub mod rules;
pub mod search;
pub mod solution;
pub mod terrain;
