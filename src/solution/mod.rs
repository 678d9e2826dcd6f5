//! Checking, rendering and reporting move sequences.
//!
//! A search returns bare [`Move`]s. This module replays them against a terrain, converts them
//! to and from the compact letter form (`"RRDL"`), and wraps a finished search in a
//! serializable [`SolutionReport`] for the CLI.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::block::Block;
use crate::core::cell::Cell;
use crate::core::moves::{Move, MoveParseError};
use crate::puzzle::Puzzle;
use crate::search::bfs::{Outcome, SearchResult, SearchStats};
use crate::terrain::Terrain;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReplayError {
    /// Move number `step` (0-based) put part of the block on a non-traversable cell.
    #[error("move {step} ({mv}) leaves the terrain: {block}")]
    Illegal { step: usize, mv: Move, block: Block },
}

/// Apply `moves` to the block standing on `start`.
///
/// Returns every configuration visited, starting with the initial one, or the first step that
/// leaves the terrain.
pub fn replay<T: Terrain + ?Sized>(
    start: Cell,
    moves: &[Move],
    terrain: &T,
) -> Result<Vec<Block>, ReplayError> {
    let mut path = Vec::with_capacity(moves.len() + 1);
    let mut cur = Block::standing(start);
    path.push(cur);
    for (step, &mv) in moves.iter().enumerate() {
        cur = cur.tilt(mv);
        if !terrain.allows(&cur) {
            return Err(ReplayError::Illegal {
                step,
                mv,
                block: cur,
            });
        }
        path.push(cur);
    }
    Ok(path)
}

/// True iff `moves` is legal on `terrain` and ends standing on `goal`.
pub fn is_solution<T: Terrain + ?Sized>(
    start: Cell,
    goal: Cell,
    moves: &[Move],
    terrain: &T,
) -> bool {
    match replay(start, moves, terrain) {
        Ok(path) => path.last().is_some_and(|b| b.stands_on(goal)),
        Err(_) => false,
    }
}

/// Letter form, e.g. `[Right, Right, Down]` -> `"RRD"`.
pub fn format_moves(moves: &[Move]) -> String {
    moves.iter().map(|m| m.letter()).collect()
}

/// Parse a move list.
///
/// Accepts either packed letters (`"rrDL"`) or whitespace/comma separated tokens, where each
/// token is a letter or a direction name (`"RIGHT, right, D"`).
pub fn parse_moves(s: &str) -> Result<Vec<Move>, MoveParseError> {
    let s = s.trim();
    let tokens: Vec<&str> = s
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.len() == 1 && tokens[0].chars().all(|c| Move::from_letter(c).is_some()) {
        return tokens[0]
            .chars()
            .enumerate()
            .map(|(index, c)| {
                Move::from_letter(c).ok_or_else(|| MoveParseError {
                    index,
                    token: c.to_string(),
                })
            })
            .collect();
    }

    tokens
        .iter()
        .enumerate()
        .map(|(index, t)| {
            t.parse::<Move>().map_err(|e| MoveParseError {
                index,
                token: e.token,
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolutionStatus {
    AlreadyAtGoal,
    Solved,
    Unreachable,
}

/// What the CLI prints for a solved (or unsolvable) puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionReport {
    pub puzzle: String,
    pub start: Cell,
    pub goal: Cell,
    pub status: SolutionStatus,
    pub moves: Vec<Move>,
    /// Letter form of `moves`.
    pub notation: String,
    pub length: usize,
    pub stats: SearchStats,
}

impl SolutionReport {
    pub fn new(puzzle: &Puzzle, result: &SearchResult) -> Self {
        let status = match result.outcome {
            Outcome::AlreadyAtGoal => SolutionStatus::AlreadyAtGoal,
            Outcome::Solved { .. } => SolutionStatus::Solved,
            Outcome::Unreachable => SolutionStatus::Unreachable,
        };
        let moves = result.outcome.moves().to_vec();
        Self {
            puzzle: puzzle.name.clone(),
            start: puzzle.start,
            goal: puzzle.goal,
            status,
            notation: format_moves(&moves),
            length: moves.len(),
            moves,
            stats: result.stats,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}
