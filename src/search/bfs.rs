//! Breadth-first shortest-path search.
//!
//! The frontier is a FIFO queue seeded with the block standing on `start`. Configurations are
//! dequeued level by level, so the first standing-on-goal configuration dequeued is reached by a
//! minimum number of tilts. Each configuration is admitted to the frontier at most once; its
//! first admission is the one the FIFO order would have expanded first anyway, so the returned
//! path is unchanged by the deduplication.

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::block::Block;
use crate::core::cell::Cell;
use crate::core::moves::Move;
use crate::rules::tilt::successors;
use crate::search::resources::{ResourceLimits, ResourceTracker};
use crate::search::SearchError;
use crate::terrain::Terrain;

/// Successors per configuration; reserved up front for each expansion.
pub(crate) const FANOUT: usize = 4;

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// The start cell already is the goal cell.
    AlreadyAtGoal,
    Solved { moves: Vec<Move> },
    /// The frontier drained without reaching the goal.
    Unreachable,
}

impl Outcome {
    /// The move sequence; empty unless `Solved`.
    pub fn moves(&self) -> &[Move] {
        match self {
            Outcome::Solved { moves } => moves,
            Outcome::AlreadyAtGoal | Outcome::Unreachable => &[],
        }
    }

    pub fn into_moves(self) -> Vec<Move> {
        match self {
            Outcome::Solved { moves } => moves,
            Outcome::AlreadyAtGoal | Outcome::Unreachable => Vec::new(),
        }
    }

    #[inline]
    pub fn is_reachable(&self) -> bool {
        !matches!(self, Outcome::Unreachable)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Configurations dequeued (including the goal, if found).
    pub expanded: u64,
    /// Configurations admitted to the frontier (including the start).
    pub enqueued: u64,
    pub peak_frontier: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub outcome: Outcome,
    pub stats: SearchStats,
}

/// One search session: start, goal and the terrain to respect.
///
/// Every call to [`Solver::search`] builds its own frontier, explored set and parent links, so
/// a `Solver` can be reused and shared freely.
#[derive(Debug)]
pub struct Solver<'t, T: Terrain + ?Sized> {
    start: Cell,
    goal: Cell,
    terrain: &'t T,
    limits: ResourceLimits,
}

impl<T: Terrain + ?Sized> Clone for Solver<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Terrain + ?Sized> Copy for Solver<'_, T> {}

impl<'t, T: Terrain + ?Sized> Solver<'t, T> {
    /// `start` and `goal` are expected to be traversable; this is not checked.
    pub fn new(start: Cell, goal: Cell, terrain: &'t T) -> Self {
        Self {
            start,
            goal,
            terrain,
            limits: ResourceLimits::unbounded(),
        }
    }

    pub fn with_limits(mut self, limits: ResourceLimits) -> Self {
        self.limits = limits;
        self
    }

    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    #[inline]
    pub fn is_done(&self, block: &Block) -> bool {
        block.stands_on(self.goal)
    }

    /// Shortest move sequence from `start` to `goal`.
    ///
    /// Empty both when no move is needed and when the goal is unreachable; use
    /// [`Solver::search`] to tell these apart. A search that hits its budget also yields an
    /// empty sequence.
    pub fn solve(&self) -> Vec<Move> {
        match self.search() {
            Ok(res) => res.outcome.into_moves(),
            Err(e) => {
                warn!(start = %self.start, goal = %self.goal, "search aborted: {e}");
                Vec::new()
            }
        }
    }

    pub fn search(&self) -> Result<SearchResult, SearchError> {
        let mut tracker = ResourceTracker::new(self.limits);
        let origin = Block::standing(self.start);

        let mut seen: FxHashSet<Block> = FxHashSet::default();
        let mut parent: FxHashMap<Block, (Block, Move)> = FxHashMap::default();
        let mut frontier: VecDeque<Block> = VecDeque::new();

        seen.insert(origin);
        frontier.push_back(origin);
        tracker.bump_states("bfs_enqueue", 1)?;

        let mut peak_frontier = frontier.len();

        debug!(start = %self.start, goal = %self.goal, "bfs start");

        while let Some(block) = frontier.pop_front() {
            tracker.bump_steps("bfs_expand", 1)?;

            if self.is_done(&block) {
                let moves = reconstruct(&parent, block);
                let stats = collect_stats(&tracker, peak_frontier);
                debug!(
                    len = moves.len(),
                    expanded = stats.expanded,
                    enqueued = stats.enqueued,
                    "bfs reached goal"
                );
                let outcome = if moves.is_empty() {
                    Outcome::AlreadyAtGoal
                } else {
                    Outcome::Solved { moves }
                };
                return Ok(SearchResult { outcome, stats });
            }

            tracker.try_reserve_set("bfs_enqueue", "explored_set", &mut seen, FANOUT)?;
            tracker.try_reserve_map("bfs_enqueue", "parent_links", &mut parent, FANOUT)?;
            tracker.try_reserve_queue("bfs_enqueue", "frontier", &mut frontier, FANOUT)?;

            for (next, mv) in successors(block) {
                if seen.contains(&next) {
                    continue;
                }
                if !self.terrain.allows(&next) {
                    continue;
                }

                tracker.bump_states("bfs_enqueue", 1)?;

                trace!(from = %block, to = %next, %mv, "enqueue");
                seen.insert(next);
                parent.insert(next, (block, mv));
                frontier.push_back(next);
            }

            peak_frontier = peak_frontier.max(frontier.len());
        }

        let stats = collect_stats(&tracker, peak_frontier);
        debug!(
            expanded = stats.expanded,
            enqueued = stats.enqueued,
            "bfs exhausted frontier"
        );
        Ok(SearchResult {
            outcome: Outcome::Unreachable,
            stats,
        })
    }
}

/// Shortest move sequence taking a block standing on `start` to standing on `goal`.
///
/// Returns an empty sequence if `start == goal` or if the goal cannot be reached.
pub fn solve<T: Terrain + ?Sized>(start: Cell, goal: Cell, terrain: &T) -> Vec<Move> {
    Solver::new(start, goal, terrain).solve()
}

fn reconstruct(parent: &FxHashMap<Block, (Block, Move)>, end: Block) -> Vec<Move> {
    let mut moves = Vec::new();
    let mut cur = end;
    while let Some(&(prev, mv)) = parent.get(&cur) {
        moves.push(mv);
        cur = prev;
    }
    moves.reverse();
    moves
}

fn collect_stats(tracker: &ResourceTracker, peak_frontier: usize) -> SearchStats {
    let counts = tracker.counts();
    SearchStats {
        expanded: counts.runtime_steps,
        enqueued: counts.states,
        peak_frontier,
    }
}
