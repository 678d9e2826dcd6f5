//! Exhaustive enumeration of the reachable configuration graph.
//!
//! Unlike [`crate::search::bfs`], this never stops early: it labels every configuration
//! reachable from the standing start with its tilt distance. Useful for checking optimality of
//! returned paths and for puzzle statistics.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use crate::core::block::Block;
use crate::core::cell::Cell;
use crate::rules::tilt::successors;
use crate::search::bfs::FANOUT;
use crate::search::resources::{ResourceLimits, ResourceTracker};
use crate::search::SearchError;
use crate::terrain::Terrain;

/// Tilt distance from the block standing on `start` to every reachable configuration.
///
/// The start configuration itself is included at distance 0, whether or not its cell is
/// traversable.
pub fn distances<T: Terrain + ?Sized>(
    start: Cell,
    terrain: &T,
    limits: ResourceLimits,
) -> Result<FxHashMap<Block, u32>, SearchError> {
    let mut tracker = ResourceTracker::new(limits);
    let origin = Block::standing(start);

    let mut dist: FxHashMap<Block, u32> = FxHashMap::default();
    let mut q: VecDeque<Block> = VecDeque::new();

    dist.insert(origin, 0);
    q.push_back(origin);
    tracker.bump_states("distance_enqueue", 1)?;

    while let Some(b) = q.pop_front() {
        tracker.bump_steps("distance_expand", 1)?;
        let d = dist[&b];
        tracker.try_reserve_map("distance_enqueue", "distance_map", &mut dist, FANOUT)?;
        tracker.try_reserve_queue("distance_enqueue", "frontier", &mut q, FANOUT)?;
        for (nxt, _) in successors(b) {
            if dist.contains_key(&nxt) || !terrain.allows(&nxt) {
                continue;
            }
            tracker.bump_states("distance_enqueue", 1)?;
            dist.insert(nxt, d + 1);
            q.push_back(nxt);
        }
    }

    Ok(dist)
}

/// Length of a shortest path from standing on `start` to standing on `goal`, if any.
pub fn shortest_len<T: Terrain + ?Sized>(
    start: Cell,
    goal: Cell,
    terrain: &T,
    limits: ResourceLimits,
) -> Result<Option<u32>, SearchError> {
    let dist = distances(start, terrain, limits)?;
    Ok(dist.get(&Block::standing(goal)).copied())
}

/// Summary of a reachable configuration graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reachability {
    pub configurations: usize,
    pub standing: usize,
    /// Largest distance from the start over all reachable configurations.
    pub eccentricity: u32,
}

pub fn reachability<T: Terrain + ?Sized>(
    start: Cell,
    terrain: &T,
    limits: ResourceLimits,
) -> Result<Reachability, SearchError> {
    let dist = distances(start, terrain, limits)?;
    Ok(Reachability {
        configurations: dist.len(),
        standing: dist.keys().filter(|b| b.is_standing()).count(),
        eccentricity: dist.values().copied().max().unwrap_or(0),
    })
}
