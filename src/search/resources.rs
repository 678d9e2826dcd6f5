//! Budgets and allocation guards for search routines.
//!
//! The plain shortest-path contract is unbounded, but terrain predicates can describe an
//! infinite playable region. Callers that cannot rule that out opt into [`ResourceLimits`]; the
//! tracker turns an exhausted budget or a failed `try_reserve` into a [`SearchError`].

use std::collections::VecDeque;
use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::search::SearchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Search budgets.
///
/// - `max_states`: configurations admitted to the frontier
/// - `max_runtime_steps`: configurations dequeued and expanded
pub struct ResourceLimits {
    pub max_states: u64,
    pub max_runtime_steps: u64,
}

impl ResourceLimits {
    pub const fn unbounded() -> Self {
        Self {
            max_states: u64::MAX,
            max_runtime_steps: u64::MAX,
        }
    }
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_states: 2_000_000,
            max_runtime_steps: 2_000_000,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Running counters tracked during a search.
pub struct ResourceCounts {
    pub states: u64,
    pub runtime_steps: u64,
}

#[derive(Debug, Clone)]
pub struct ResourceTracker {
    limits: ResourceLimits,
    counts: ResourceCounts,
}

impl ResourceTracker {
    #[inline]
    pub fn new(limits: ResourceLimits) -> Self {
        Self {
            limits,
            counts: ResourceCounts::default(),
        }
    }

    #[inline]
    pub fn counts(&self) -> ResourceCounts {
        self.counts
    }

    #[inline]
    pub fn bump_states(&mut self, stage: &'static str, delta: u64) -> Result<(), SearchError> {
        let limit = self.limits.max_states;
        self.bump(stage, "states", delta, limit, |c| &mut c.states)
    }

    #[inline]
    pub fn bump_steps(&mut self, stage: &'static str, delta: u64) -> Result<(), SearchError> {
        let limit = self.limits.max_runtime_steps;
        self.bump(stage, "runtime_steps", delta, limit, |c| &mut c.runtime_steps)
    }

    fn bump(
        &mut self,
        stage: &'static str,
        metric: &'static str,
        delta: u64,
        limit: u64,
        field: impl FnOnce(&mut ResourceCounts) -> &mut u64,
    ) -> Result<(), SearchError> {
        let observed = {
            let v = field(&mut self.counts);
            *v = v.saturating_add(delta);
            *v
        };

        if observed > limit {
            return Err(SearchError::LimitExceeded {
                stage,
                metric,
                limit,
                observed,
                counts: self.counts,
            });
        }

        Ok(())
    }

    pub fn try_reserve_queue<T>(
        &self,
        stage: &'static str,
        structure: &'static str,
        q: &mut VecDeque<T>,
        additional: usize,
    ) -> Result<(), SearchError> {
        q.try_reserve(additional)
            .map_err(|_| SearchError::AllocationFailed {
                stage,
                structure,
                counts: self.counts,
            })
    }

    pub fn try_reserve_set<K>(
        &self,
        stage: &'static str,
        structure: &'static str,
        set: &mut FxHashSet<K>,
        additional: usize,
    ) -> Result<(), SearchError>
    where
        K: Hash + Eq,
    {
        set.try_reserve(additional)
            .map_err(|_| SearchError::AllocationFailed {
                stage,
                structure,
                counts: self.counts,
            })
    }

    pub fn try_reserve_map<K, V>(
        &self,
        stage: &'static str,
        structure: &'static str,
        map: &mut FxHashMap<K, V>,
        additional: usize,
    ) -> Result<(), SearchError>
    where
        K: Hash + Eq,
    {
        map.try_reserve(additional)
            .map_err(|_| SearchError::AllocationFailed {
                stage,
                structure,
                counts: self.counts,
            })
    }
}
