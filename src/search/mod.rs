//! Shortest-path search over block configurations.

pub mod bfs;
pub mod distance;
pub mod resources;

use thiserror::Error;

use crate::search::resources::ResourceCounts;

#[derive(Debug, Error)]
/// Structured errors returned by search routines.
pub enum SearchError {
    /// The puzzle is internally inconsistent (e.g. start on a void cell).
    #[error("invalid puzzle: {reason}")]
    InvalidPuzzle { reason: String },
    /// A configured resource limit was exceeded.
    #[error(
        "limit exceeded at {stage}: {metric} (limit={limit}, observed={observed}); \
         counts(states={}, runtime_steps={})",
        .counts.states,
        .counts.runtime_steps
    )]
    LimitExceeded {
        stage: &'static str,
        metric: &'static str,
        limit: u64,
        observed: u64,
        counts: ResourceCounts,
    },
    /// A `try_reserve` allocation failed for a large structure.
    #[error(
        "allocation failed at {stage} for {structure}; counts(states={}, runtime_steps={})",
        .counts.states,
        .counts.runtime_steps
    )]
    AllocationFailed {
        stage: &'static str,
        structure: &'static str,
        counts: ResourceCounts,
    },
}
