//! Value types shared by every layer of the solver.
//!
//! - [`cell`]: integer grid positions, also used as offsets.
//! - [`moves`]: the four tilt directions.
//! - [`block`]: the canonical one-or-two-cell block configuration.

pub mod block;
pub mod cell;
pub mod moves;
