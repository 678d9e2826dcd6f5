//! Block geometry: how a 1x1x2 block moves when tipped over.

pub mod tilt;
