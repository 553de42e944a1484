//! Core data structures for the emergence simulation.

pub mod mode;
pub mod particle;
pub mod shockwave;
pub mod snapshot;
