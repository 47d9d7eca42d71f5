//! Small design-pattern lessons.
//!
//! - [`injection`]: passing collaborators in instead of hard-coding them.
//! - [`generators`]: lazy sequences built from iterator adapters.

pub mod generators;
pub mod injection;

pub use generators::{Interleaved, interleaved, powers_of_two, sequential, squares};
pub use injection::{
    Euclidean, Manhattan, Norm, Pipeline, Ring, points_in_ring, points_in_ring_with,
};
