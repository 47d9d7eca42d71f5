//! File I/O for diffusion runs.
//!
//! Parameters, profiles and snapshot series are stored as JSON.

pub mod json;

pub use json::{read_params, read_profile, write_params, write_profile, write_snapshots};
