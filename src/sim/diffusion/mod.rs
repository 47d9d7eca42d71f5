//! Explicit finite-difference solver for the 1D heat equation.
//!
//! Solves `dT/dt = alpha * d2T/dx2` on `[0, L]` with fixed temperatures at
//! both ends, using forward-time centered-space (FTCS) stepping.
//!
//! # Architecture
//!
//! ```text
//! DiffusionParams ──► dx(), dt() ──► advance_one_step() x (nt - 1) ──► final profile
//!                                        │
//!                              ExplicitStepper / run_recorded() ──► DiffusionSnapshot
//! ```
//!
//! Every step checks `r = alpha * dt / dx^2 <= 0.5`. A violation aborts the
//! whole run with [`DiffusionError::StabilityViolation`]; no partial profile
//! is returned.

pub mod error;
pub mod params;
pub mod stepper;

pub use error::{DiffusionError, MAX_STABLE_RATIO};
pub use params::DiffusionParams;
pub use stepper::{
    DiffusionSnapshot, ExplicitStepper, advance_one_step, run, run_recorded, stability_ratio,
};

/// Profile with zero-temperature boundaries and `peak` at the center node.
///
/// Handy initial condition for demos: the spike spreads out and decays.
pub fn spike_profile(nx: usize, peak: f64) -> Vec<f64> {
    let mut profile = vec![0.0; nx];
    if nx >= 3 {
        profile[nx / 2] = peak;
    }
    profile
}
