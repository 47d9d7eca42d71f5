use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::sim::diffusion::error::{DiffusionError, MAX_STABLE_RATIO};
use crate::sim::diffusion::params::DiffusionParams;

/// Stability ratio `r = alpha * dt / dx^2` of the explicit scheme.
pub fn stability_ratio(dx: f64, dt: f64, alpha: f64) -> f64 {
    alpha * dt / (dx * dx)
}

/// Advance a temperature profile by one explicit (FTCS) time step.
///
/// Interior nodes are updated with
/// `u'[i] = r*u[i+1] + (1 - 2r)*u[i] + r*u[i-1]`, the first and last node
/// are copied unchanged (fixed-temperature boundaries). The input slice is
/// never modified; a new profile is returned.
///
/// # Errors
///
/// [`DiffusionError::StabilityViolation`] if `r > 0.5`. A NaN `r` (NaN
/// `alpha` or `dt`) is not rejected and yields NaN interior values.
///
/// Profiles shorter than 3 nodes have no interior and are returned as-is.
pub fn advance_one_step(
    profile: &[f64],
    dx: f64,
    dt: f64,
    alpha: f64,
) -> Result<Vec<f64>, DiffusionError> {
    let r = stability_ratio(dx, dt, alpha);
    if r > MAX_STABLE_RATIO {
        return Err(DiffusionError::StabilityViolation { ratio: r });
    }

    let n = profile.len();
    if n < 3 {
        return Ok(profile.to_vec());
    }

    let mut next = Vec::with_capacity(n);
    next.push(profile[0]);
    for i in 1..n - 1 {
        next.push(r * profile[i + 1] + (1.0 - 2.0 * r) * profile[i] + r * profile[i - 1]);
    }
    next.push(profile[n - 1]);

    Ok(next)
}

/// Numerical solution of the 1D heat equation with fixed boundaries.
///
/// `initial` holds the initial temperature distribution including both
/// boundary values. `nt` is the number of time levels (the run takes
/// `nt - 1` steps), `nx` the number of nodes, `alpha` the thermal
/// diffusivity, `length` the domain length and `t_max` the end time.
///
/// Either all steps complete or the first failing stability check is
/// returned; no partial profile escapes.
pub fn run(
    initial: &[f64],
    nt: usize,
    nx: usize,
    alpha: f64,
    length: f64,
    t_max: f64,
) -> Result<Vec<f64>, DiffusionError> {
    let dx = length / nx.saturating_sub(1) as f64;
    let dt = t_max / nt.saturating_sub(1) as f64;
    let steps = nt.saturating_sub(1);
    debug!(
        dx,
        dt,
        steps,
        r = stability_ratio(dx, dt, alpha),
        "starting explicit diffusion run"
    );

    let mut u = initial.to_vec();
    for step in 0..steps {
        u = advance_one_step(&u, dx, dt, alpha)
            .inspect_err(|err| warn!(step, %err, "explicit diffusion run rejected"))?;
        trace!(step, "diffusion step done");
    }
    Ok(u)
}

/// Profile recorded at a given step of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffusionSnapshot {
    /// Number of steps taken when the snapshot was recorded.
    pub step: usize,
    /// Simulated time in s.
    pub time_s: f64,
    /// Node temperatures, boundaries included.
    pub temperatures: Vec<f64>,
}

/// Stateful driver around [`advance_one_step`].
///
/// Owns the current profile and swaps in each freshly computed one, so a
/// caller can step, inspect, and step again. The stability ratio is checked
/// at construction and again by every step.
#[derive(Debug, Clone)]
pub struct ExplicitStepper {
    temperatures: Vec<f64>,
    dx: f64,
    dt: f64,
    alpha: f64,
    steps_taken: usize,
}

impl ExplicitStepper {
    pub fn new(initial: Vec<f64>, dx: f64, dt: f64, alpha: f64) -> Result<Self, DiffusionError> {
        let ratio = stability_ratio(dx, dt, alpha);
        if ratio > MAX_STABLE_RATIO {
            return Err(DiffusionError::StabilityViolation { ratio });
        }
        Ok(Self::unchecked(initial, dx, dt, alpha))
    }

    /// Build a stepper for `params`, checked the same way as
    /// [`DiffusionParams::validate`]: with no steps to take (`nt <= 1`) the
    /// ratio is not evaluated, and any later [`step`](Self::step) still
    /// rejects it.
    pub fn from_params(initial: Vec<f64>, params: &DiffusionParams) -> Result<Self, DiffusionError> {
        params.validate()?;
        Ok(Self::unchecked(initial, params.dx(), params.dt(), params.alpha))
    }

    fn unchecked(initial: Vec<f64>, dx: f64, dt: f64, alpha: f64) -> Self {
        Self {
            temperatures: initial,
            dx,
            dt,
            alpha,
            steps_taken: 0,
        }
    }

    /// Advance one time step and return the new profile.
    pub fn step(&mut self) -> Result<&[f64], DiffusionError> {
        self.temperatures = advance_one_step(&self.temperatures, self.dx, self.dt, self.alpha)?;
        self.steps_taken += 1;
        Ok(&self.temperatures)
    }

    /// Access current node temperatures.
    pub fn temperatures(&self) -> &[f64] {
        &self.temperatures
    }

    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    /// Simulated time in s.
    pub fn elapsed(&self) -> f64 {
        if self.steps_taken == 0 {
            return 0.0;
        }
        self.steps_taken as f64 * self.dt
    }

    pub fn stability_ratio(&self) -> f64 {
        stability_ratio(self.dx, self.dt, self.alpha)
    }

    pub fn snapshot(&self) -> DiffusionSnapshot {
        DiffusionSnapshot {
            step: self.steps_taken,
            time_s: self.elapsed(),
            temperatures: self.temperatures.clone(),
        }
    }

    /// Consume the stepper and return the current profile.
    pub fn into_temperatures(self) -> Vec<f64> {
        self.temperatures
    }
}

/// Run like [`run`] and also record snapshots.
///
/// The initial profile, every `every`-th step and the final step are
/// recorded; `every == 0` records only the initial and final profiles. The
/// final profile is the last snapshot's `temperatures`. With `nt <= 1` the
/// result is the single step-0 snapshot, just as [`run`] returns the initial
/// profile.
pub fn run_recorded(
    initial: &[f64],
    params: &DiffusionParams,
    every: usize,
) -> Result<Vec<DiffusionSnapshot>, DiffusionError> {
    let mut stepper = ExplicitStepper::from_params(initial.to_vec(), params)
        .inspect_err(|err| warn!(%err, "explicit diffusion run rejected"))?;
    let steps = params.num_steps();
    debug!(
        dx = params.dx(),
        dt = params.dt(),
        steps,
        every,
        "starting recorded diffusion run"
    );

    let mut snapshots = vec![stepper.snapshot()];
    for _ in 0..steps {
        stepper.step()?;
        let k = stepper.steps_taken();
        if k == steps || (every > 0 && k % every == 0) {
            snapshots.push(stepper.snapshot());
        }
    }
    Ok(snapshots)
}
