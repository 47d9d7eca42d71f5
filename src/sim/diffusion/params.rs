use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use crate::sim::diffusion::error::{DiffusionError, MAX_STABLE_RATIO};
use crate::sim::diffusion::stepper;

/// Parameters of a single explicit diffusion run.
///
/// Grid spacing and time step are derived, never stored:
/// `dx = length / (nx - 1)`, `dt = t_max / (nt - 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiffusionParams {
    /// Thermal diffusivity in m^2/s (homogeneous material).
    pub alpha: f64,
    /// Domain length in m.
    pub length: f64,
    /// End time in s.
    pub t_max: f64,
    /// Number of spatial nodes, boundaries included.
    pub nx: usize,
    /// Number of time levels, initial one included. A run takes `nt - 1` steps.
    pub nt: usize,
}

impl Default for DiffusionParams {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            length: 1.0,
            t_max: 0.1,
            nx: 21,
            nt: 501,
        }
    }
}

impl DiffusionParams {
    pub fn new(alpha: f64, length: f64, t_max: f64, nx: usize, nt: usize) -> Self {
        Self {
            alpha,
            length,
            t_max,
            nx,
            nt,
        }
    }

    /// Node spacing in m. Infinite when `nx < 2`.
    pub fn dx(&self) -> f64 {
        self.length / self.nx.saturating_sub(1) as f64
    }

    /// Time step in s. Infinite when `nt < 2`.
    pub fn dt(&self) -> f64 {
        self.t_max / self.nt.saturating_sub(1) as f64
    }

    /// Number of update steps a run performs.
    pub fn num_steps(&self) -> usize {
        self.nt.saturating_sub(1)
    }

    /// Stability ratio `r = alpha * dt / dx^2`.
    pub fn stability_ratio(&self) -> f64 {
        stepper::stability_ratio(self.dx(), self.dt(), self.alpha)
    }

    /// True if `r <= 0.5`. The boundary value itself is stable.
    pub fn is_stable(&self) -> bool {
        self.stability_ratio() <= MAX_STABLE_RATIO
    }

    /// Largest time step the stability check accepts for this grid.
    pub fn max_stable_dt(&self) -> f64 {
        let dx = self.dx();
        MAX_STABLE_RATIO * dx * dx / self.alpha
    }

    /// Smallest `nt` that keeps the run stable for the current `t_max`.
    pub fn min_stable_nt(&self) -> usize {
        let steps = (self.t_max / self.max_stable_dt()).ceil().max(1.0) as usize;
        let candidate = steps + 1;
        // Guard against round-off putting r a hair above 0.5.
        if (Self { nt: candidate, ..*self }).is_stable() {
            candidate
        } else {
            candidate + 1
        }
    }

    /// Rejects parameter sets whose stability ratio exceeds 0.5.
    ///
    /// This is the same check every step performs; calling it up front lets
    /// a caller fail before allocating anything. A run with no steps
    /// (`nt <= 1`) never evaluates the ratio and is always accepted.
    pub fn validate(&self) -> Result<(), DiffusionError> {
        if self.num_steps() == 0 {
            return Ok(());
        }
        let ratio = self.stability_ratio();
        if ratio > MAX_STABLE_RATIO {
            return Err(DiffusionError::StabilityViolation { ratio });
        }
        Ok(())
    }

    /// Sanity checks for parameters coming from outside the program
    /// (files, command line). The stepper itself does not enforce these.
    pub fn check_ranges(&self) -> Result<()> {
        ensure!(
            self.alpha.is_finite() && self.alpha > 0.0,
            "alpha must be positive, got {}",
            self.alpha
        );
        ensure!(
            self.length.is_finite() && self.length > 0.0,
            "length must be positive, got {}",
            self.length
        );
        ensure!(
            self.t_max.is_finite() && self.t_max > 0.0,
            "t_max must be positive, got {}",
            self.t_max
        );
        ensure!(self.nx >= 3, "nx must be at least 3, got {}", self.nx);
        ensure!(self.nt >= 2, "nt must be at least 2, got {}", self.nt);
        Ok(())
    }

    /// Run the explicit scheme from `initial` with these parameters.
    pub fn run(&self, initial: &[f64]) -> Result<Vec<f64>, DiffusionError> {
        stepper::run(
            initial,
            self.nt,
            self.nx,
            self.alpha,
            self.length,
            self.t_max,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_derived_spacing() {
        let p = DiffusionParams::new(0.4, 2.0, 1.0, 3, 2);
        assert_relative_eq!(p.dx(), 1.0);
        assert_relative_eq!(p.dt(), 1.0);
        assert_relative_eq!(p.stability_ratio(), 0.4);
        assert_eq!(p.num_steps(), 1);
        assert!(p.is_stable());
    }

    #[test]
    fn test_default_is_stable_and_sane() {
        let p = DiffusionParams::default();
        assert!(p.is_stable(), "r = {}", p.stability_ratio());
        assert!(p.check_ranges().is_ok());
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_validate_boundary_ratio() {
        // r == 0.5 exactly: dx = 1, dt = 1, alpha = 0.5
        let at_limit = DiffusionParams::new(0.5, 2.0, 1.0, 3, 2);
        assert_eq!(at_limit.stability_ratio(), 0.5);
        assert!(at_limit.validate().is_ok());

        let above = DiffusionParams::new(0.6, 2.0, 1.0, 3, 2);
        assert!(matches!(
            above.validate(),
            Err(DiffusionError::StabilityViolation { .. })
        ));
    }

    #[test]
    fn test_single_level_validates_like_run() {
        // nt = 1 => dt = inf, but no step is ever taken
        let p = DiffusionParams::new(0.4, 2.0, 1.0, 3, 1);
        let u = [0.0, 100.0, 0.0];
        assert_eq!(p.num_steps(), 0);
        assert!(p.validate().is_ok());
        assert_eq!(p.run(&u).unwrap(), u.to_vec());
    }

    #[test]
    fn test_max_stable_dt() {
        let p = DiffusionParams::new(0.25, 2.0, 1.0, 3, 2);
        // dx = 1 => dt_max = 0.5 * 1 / 0.25 = 2
        assert_relative_eq!(p.max_stable_dt(), 2.0);
    }

    #[test]
    fn test_min_stable_nt() {
        // dx = 0.1, alpha = 1 => dt_max = 0.005; t_max = 0.1 => 20 steps, nt = 21
        let p = DiffusionParams::new(1.0, 1.0, 0.1, 11, 2);
        assert!(!p.is_stable());
        let nt = p.min_stable_nt();
        assert!((21..=22).contains(&nt), "nt = {nt}");
        let fixed = DiffusionParams { nt, ..p };
        assert!(fixed.is_stable(), "r = {}", fixed.stability_ratio());
        let one_less = DiffusionParams { nt: nt - 1, ..p };
        assert!(nt == 22 || !one_less.is_stable());
    }

    #[test]
    fn test_check_ranges_rejects_bad_values() {
        let base = DiffusionParams::default();
        assert!(DiffusionParams { alpha: 0.0, ..base }.check_ranges().is_err());
        assert!(DiffusionParams { length: -1.0, ..base }.check_ranges().is_err());
        assert!(DiffusionParams { t_max: f64::NAN, ..base }.check_ranges().is_err());
        assert!(DiffusionParams { nx: 2, ..base }.check_ranges().is_err());
        assert!(DiffusionParams { nt: 1, ..base }.check_ranges().is_err());
    }

    #[test]
    fn test_serde_field_names() -> anyhow::Result<()> {
        let json = r#"{"alpha":0.4,"length":2.0,"t_max":1.0,"nx":3,"nt":2}"#;
        let p: DiffusionParams = serde_json::from_str(json)?;
        assert_eq!(p, DiffusionParams::new(0.4, 2.0, 1.0, 3, 2));
        Ok(())
    }
}
