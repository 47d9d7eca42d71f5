use thiserror::Error;

/// Largest stability ratio the explicit scheme accepts.
pub const MAX_STABLE_RATIO: f64 = 0.5;

/// Errors raised by the explicit diffusion stepper.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DiffusionError {
    /// `r = alpha * dt / dx^2` is above [`MAX_STABLE_RATIO`].
    ///
    /// The forward-time centered-space scheme oscillates and diverges for
    /// such ratios, so the run is rejected as a whole.
    #[error("stability ratio r = {ratio} exceeds 0.5 (reduce dt or alpha, or coarsen dx)")]
    StabilityViolation { ratio: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_ratio() {
        let err = DiffusionError::StabilityViolation { ratio: 0.6 };
        let msg = err.to_string();
        assert!(msg.contains("0.6"), "msg = {msg}");
        assert!(msg.contains("exceeds 0.5"), "msg = {msg}");
    }
}
