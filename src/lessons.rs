//! Subjects for the unit-testing lesson.
//!
//! The tests below show the usual shapes of a unit test: a plain assertion,
//! a table of cases, and an approximate float comparison. Property-based
//! tests for the diffusion stepper live in `tests/diffusion_properties.rs`.

/// Naive recursive Fibonacci: `fib(0) = 0`, `fib(1) = 1`.
///
/// Exponential time; kept recursive on purpose as a test subject.
/// Returns `None` when the result does not fit in a `u64` (`n > 93`).
pub fn recursive_fibonacci(n: u32) -> Option<u64> {
    if n > MAX_FIBONACCI_INPUT {
        return None;
    }
    if n <= 1 {
        return Some(u64::from(n));
    }
    recursive_fibonacci(n - 1)?.checked_add(recursive_fibonacci(n - 2)?)
}

/// Largest `n` whose Fibonacci number fits in a `u64`.
pub const MAX_FIBONACCI_INPUT: u32 = 93;

pub fn to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}
