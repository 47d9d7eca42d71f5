//! Division of two command-line operands.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DivideError {
    #[error("argument {position} cannot be converted to a number: {value:?}")]
    NotANumber { position: usize, value: String },

    #[error("cannot divide by zero")]
    DivisionByZero,
}

/// Parses operand number `position` (1-based, for error messages).
pub fn parse_operand(position: usize, text: &str) -> Result<f64, DivideError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| DivideError::NotANumber {
            position,
            value: text.to_string(),
        })
}

pub fn divide(numerator: f64, denominator: f64) -> Result<f64, DivideError> {
    if denominator == 0.0 {
        return Err(DivideError::DivisionByZero);
    }
    Ok(numerator / denominator)
}
