//! Area and perimeter of regular shapes, dispatched by name.

pub mod square;
pub mod triangle;

pub use square::{square_area, square_perimeter};
pub use triangle::{triangle_area, triangle_perimeter};

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("unknown shape: {0} (expected \"square\" or \"triangle\")")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Square,
    /// Equilateral.
    Triangle,
}

impl Shape {
    pub fn area(self, side_length: f64) -> f64 {
        match self {
            Shape::Square => square_area(side_length),
            Shape::Triangle => triangle_area(side_length),
        }
    }

    pub fn perimeter(self, side_length: f64) -> f64 {
        match self {
            Shape::Square => square_perimeter(side_length),
            Shape::Triangle => triangle_perimeter(side_length),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Shape::Square => "square",
            Shape::Triangle => "triangle",
        }
    }
}

impl FromStr for Shape {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "square" => Ok(Shape::Square),
            "triangle" => Ok(Shape::Triangle),
            _ => Err(ShapeError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Area of the shape called `shape_name`.
pub fn area(shape_name: &str, side_length: f64) -> Result<f64, ShapeError> {
    Ok(shape_name.parse::<Shape>()?.area(side_length))
}

/// Perimeter of the shape called `shape_name`.
pub fn perimeter(shape_name: &str, side_length: f64) -> Result<f64, ShapeError> {
    Ok(shape_name.parse::<Shape>()?.perimeter(side_length))
}
