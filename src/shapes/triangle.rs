//! Equilateral triangle.

/// `sqrt(3) / 4 * s^2`
pub fn triangle_area(side_length: f64) -> f64 {
    3.0_f64.sqrt() / 4.0 * side_length * side_length
}

pub fn triangle_perimeter(side_length: f64) -> f64 {
    3.0 * side_length
}
