pub fn square_area(side_length: f64) -> f64 {
    side_length * side_length
}

pub fn square_perimeter(side_length: f64) -> f64 {
    4.0 * side_length
}
