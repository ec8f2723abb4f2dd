// Label formatting helpers

/// Whole units covered so far: `floor(distance / divisor)`.
pub fn distance_units(distance: f64, divisor: f64) -> u64 {
    if distance.is_nan() || divisor.is_nan() || distance <= 0.0 || divisor <= 0.0 {
        return 0;
    }
    (distance / divisor).floor() as u64
}

pub fn format_distance(distance: f64, divisor: f64, unit: &str) -> String {
    format!("{}{}", distance_units(distance, divisor), unit)
}
