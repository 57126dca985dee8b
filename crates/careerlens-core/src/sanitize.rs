//! Numeric sanitization. Every float leaving the analytics layer passes
//! through here so results always serialize.

/// Replace NaN and ±∞ with 0.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Round half away from zero to `places` decimals, after sanitizing.
pub fn round_to(value: f64, places: i32) -> f64 {
    let value = finite_or_zero(value);
    let factor = 10f64.powi(places);
    finite_or_zero((value * factor).round() / factor)
}
