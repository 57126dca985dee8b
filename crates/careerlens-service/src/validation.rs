//! Request validation. Every rejection is `CareerError::MalformedInput`.

use careerlens_core::constants::{MAX_YEAR, MIN_YEAR};
use careerlens_core::errors::{CareerError, CareerResult};

pub fn year(year: Option<i32>) -> CareerResult<Option<i32>> {
    match year {
        Some(y) if !(MIN_YEAR..=MAX_YEAR).contains(&y) => Err(CareerError::malformed(
            "year",
            format!("{y} is outside {MIN_YEAR}..={MAX_YEAR}"),
        )),
        other => Ok(other),
    }
}

/// A required name or question, trimmed.
pub fn required_text<'a>(field: &str, value: &'a str) -> CareerResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CareerError::malformed(field, "must not be empty"));
    }
    Ok(trimmed)
}

/// An optional filter; blank counts as absent.
pub fn optional_text(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub fn tuition(value: f64) -> CareerResult<f64> {
    if !value.is_finite() {
        return Err(CareerError::malformed("tuition_total", "must be a finite number"));
    }
    if value < 0.0 {
        return Err(CareerError::malformed("tuition_total", "must not be negative"));
    }
    Ok(value)
}

pub fn program_years(years: u32) -> CareerResult<u32> {
    if years == 0 {
        return Err(CareerError::malformed("years", "must be at least 1"));
    }
    Ok(years)
}

pub fn top_k(k: usize, max: usize) -> CareerResult<usize> {
    if k == 0 || k > max {
        return Err(CareerError::malformed("top_k", format!("must be in 1..={max}")));
    }
    Ok(k)
}
