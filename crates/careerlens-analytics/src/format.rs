//! Human-readable number formatting for summary strings.

/// Currency symbol used in narrative text.
pub const CURRENCY: &str = "₹";

/// Whole number with comma thousands separators: `1234567` → `"1,234,567"`.
pub fn thousands(value: f64) -> String {
    let rounded = careerlens_core::sanitize::finite_or_zero(value).round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Amount in currency: `₹1,234`.
pub fn money(value: f64) -> String {
    format!("{CURRENCY}{}", thousands(value))
}
