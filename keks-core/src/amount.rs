//! Rounding and formatting of ingredient amounts.

/// Number of decimal places shopping-list totals are rounded to.
pub const DECIMALS: usize = 2;

/// Round `value` to `decimals` places, resolving exact ties to the even neighbour.
///
/// Rounding works on the exact binary value, so `round_to(0.125, 2)` is `0.12`
/// and `round_to(0.375, 2)` is `0.38`, while `2.675` (stored as `2.67499...`)
/// rounds down to `2.67`.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    // precision formatting rounds the exact expansion, ties to even
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

/// Format an amount for display, keeping a trailing `.0` on whole numbers
/// (e.g. `1500.0`, `0.12`).
pub fn format_amount(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{}.0", text)
    } else {
        text
    }
}
