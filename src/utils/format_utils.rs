//! Number rendering utilities
//!
//! Helpers shared by the coordinate formatters and the WKT writer.

/// Most decimal places any output is rendered with
pub const MAX_DECIMALS: u32 = 15;

/// Rounds a value to a number of decimal places as `round(x * 10^d) / 10^d`
///
/// `decimals` is capped at [`MAX_DECIMALS`]. Negative zero is folded into
/// positive zero so it never renders as `-0`.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(MAX_DECIMALS) as i32);
    (value * factor).round() / factor + 0.0
}

/// Renders a value rounded to `decimals` places without trailing zeros
///
/// `round_trimmed(1.0, 2)` gives `"1"`, `round_trimmed(0.125, 2)` gives `"0.13"`.
pub fn round_trimmed(value: f64, decimals: u32) -> String {
    format!("{}", round_to(value, decimals))
}

/// Renders a value with a fixed number of decimals, or its shortest exact
/// representation when `decimals` is `None`
pub fn fixed(value: f64, decimals: Option<u32>) -> String {
    match decimals {
        Some(d) => format!("{:.*}", d.min(MAX_DECIMALS) as usize, round_to(value, d)),
        None => format!("{}", value + 0.0),
    }
}
