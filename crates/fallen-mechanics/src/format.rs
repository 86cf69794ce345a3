//! Fixed-point rendering of sheet numbers.

/// Render `value` with `decimals` digits after the point, rounding ties away
/// from zero (`2.5` renders as `"3"` at zero decimals).
pub fn fixed(value: f64, decimals: usize) -> String {
    let scale = 10f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    let rounded = (value * scale).round() / scale;
    format!("{rounded:.decimals$}")
}
