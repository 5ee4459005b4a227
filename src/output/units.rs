//! Unit auto-scaling and significant-digit rounding for time values.

/// Scales a non-negative seconds value into the largest legible unit.
///
/// Returns the scaled value and its unit label: hours above one hour,
/// minutes above one minute, then seconds down through `ms`, `µs` and `ns`
/// by order of magnitude. Zero (and any non-positive input) stays in
/// seconds, unscaled.
pub fn scale_unit(seconds: f64) -> (f64, &'static str) {
    if seconds > 3600.0 {
        return (seconds / 3600.0, "h");
    }
    if seconds > 60.0 {
        return (seconds / 60.0, "min");
    }

    // Leading zeros after the decimal point pick the metric submultiple.
    let magnitude = if seconds > 0.0 {
        (-seconds.log10()).floor() as i32
    } else {
        0
    };

    if magnitude <= 0 {
        (seconds, "s")
    } else if magnitude <= 3 {
        (seconds * 1e3, "ms")
    } else if magnitude <= 6 {
        (seconds * 1e6, "µs")
    } else {
        (seconds * 1e9, "ns")
    }
}

/// Rounds `x` to `precision` significant digits.
///
/// Values at or below zero fall back to rounding at `precision` decimal
/// places instead of failing on the logarithm. Values with more integer
/// digits than `precision` round into the integer part (e.g. 2777.8 becomes
/// 2780 at precision 3).
pub fn round_significant(x: f64, precision: usize) -> f64 {
    let decimals = if x > 0.0 {
        precision as i32 - x.log10().ceil() as i32
    } else {
        precision as i32
    };

    if decimals == 0 {
        x.round()
    } else {
        let scale = 10f64.powi(decimals);
        (x * scale).round() / scale
    }
}
