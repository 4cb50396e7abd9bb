//! Small scalar helpers shared by the vector and network code.

/// Quotient of the euclidean division `dividend / divisor`, rounded down.
///
/// The remainder is `dividend % divisor`.
pub fn euc_div(dividend: f64, divisor: f64) -> f64 {
    (dividend / divisor).floor()
}

/// Keep `value` inside `[min, max]`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Build a rounding function keeping `precision` significant digits.
///
/// A precision of zero is treated as one.
pub fn to_precision(precision: usize) -> impl Fn(f64) -> f64 {
    let digits = precision.max(1) - 1;
    move |n| {
        if n == 0.0 || !n.is_finite() {
            return n;
        }
        format!("{:.*e}", digits, n).parse().unwrap_or(n)
    }
}

/// Linearly map `value` from `[start_min, start_max]` onto `[end_min, end_max]`.
pub fn to_range(value: f64, start_min: f64, start_max: f64, end_min: f64, end_max: f64) -> f64 {
    (value - start_min) / (start_max - start_min) * (end_max - end_min) + end_min
}
