/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: f64 = 9_007_199_254_740_991.0;

/// Truncates an `f64` toward zero and converts it to `i64` when the result
/// is exactly representable.
///
/// ## Returns
/// - `Some(i64)`: The truncated value if it is finite and within the safe
///   integer range.
/// - `None`: For NaN, infinities, or magnitudes beyond `MAX_SAFE_INT`.
///
/// ## Example
/// ```
/// use tuplet::util::num::f64_to_i64_trunc;
///
/// assert_eq!(f64_to_i64_trunc(3.9), Some(3));
/// assert_eq!(f64_to_i64_trunc(-3.9), Some(-3));
/// assert_eq!(f64_to_i64_trunc(f64::INFINITY), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn f64_to_i64_trunc(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let truncated = value.trunc();
    if truncated.abs() > MAX_SAFE_INT {
        return None;
    }
    Some(truncated as i64)
}

/// Converts an `f64` to a repetition count.
///
/// The value is truncated toward zero; negative or non-finite values give
/// a count of zero, which matches the "negative count means empty"
/// repetition rule.
///
/// ## Example
/// ```
/// use tuplet::util::num::f64_to_count;
///
/// assert_eq!(f64_to_count(2.9), 2);
/// assert_eq!(f64_to_count(-1.0), 0);
/// assert_eq!(f64_to_count(f64::NEG_INFINITY), 0);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub fn f64_to_count(value: f64) -> usize {
    match f64_to_i64_trunc(value) {
        Some(n) if n > 0 => n as usize,
        _ => 0,
    }
}

/// Converts a length to `f64`.
///
/// Collection lengths are bounded far below `2^53` in practice; the value
/// is clamped to the exactly-representable range for safety.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn usize_to_f64(value: usize) -> f64 {
    (value as f64).min(MAX_SAFE_INT)
}
