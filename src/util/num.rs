use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Most decimal places tried before falling back to fixed six-digit output.
pub const MAX_SHORT_DECIMALS: usize = 5;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT` in absolute
/// value.
///
/// ## Example
/// ```
/// use ember::util::num::{MAX_SAFE_U64_INT, i64_to_f64_checked};
///
/// let result = i64_to_f64_checked(42, "too big!");
/// assert_eq!(result.unwrap(), 42.0);
///
/// let big = MAX_SAFE_U64_INT as i64 + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// `2^63`, the first magnitude above the positive `i64` range.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Converts an integral `f64` to the `i64` with the same value.
///
/// Any whole number in the `i64` range is accepted, including those beyond
/// `MAX_SAFE_U64_INT`.
///
/// ## Errors
/// - `RuntimeError::RealIsFractional` for fractional values and NaN.
/// - `RuntimeError::IntegerOutOfRange` for infinities and whole numbers
///   outside the `i64` range.
///
/// ## Example
/// ```
/// use ember::{error::RuntimeError, util::num::f64_to_i64_checked};
///
/// assert_eq!(f64_to_i64_checked(-12.0, 1).unwrap(), -12);
/// assert_eq!(f64_to_i64_checked(9_007_199_254_740_992.0, 1).unwrap(), 1 << 53);
///
/// let err = f64_to_i64_checked(1.5, 123).unwrap_err();
/// assert!(matches!(err, RuntimeError::RealIsFractional { line: 123, .. }));
///
/// let err = f64_to_i64_checked(1e20, 5).unwrap_err();
/// assert!(matches!(err, RuntimeError::IntegerOutOfRange { line: 5, .. }));
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_checked(value: f64, line: usize) -> EvalResult<i64> {
    if value.is_nan() || (value.is_finite() && value.fract() != 0.0) {
        return Err(RuntimeError::RealIsFractional { value, line });
    }
    if !(-I64_BOUND..I64_BOUND).contains(&value) {
        return Err(RuntimeError::IntegerOutOfRange { value, line });
    }
    Ok(value as i64)
}

/// Formats a number with the fewest decimal places (zero through five) that
/// represent it exactly.
///
/// A value `v` is printed with `k` places when `v * 10^k` is a whole number.
/// Values that need more than [`MAX_SHORT_DECIMALS`] places, as well as
/// infinities and NaN, are printed with six fixed decimals.
///
/// ## Example
/// ```
/// use ember::util::num::format_number;
///
/// assert_eq!(format_number(11.0), "11");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(0.125), "0.125");
/// assert_eq!(format_number(1.0 / 3.0), "0.333333");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    let mut scale = 1.0_f64;
    for places in 0..=MAX_SHORT_DECIMALS {
        let scaled = value * scale;
        if scaled.is_finite() && scaled.fract() == 0.0 {
            return format!("{value:.places$}");
        }
        scale *= 10.0;
    }
    format!("{value:.6}")
}
