/// Numeric conversion and formatting helpers.
///
/// The language has a single numeric type backed by `f64`, while literals,
/// bitwise operators and string repetition work on integers. This module
/// provides the lossless conversions between the two representations and the
/// formatter used to print numbers back to the user.
///
/// Every conversion returns a `Result`, which is `Ok` if the conversion is
/// exact and an error if the value is out of range or fractional.
pub mod num;
