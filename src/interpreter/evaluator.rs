/// Core evaluation logic and the evaluation context.
///
/// Contains the main evaluation engine, statement and program evaluation, and
/// assignment handling.
pub mod core;

/// Unary operator evaluation logic.
///
/// Implements logical not, bitwise not and negation.
pub mod unary;

/// Binary operator evaluation logic.
///
/// Dispatches on the operand type pair and implements arithmetic,
/// comparisons, string concatenation and string repetition.
pub mod binary;
