/// Binary dispatch by operand type pair.
pub mod core;

/// Arithmetic and comparison between two numbers.
pub mod scalar;

/// Equality and ordering helpers, including booleans compared against
/// numbers.
pub mod comparison;

/// Concatenation, equality and repetition of strings.
pub mod string;
