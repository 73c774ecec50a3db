/// Entry points of the parser.
///
/// Defines the parse result type, whole-program parsing and the top of the
/// expression precedence ladder (assignment).
pub mod core;

/// Binary operator parsing.
///
/// Implements the left-associative comparison, additive and multiplicative
/// precedence levels.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix operators, literals, identifiers and parenthesized
/// expressions.
pub mod unary;

/// Statement parsing.
///
/// Implements `let`/`const` declarations and expression statements.
pub mod statement;
