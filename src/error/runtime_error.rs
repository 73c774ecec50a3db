use thiserror::Error;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// Tried to use a name that no enclosing frame declares.
    #[error("Error on line {line}: Cannot resolve variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to declare a name twice in the same frame.
    #[error("Error on line {line}: Cannot redeclare already declared variable '{name}'.")]
    VariableRedeclaration {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to reassign a name declared with `const`.
    #[error("Error on line {line}: Reassignment to constant variable '{name}'.")]
    ConstantReassignment {
        /// The name of the constant.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The left side of `=` is not a plain identifier.
    #[error("Error on line {line}: Cannot assign value to non-identifier.")]
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A binary operator is not defined for the operand type pair.
    #[error("Error on line {line}: Unsupported operand types for '{op}': {left} and {right}.")]
    UnsupportedOperands {
        /// The operator symbol.
        op:    String,
        /// Type name of the left operand.
        left:  &'static str,
        /// Type name of the right operand.
        right: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A unary operator is not defined for the operand type.
    #[error("Error on line {line}: Unsupported operand type for unary '{op}': {operand}.")]
    UnsupportedUnaryOperand {
        /// The operator symbol.
        op:      String,
        /// Type name of the operand.
        operand: &'static str,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Tried to use a fractional number where an integer was required.
    #[error("Error on line {line}: Value {value} is not an integer.")]
    RealIsFractional {
        /// The offending value.
        value: f64,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A whole number outside the range of a 64-bit integer was used where an
    /// integer was required.
    #[error("Error on line {line}: Value {value} is out of the integer range.")]
    IntegerOutOfRange {
        /// The offending value.
        value: f64,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An integer literal was too large to be represented safely.
    #[error("Error on line {line}: Literal is too large.")]
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The result did not fit in memory.
    #[error("Error on line {line}: Memory allocation failed while building {what}.")]
    AllocationFailed {
        /// What was being allocated.
        what: &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
}
