use thiserror::Error;

/// Represents all errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a token that cannot appear at this position.
    #[error("Error on line {line}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// Description of the token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input while an operand or operator was still
    /// expected, as in `1 +`, `x =` or `let x =`.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error on line {line}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `let` or `const` was not followed by a name.
    #[error("Error on line {line}: Expected identifier name after let/const, found {found}.")]
    ExpectedIdentifier {
        /// Description of the token found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// `const` declaration without an initializer.
    #[error("Error on line {line}: Cannot declare constant '{name}' without a value.")]
    ConstWithoutInitializer {
        /// The name of the constant.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A literal value was too large to be represented safely.
    #[error("Error on line {line}: Literal is too large.")]
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
}
