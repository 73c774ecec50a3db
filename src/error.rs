use thiserror::Error;

/// Lexing errors.
///
/// Raised while turning raw source text into tokens: characters outside the
/// language, string literals that never close, and block comments left open.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// tokens. Parse errors include unexpected tokens, missing delimiters,
/// malformed declarations and literals that are too large.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unknown
/// names, constant violations, redeclarations, unsupported operand types and
/// failed numeric conversions.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error produced while running a piece of source text.
///
/// Each pipeline stage reports its own error type; this enum lets callers such
/// as the REPL handle all of them through a single `?`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The source text could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token stream could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
