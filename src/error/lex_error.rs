use thiserror::Error;

/// Represents all errors that can occur while tokenizing source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts no token of the language.
    #[error("Error on line {line}: Unrecognized character found in source: {character:?}.")]
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A string literal whose closing `"` never appears.
    #[error("Error on line {line}: String literal is not terminated.")]
    UnterminatedString {
        /// The source line where the literal starts.
        line: usize,
    },
    /// A block comment that is still open at the end of input.
    #[error("Error on line {line}: Unclosed multi-line comment at depth {depth}.")]
    UnterminatedComment {
        /// How many `/*` were still waiting for their `*/`.
        depth: usize,
        /// The source line where the outermost comment starts.
        line:  usize,
    },
}
