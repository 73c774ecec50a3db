use logos::Logos;
use serde::Serialize;

use crate::error::LexError;

/// The category of a [`Token`].
///
/// Operators are grouped by arity rather than spelled out one variant each;
/// the exact operator is carried in [`Token::text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// A run of decimal digits, such as `42`.
    Number,
    /// A `"`-delimited string literal. The token text excludes the quotes.
    String,
    /// A name such as `x` or `_total1`.
    Identifier,
    /// One of `+ - * / == != < > <= >=`.
    BinaryOperator,
    /// One of `!` or `~`. Prefix `-` is lexed as a binary operator.
    UnaryOperator,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `let`
    Let,
    /// `const`
    Const,
    /// `=`
    Equals,
    /// `;`
    SemiColon,
    /// Marks the end of the token stream. Always the last token, with empty
    /// text.
    EndOfFile,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Identifier => "identifier",
            Self::BinaryOperator => "binary operator",
            Self::UnaryOperator => "unary operator",
            Self::OpenParen => "'('",
            Self::CloseParen => "')'",
            Self::Let => "'let'",
            Self::Const => "'const'",
            Self::Equals => "'='",
            Self::SemiColon => "';'",
            Self::EndOfFile => "end of input",
        };
        write!(f, "{name}")
    }
}

/// A lexical token: its kind, its owned text and the line it starts on.
///
/// The text is copied out of the source, so tokens outlive the buffer they
/// were read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The token category.
    pub kind: TokenKind,
    /// The literal spelling, or the contents for string literals.
    pub text: String,
    /// 1-based source line.
    pub line: usize,
}

impl Token {
    /// Creates a token from its parts.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self { kind,
               text: text.into(),
               line }
    }

    /// Human readable description used in parse errors, e.g. `identifier 'x'`.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::EndOfFile => self.kind.to_string(),
            TokenKind::String => format!("{} \"{}\"", self.kind, self.text),
            TokenKind::Number
            | TokenKind::Identifier
            | TokenKind::BinaryOperator
            | TokenKind::UnaryOperator => format!("{} '{}'", self.kind, self.text),
            _ => self.kind.to_string(),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// Failure raised from inside a lexer callback.
///
/// `Unrecognized` is what logos reports on its own when no pattern matches;
/// the offending character is recovered from the slice afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
enum LexFailure {
    #[default]
    Unrecognized,
    UnterminatedString {
        line: usize,
    },
    UnterminatedComment {
        depth: usize,
        line:  usize,
    },
}

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(extras = LexerExtras)]
#[logos(error = LexFailure)]
enum RawToken {
    #[regex(r"[0-9]+")]
    Number,
    #[token("\"", lex_string)]
    String,
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("==")]
    #[token("!=")]
    #[token("<")]
    #[token(">")]
    #[token("<=")]
    #[token(">=")]
    BinaryOperator,
    #[token("!")]
    #[token("~")]
    UnaryOperator,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("let")]
    Let,
    #[token("const")]
    Const,
    #[token("=")]
    Equals,
    #[token(";")]
    SemiColon,
    #[token("//", line_comment)]
    LineComment,
    #[token("/*", block_comment)]
    BlockComment,
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    #[regex(r"[ \t\r]+", logos::skip)]
    Whitespace,
}

/// Consumes the rest of a string literal after its opening quote.
///
/// The literal runs up to the next `"`; there are no escape sequences.
fn lex_string(lex: &mut logos::Lexer<RawToken>) -> Result<(), LexFailure> {
    let start_line = lex.extras.line;
    let remainder = lex.remainder();

    match remainder.find('"') {
        Some(end) => {
            lex.extras.line += remainder[..end].matches('\n').count();
            lex.bump(end + 1);
            Ok(())
        },
        None => {
            lex.bump(remainder.len());
            Err(LexFailure::UnterminatedString { line: start_line })
        },
    }
}

/// Skips a line comment up to, but not including, the next newline.
fn line_comment(lex: &mut logos::Lexer<RawToken>) -> logos::Skip {
    let end = lex.remainder().find('\n').unwrap_or(lex.remainder().len());
    lex.bump(end);
    logos::Skip
}

/// Consumes a block comment after its opening `/*`, honouring nesting.
///
/// Each inner `/*` raises the depth and each `*/` lowers it; the comment ends
/// once the depth returns to zero.
fn block_comment(lex: &mut logos::Lexer<RawToken>) -> Result<(), LexFailure> {
    let start_line = lex.extras.line;
    let bytes = lex.remainder().as_bytes();
    let mut depth = 1usize;
    let mut newlines = 0usize;
    let mut pos = 0usize;

    while depth > 0 {
        match bytes.get(pos..pos + 2) {
            Some(b"/*") => {
                depth += 1;
                pos += 2;
            },
            Some(b"*/") => {
                depth -= 1;
                pos += 2;
            },
            Some(_) => {
                if bytes[pos] == b'\n' {
                    newlines += 1;
                }
                pos += 1;
            },
            None => {
                lex.extras.line += newlines;
                lex.bump(bytes.len());
                return Err(LexFailure::UnterminatedComment { depth,
                                                             line: start_line });
            },
        }
    }

    lex.extras.line += newlines;
    lex.bump(pos);
    Ok(())
}

/// Splits source text into tokens.
///
/// Whitespace and comments produce no tokens. The returned sequence is always
/// terminated by a single [`TokenKind::EndOfFile`] token with empty text.
///
/// # Errors
/// Returns a [`LexError`] for an unrecognized character, an unterminated
/// string literal or an unterminated block comment.
///
/// # Example
/// ```
/// use ember::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("let x = 10; /* a /* b */ c */").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Let,
///             TokenKind::Identifier,
///             TokenKind::Equals,
///             TokenKind::Number,
///             TokenKind::SemiColon,
///             TokenKind::EndOfFile]);
/// assert_eq!(tokens[1].text, "x");
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer_with_extras(source, LexerExtras::default());

    while let Some(result) = lexer.next() {
        let line = lexer.extras.line;
        let raw = match result {
            Ok(raw) => raw,
            Err(failure) => return Err(into_lex_error(failure, lexer.slice(), line)),
        };

        let kind = match raw {
            RawToken::Number => TokenKind::Number,
            RawToken::String => {
                let slice = lexer.slice();
                tokens.push(Token::new(TokenKind::String,
                                       &slice[1..slice.len() - 1],
                                       line - slice.matches('\n').count()));
                continue;
            },
            RawToken::Identifier => TokenKind::Identifier,
            RawToken::BinaryOperator => TokenKind::BinaryOperator,
            RawToken::UnaryOperator => TokenKind::UnaryOperator,
            RawToken::OpenParen => TokenKind::OpenParen,
            RawToken::CloseParen => TokenKind::CloseParen,
            RawToken::Let => TokenKind::Let,
            RawToken::Const => TokenKind::Const,
            RawToken::Equals => TokenKind::Equals,
            RawToken::SemiColon => TokenKind::SemiColon,
            RawToken::BlockComment
            | RawToken::LineComment
            | RawToken::NewLine
            | RawToken::Whitespace => continue,
        };

        tokens.push(Token::new(kind, lexer.slice(), line));
    }

    tokens.push(Token::new(TokenKind::EndOfFile, "", lexer.extras.line));
    tracing::trace!(count = tokens.len(), "tokenized source");

    Ok(tokens)
}

fn into_lex_error(failure: LexFailure, slice: &str, line: usize) -> LexError {
    match failure {
        LexFailure::Unrecognized => {
            LexError::UnrecognizedCharacter { character: slice.chars().next().unwrap_or_default(),
                                              line }
        },
        LexFailure::UnterminatedString { line } => LexError::UnterminatedString { line },
        LexFailure::UnterminatedComment { depth, line } => {
            LexError::UnterminatedComment { depth, line }
        },
    }
}
