use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, parse_expression},
    },
    util::num::i64_to_f64_checked,
};

/// Parses a unary expression.
///
/// Supports the prefix operators `!` (logical not), `~` (bitwise not) and `-`
/// (negation). Unary operators are right-associative, so an input like `!-x`
/// is parsed as `!( -x )`.
///
/// Grammar:
/// ```text
///     unary := ("!" | "~" | "-") unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(token) = tokens.peek()
       && matches!(token.kind, TokenKind::UnaryOperator | TokenKind::BinaryOperator)
       && let Some(op) = UnaryOperator::from_symbol(&token.text)
    {
        let line = token.line;
        tokens.next();
        let operand = parse_unary(tokens)?;
        return Ok(Expr::UnaryExpr { op,
                                    operand: Box::new(operand),
                                    line });
    }

    parse_primary(tokens)
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | STRING
///              | IDENTIFIER
///              | "(" expression ")"
/// ```
///
/// # Errors
/// - `UnexpectedEndOfInput` when the input ends where an operand is required,
///   as in `1 +` or `let x =`.
/// - `UnexpectedToken` for any other token that cannot start an operand.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = tokens.next()
                      .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;
    let line = token.line;

    match token.kind {
        TokenKind::Number => parse_numeric_literal(&token.text, line),
        TokenKind::String => Ok(Expr::StringLiteral { value: token.text.clone(),
                                                      line }),
        TokenKind::Identifier => Ok(Expr::Identifier { name: token.text.clone(),
                                                       line }),
        TokenKind::OpenParen => parse_grouping(tokens, line),
        TokenKind::EndOfFile => Err(ParseError::UnexpectedEndOfInput { line }),
        _ => Err(ParseError::UnexpectedToken { token: token.describe(),
                                               line }),
    }
}

/// Converts the digits of a `Number` token into a numeric literal.
///
/// # Errors
/// `LiteralTooLarge` if the value cannot be represented exactly as a number.
fn parse_numeric_literal(digits: &str, line: usize) -> ParseResult<Expr> {
    let value = digits.parse::<i64>()
                      .map_err(|_| ParseError::LiteralTooLarge { line })?;
    i64_to_f64_checked(value, ParseError::LiteralTooLarge { line })?;

    Ok(Expr::NumericLiteral { value, line })
}

/// Parses the rest of a parenthesized expression after its `(`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some(Token { kind: TokenKind::CloseParen,
                     .. }) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { line }),
    }
}
