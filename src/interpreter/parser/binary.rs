use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token is a `BinaryOperator` token,
/// otherwise `None`.
///
/// # Example
/// ```
/// use ember::{
///     ast::BinaryOperator,
///     interpreter::{
///         lexer::{Token, TokenKind},
///         parser::binary::token_to_binary_operator,
///     },
/// };
///
/// let plus = Token::new(TokenKind::BinaryOperator, "+", 1);
/// assert_eq!(token_to_binary_operator(&plus), Some(BinaryOperator::Add));
///
/// let bang = Token::new(TokenKind::UnaryOperator, "!", 1);
/// assert_eq!(token_to_binary_operator(&bang), None);
/// ```
#[must_use]
pub fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token.kind {
        TokenKind::BinaryOperator => BinaryOperator::from_symbol(&token.text),
        _ => None,
    }
}

/// Determines whether a binary operator is a comparison.
#[must_use]
pub const fn is_comparison_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Equal
             | BinaryOperator::NotEqual
             | BinaryOperator::Less
             | BinaryOperator::Greater
             | BinaryOperator::LessEqual
             | BinaryOperator::GreaterEqual)
}

/// Parses one left-associative precedence level.
///
/// `operand` parses the next-higher level and `accepts` selects the operators
/// that belong to this one.
fn parse_left_assoc<'a, I>(tokens: &mut Peekable<I>,
                           operand: fn(&mut Peekable<I>) -> ParseResult<Expr>,
                           accepts: fn(BinaryOperator) -> bool)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = operand(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && accepts(op)
        {
            let line = token.line;
            tokens.next();
            let right = operand(tokens)?;
            left = Expr::BinaryExpr { left: Box::new(left),
                                      op,
                                      right: Box::new(right),
                                      line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses relational and equality operators.
///
/// Handles `==`, `!=`, `<`, `>`, `<=` and `>=`, all left-associative and of
/// equal precedence.
///
/// The rule is: `comparison := additive (("==" | "!=" | "<" | ">" | "<=" |
/// ">=") additive)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_assoc(tokens, parse_additive, is_comparison_op)
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_assoc(tokens, parse_multiplicative, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    })
}

/// Parses multiplication and division expressions.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_assoc(tokens, parse_unary, |op| {
        matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    })
}
