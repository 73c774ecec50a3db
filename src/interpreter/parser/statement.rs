use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a single statement.
///
/// A statement is either a variable declaration introduced by `let` or
/// `const`, or an expression used as a statement.
///
/// Grammar: `statement := declaration | expression`
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(statement) = parse_variable_declaration(tokens)? {
        return Ok(statement);
    }

    let line = tokens.peek().map_or(0, |token| token.line);
    let expr = parse_expression(tokens)?;

    Ok(Statement::Expression { expr, line })
}

/// Parses a variable declaration statement.
///
/// A declaration has the form `let <identifier> (= <expression>)?` or
/// `const <identifier> = <expression>`. A `let` without initializer declares
/// the variable as `null`.
///
/// If the next token is neither `let` nor `const`, this function returns
/// `Ok(None)` and does not consume any input.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the keyword is not followed by an identifier,
/// - a `const` has no initializer,
/// - the initializer is malformed.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let (is_const, line) = match tokens.peek() {
        Some(Token { kind: TokenKind::Let,
                     line,
                     .. }) => (false, *line),
        Some(Token { kind: TokenKind::Const,
                     line,
                     .. }) => (true, *line),
        _ => return Ok(None),
    };
    tokens.next();

    let name = match tokens.next() {
        Some(Token { kind: TokenKind::Identifier,
                     text,
                     .. }) => text.clone(),
        Some(token) => {
            return Err(ParseError::ExpectedIdentifier { found: token.describe(),
                                                        line:  token.line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line }),
    };

    let value = match tokens.peek() {
        Some(Token { kind: TokenKind::Equals,
                     .. }) => {
            tokens.next();
            Some(parse_expression(tokens)?)
        },
        _ if is_const => return Err(ParseError::ConstWithoutInitializer { name, line }),
        _ => None,
    };

    Ok(Some(Statement::VariableDeclaration { name,
                                             value,
                                             is_const,
                                             line }))
}
