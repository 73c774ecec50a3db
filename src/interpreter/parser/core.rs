use std::iter::Peekable;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{binary::parse_comparison, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole token sequence into a [`Program`].
///
/// Statements are parsed one after another until the end-of-file token. Any
/// number of semicolons before, between or after statements is skipped.
///
/// Grammar: `program := ";"* (statement ";"*)*`
///
/// # Errors
/// Returns the first `ParseError` encountered.
///
/// # Example
/// ```
/// use ember::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let tokens = tokenize("let x = 1;;; x + 2;").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.body.len(), 2);
/// ```
pub fn parse_program(tokens: &[Token]) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();
    let mut body = Vec::new();

    loop {
        while let Some(Token { kind: TokenKind::SemiColon,
                               .. }) = iter.peek()
        {
            iter.next();
        }

        match iter.peek() {
            None
            | Some(Token { kind: TokenKind::EndOfFile,
                           .. }) => break,
            Some(_) => body.push(parse_statement(&mut iter)?),
        }
    }

    tracing::debug!(statements = body.len(), "parsed program");
    Ok(Program { body })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, assignment, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := assignment`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_assignment(tokens)
}

/// Parses an assignment.
///
/// Assignment is right-associative: `a = b = 1` parses as `a = (b = 1)`. Any
/// expression is accepted as the target here; evaluation rejects targets that
/// are not identifiers.
///
/// Grammar: `assignment := comparison ("=" assignment)?`
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let target = parse_comparison(tokens)?;

    if let Some(Token { kind: TokenKind::Equals,
                        line,
                        .. }) = tokens.peek()
    {
        let line = *line;
        tokens.next();
        let value = parse_assignment(tokens)?;
        return Ok(Expr::AssignmentExpr { target: Box::new(target),
                                         value: Box::new(value),
                                         line });
    }

    Ok(target)
}
