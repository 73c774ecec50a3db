//! # ember
//!
//! ember is an interpreter for a small, dynamically typed expression language.
//! Source text is tokenized, parsed into an abstract syntax tree and evaluated
//! against a lexically scoped variable environment that persists between
//! evaluations.
//!
//! ```
//! use ember::{interpreter::{scope::Scope, value::core::Value}, run_source};
//!
//! let mut scope = Scope::global();
//! run_source("let x = 10;", &mut scope).unwrap();
//!
//! assert_eq!(run_source("x + 1", &mut scope).unwrap(), Value::Number(11.0));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::Context, lexer::tokenize, parser::core::parse_program, scope::Scope,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of source code as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Every stage has its own error enum; [`error::Error`] wraps all of them so
/// that the whole pipeline can be driven with `?`. Each error carries the line
/// it occurred on and renders as `Error on line N: ...`.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, scoping, value representations
/// and evaluation.
pub mod interpreter;
/// The interactive read-eval-print loop.
pub mod repl;
/// General utilities for safe numeric conversion and number formatting.
pub mod util;

/// Runs `source` against `scope` and returns the value of its last statement.
///
/// The source is tokenized, parsed and evaluated in that order; the first
/// failing stage ends the run. Declarations made before a runtime error stay
/// in the scope.
///
/// # Errors
/// Returns the [`Error`] of the stage that failed.
///
/// # Examples
/// ```
/// use ember::{error::Error, interpreter::scope::Scope, run_source};
///
/// let mut scope = Scope::global();
///
/// let res = run_source("let result = 2 + 2", &mut scope);
/// assert!(res.is_ok());
///
/// // 'x' is not defined
/// let res = run_source("let y = x + 1", &mut scope);
/// assert!(matches!(res, Err(Error::Runtime(_))));
/// ```
pub fn run_source(source: &str, scope: &mut Scope) -> Result<Value, Error> {
    let tokens = tokenize(source)?;
    let program = parse_program(&tokens)?;
    tracing::debug!(statements = program.body.len(), "evaluating program");

    Ok(Context::new(scope).eval_program(&program)?)
}
