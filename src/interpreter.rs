/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST against a caller supplied [`scope::Scope`],
/// applying the type rules of every operator and resolving variables through
/// the scope chain.
///
/// # Responsibilities
/// - Evaluates statements and expressions, operands left before right.
/// - Dispatches binary operators on the operand type pair.
/// - Reports runtime errors such as unknown variables or unsupported operand
///   types.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of owned
/// tokens, each corresponding to a number, string, identifier, operator,
/// delimiter or keyword. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input text into tokens with kind, text and source line.
/// - Skips whitespace, line comments and nested block comments.
/// - Reports lexical errors for invalid or unterminated input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive descent parser with one function per precedence
/// level. It consumes the token sequence produced by the lexer and builds a
/// [`crate::ast::Program`].
pub mod parser;
/// Lexically nested variable frames.
pub mod scope;
/// The value module defines the runtime data types for evaluation.
///
/// Every value is a number, a bool, a string or `null`. This module also
/// decides how values are printed.
pub mod value;
