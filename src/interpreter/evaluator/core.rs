use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{scope::Scope, value::core::Value},
    util::num::i64_to_f64_checked,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// The context borrows the [`Scope`] it evaluates against, so the caller
/// decides how long bindings live. A REPL keeps one global scope and wraps it
/// in a fresh context for every line.
///
/// ## Usage
/// ```
/// use ember::{
///     ast::{Expr, Program, Statement},
///     interpreter::{evaluator::core::Context, scope::Scope, value::core::Value},
/// };
///
/// let mut scope = Scope::global();
/// let program = Program { body: vec![Statement::Expression { expr: Expr::NumericLiteral { value: 7,
///                                                                                           line:  1, },
///                                                             line: 1, }], };
///
/// let value = Context::new(&mut scope).eval_program(&program).unwrap();
/// assert_eq!(value, Value::Number(7.0));
/// ```
pub struct Context<'s> {
    /// The innermost frame of this scope receives new declarations.
    pub scope: &'s mut Scope,
}

impl<'s> Context<'s> {
    /// Creates a context evaluating against `scope`.
    #[must_use]
    pub const fn new(scope: &'s mut Scope) -> Self {
        Self { scope }
    }

    /// Evaluates every statement of `program` in order.
    ///
    /// # Returns
    /// The value of the last statement, or `Value::Null` for an empty program.
    pub fn eval_program(&mut self, program: &Program) -> EvalResult<Value> {
        let mut last = Value::Null;
        for statement in &program.body {
            last = self.eval_statement(statement)?;
        }
        Ok(last)
    }

    /// Evaluates a single statement.
    ///
    /// A declaration evaluates its initializer (or uses `null` when there is
    /// none) and binds the result in the innermost frame. A declaration
    /// without initializer is never constant.
    ///
    /// # Returns
    /// The value of the expression, or a copy of the declared value.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Value> {
        match statement {
            Statement::Expression { expr, .. } => self.eval(expr),
            Statement::VariableDeclaration { name,
                                             value,
                                             is_const,
                                             line, } => {
                let (value, is_const) = match value {
                    Some(expr) => (self.eval(expr)?, *is_const),
                    None => (Value::Null, false),
                };
                self.scope.declare(name, value, is_const, *line)
            },
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Operands are
    /// always evaluated left before right, and both are evaluated before the
    /// operator is applied.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::NumericLiteral { value, line } => {
                Ok(Value::Number(i64_to_f64_checked(*value,
                                                    RuntimeError::LiteralTooLarge { line: *line })?))
            },
            Expr::StringLiteral { value, .. } => Ok(Value::Str(value.clone())),
            Expr::Identifier { name, line } => self.scope.get(name, *line),
            Expr::UnaryExpr { op, operand, line } => {
                let operand = self.eval(operand)?;
                Self::eval_unary(*op, &operand, *line)
            },
            Expr::BinaryExpr { left,
                               op,
                               right,
                               line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
            Expr::AssignmentExpr { target, value, line } => {
                self.eval_assignment(target, value, *line)
            },
        }
    }

    /// Evaluates `target = value`.
    ///
    /// The target must be a plain identifier; it is checked before the value
    /// is evaluated.
    ///
    /// # Errors
    /// - `InvalidAssignmentTarget` if the target is not an identifier.
    /// - `UnknownVariable` / `ConstantReassignment` from the scope.
    fn eval_assignment(&mut self, target: &Expr, value: &Expr, line: usize) -> EvalResult<Value> {
        let Expr::Identifier { name, .. } = target else {
            return Err(RuntimeError::InvalidAssignmentTarget { line });
        };

        let value = self.eval(value)?;
        self.scope.set(name, value, line)
    }
}
