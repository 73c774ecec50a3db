use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::{Context, EvalResult},
                  value::core::Value},
    util::num::f64_to_i64_checked,
};

impl Context<'_> {
    /// Evaluates a unary operation on an already evaluated operand.
    ///
    /// # Semantics
    /// - `!`: `true` for `0`, `false` and `null`; on strings, `true` for a
    ///   non-empty string.
    /// - `~`: bitwise NOT of an integral number, logical NOT of a bool.
    /// - `-`: negation of a number; a bool negates as `0` or `1`.
    ///
    /// # Errors
    /// - `UnsupportedUnaryOperand` if the operator is not defined for the
    ///   operand type.
    /// - `RealIsFractional` if `~` is applied to a fractional number.
    /// - `IntegerOutOfRange` if `~` is applied to a number outside the 64-bit
    ///   integer range.
    ///
    /// # Example
    /// ```
    /// use ember::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let inverted = Context::eval_unary(UnaryOperator::BitNot, &Value::Number(5.0), 1);
    /// assert_eq!(inverted.unwrap(), Value::Number(-6.0));
    ///
    /// let negated = Context::eval_unary(UnaryOperator::Negate, &Value::Bool(true), 1);
    /// assert_eq!(negated.unwrap(), Value::Number(-1.0));
    /// ```
    pub fn eval_unary(op: UnaryOperator, operand: &Value, line: usize) -> EvalResult<Value> {
        match (op, operand) {
            (UnaryOperator::Not, Value::Number(n)) => Ok(Value::Bool(*n == 0.0)),
            (UnaryOperator::Not | UnaryOperator::BitNot, Value::Bool(b)) => Ok(Value::Bool(!b)),
            (UnaryOperator::Not, Value::Null) => Ok(Value::Bool(true)),
            (UnaryOperator::Not, Value::Str(s)) => Ok(Value::Bool(!s.is_empty())),

            (UnaryOperator::BitNot, Value::Number(n)) => {
                #[allow(clippy::cast_precision_loss)]
                let inverted = !f64_to_i64_checked(*n, line)? as f64;
                Ok(Value::Number(inverted))
            },

            (UnaryOperator::Negate, Value::Number(n)) => Ok(Value::Number(-n)),
            (UnaryOperator::Negate, Value::Bool(b)) => {
                Ok(Value::Number(0.0 - f64::from(u8::from(*b))))
            },

            (op, operand) => Err(RuntimeError::UnsupportedUnaryOperand { op: op.to_string(),
                                                                         operand: operand.type_name(),
                                                                         line }),
        }
    }
}
