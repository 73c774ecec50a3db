use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::{Context, EvalResult},
                  value::core::Value},
};

impl Context<'_> {
    /// Evaluates a binary operation on two already evaluated operands.
    ///
    /// `null` on either side makes the whole operation `null`. Otherwise the
    /// operation is dispatched on the type pair:
    ///
    /// | left   | right  | operators                                  |
    /// |--------|--------|--------------------------------------------|
    /// | number | number | all                                        |
    /// | bool   | bool   | `==`, `!=`                                 |
    /// | number | bool   | comparisons, the bool counts as `0` or `1` |
    /// | string | string | `+`, `==`, `!=`                            |
    /// | number | string | `*` repeats the string                     |
    ///
    /// Any other pair compares unequal under `==` and `!=`.
    ///
    /// # Errors
    /// `UnsupportedOperands` for operators outside the table above, plus the
    /// errors of string repetition.
    ///
    /// # Example
    /// ```
    /// use ember::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let sum = Context::eval_binary(BinaryOperator::Add,
    ///                                &Value::Number(2.0),
    ///                                &Value::Number(3.0),
    ///                                1);
    /// assert_eq!(sum.unwrap(), Value::Number(5.0));
    ///
    /// let null = Context::eval_binary(BinaryOperator::Mul, &Value::Null, &Value::from("a"), 1);
    /// assert_eq!(null.unwrap(), Value::Null);
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use Value::{Bool, Number, Str};

        if left.is_null() || right.is_null() {
            return Ok(Value::Null);
        }

        match (left, right) {
            (Number(a), Number(b)) => Ok(Self::eval_scalar_binary(op, *a, *b)),
            (Bool(a), Bool(b)) => Self::eval_bool_binary(op, *a, *b, line),
            (Number(n), Bool(b)) => {
                Self::eval_mixed_comparison(op, *n, Self::bool_to_number(*b))
                    .map(Bool)
                    .ok_or_else(|| unsupported(op, left, right, line))
            },
            (Bool(b), Number(n)) => {
                Self::eval_mixed_comparison(op, Self::bool_to_number(*b), *n)
                    .map(Bool)
                    .ok_or_else(|| unsupported(op, left, right, line))
            },
            (Str(a), Str(b)) => Self::eval_string_binary(op, a, b, line),
            (Number(n), Str(s)) | (Str(s), Number(n)) if op == BinaryOperator::Mul => {
                Self::repeat_string(s, *n, line)
            },
            _ => Self::eval_mismatched(op, left, right, line),
        }
    }

    /// Handles a type pair with no dedicated rules.
    ///
    /// Values of different types are never equal.
    fn eval_mismatched(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        Self::equality_op_result(op, false).map(Value::Bool)
                                           .ok_or_else(|| unsupported(op, left, right, line))
    }
}

/// Builds the error for an operator that is not defined on the given operand
/// types.
pub(crate) fn unsupported(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          line: usize)
                          -> RuntimeError {
    RuntimeError::UnsupportedOperands { op: op.to_string(),
                                        left: left.type_name(),
                                        right: right.type_name(),
                                        line }
}
