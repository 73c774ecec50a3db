use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::{binary::core::unsupported,
                              core::{Context, EvalResult}},
                  value::core::Value},
};

impl Context<'_> {
    /// Converts an equality result to the result of `op`.
    ///
    /// Returns `None` when `op` is neither `==` nor `!=`.
    #[must_use]
    pub const fn equality_op_result(op: BinaryOperator, is_equal: bool) -> Option<bool> {
        match op {
            BinaryOperator::Equal => Some(is_equal),
            BinaryOperator::NotEqual => Some(!is_equal),
            _ => None,
        }
    }

    /// Compares two numbers under a comparison operator.
    ///
    /// Arithmetic operators compare as `false`; callers only pass
    /// comparisons.
    pub(crate) fn compare_numbers(op: BinaryOperator, a: f64, b: f64) -> bool {
        match op {
            BinaryOperator::Equal => a == b,
            BinaryOperator::NotEqual => a != b,
            BinaryOperator::Less => a < b,
            BinaryOperator::Greater => a > b,
            BinaryOperator::LessEqual => a <= b,
            BinaryOperator::GreaterEqual => a >= b,
            BinaryOperator::Add
            | BinaryOperator::Sub
            | BinaryOperator::Mul
            | BinaryOperator::Div => false,
        }
    }

    /// `true` counts as `1`, `false` as `0`.
    pub(crate) fn bool_to_number(b: bool) -> f64 {
        f64::from(u8::from(b))
    }

    /// Two bools support only equality.
    pub(crate) fn eval_bool_binary(op: BinaryOperator,
                                   a: bool,
                                   b: bool,
                                   line: usize)
                                   -> EvalResult<Value> {
        Self::equality_op_result(op, a == b).map(Value::Bool)
                                            .ok_or_else(|| {
                                                unsupported(op,
                                                            &Value::Bool(a),
                                                            &Value::Bool(b),
                                                            line)
                                            })
    }

    /// Compares a number with a bool that has already been converted to `0`
    /// or `1`. The operands keep their original order.
    ///
    /// Returns `None` for arithmetic operators.
    pub(crate) fn eval_mixed_comparison(op: BinaryOperator, a: f64, b: f64) -> Option<bool> {
        match op {
            BinaryOperator::Add
            | BinaryOperator::Sub
            | BinaryOperator::Mul
            | BinaryOperator::Div => None,
            _ => Some(Self::compare_numbers(op, a, b)),
        }
    }
}
