use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::{binary::core::unsupported,
                              core::{Context, EvalResult}},
                  value::core::Value},
    util::num::f64_to_i64_checked,
};

impl Context<'_> {
    /// Applies a binary operator to two strings.
    ///
    /// `+` concatenates; `==` and `!=` compare contents.
    ///
    /// # Errors
    /// - `UnsupportedOperands` for any other operator.
    /// - `AllocationFailed` if the concatenation does not fit in memory.
    pub(crate) fn eval_string_binary(op: BinaryOperator,
                                     a: &str,
                                     b: &str,
                                     line: usize)
                                     -> EvalResult<Value> {
        if op == BinaryOperator::Add {
            let mut joined = String::new();
            joined.try_reserve_exact(a.len() + b.len())
                  .map_err(|_| RuntimeError::AllocationFailed { what: "a concatenated string",
                                                                line })?;
            joined.push_str(a);
            joined.push_str(b);
            return Ok(Value::Str(joined));
        }

        Self::equality_op_result(op, a == b).map(Value::Bool)
                                            .ok_or_else(|| {
                                                unsupported(op,
                                                            &Value::from(a),
                                                            &Value::from(b),
                                                            line)
                                            })
    }

    /// Repeats `s` `count` times.
    ///
    /// A count of zero or less gives the empty string.
    ///
    /// # Errors
    /// - `RealIsFractional` if `count` is not a whole number.
    /// - `IntegerOutOfRange` if `count` is outside the 64-bit integer range.
    /// - `AllocationFailed` if the result does not fit in memory.
    ///
    /// # Example
    /// ```
    /// use ember::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// assert_eq!(Context::repeat_string("ab", 3.0, 1).unwrap(), Value::from("ababab"));
    /// assert_eq!(Context::repeat_string("ab", -2.0, 1).unwrap(), Value::from(""));
    /// assert!(Context::repeat_string("ab", 1.5, 1).is_err());
    /// ```
    pub fn repeat_string(s: &str, count: f64, line: usize) -> EvalResult<Value> {
        let count = f64_to_i64_checked(count, line)?;
        let Ok(count) = usize::try_from(count) else {
            return Ok(Value::Str(String::new()));
        };
        if s.is_empty() || count == 0 {
            return Ok(Value::Str(String::new()));
        }

        let allocation_failed = || RuntimeError::AllocationFailed { what: "a repeated string",
                                                                    line };
        let total = s.len().checked_mul(count).ok_or_else(allocation_failed)?;

        let mut repeated = String::new();
        repeated.try_reserve_exact(total).map_err(|_| allocation_failed())?;
        for _ in 0..count {
            repeated.push_str(s);
        }

        tracing::trace!(count, bytes = total, "repeated string");
        Ok(Value::Str(repeated))
    }
}
