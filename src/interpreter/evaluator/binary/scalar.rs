use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::Context, value::core::Value},
};

impl Context<'_> {
    /// Applies a binary operator to two numbers.
    ///
    /// Every operator is defined on numbers, so this cannot fail. Division
    /// follows IEEE-754: dividing by zero yields an infinity or NaN.
    pub(crate) fn eval_scalar_binary(op: BinaryOperator, a: f64, b: f64) -> Value {
        match op {
            BinaryOperator::Add => Value::Number(a + b),
            BinaryOperator::Sub => Value::Number(a - b),
            BinaryOperator::Mul => Value::Number(a * b),
            BinaryOperator::Div => Value::Number(a / b),
            BinaryOperator::Equal
            | BinaryOperator::NotEqual
            | BinaryOperator::Less
            | BinaryOperator::Greater
            | BinaryOperator::LessEqual
            | BinaryOperator::GreaterEqual => Value::Bool(Self::compare_numbers(op, a, b)),
        }
    }
}
