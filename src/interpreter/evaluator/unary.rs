use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, lexer::Position, value::Value},
};

/// Evaluates a unary operation on an already-evaluated value.
///
/// Negation uses checked arithmetic so negating the minimum integer traps
/// as overflow; `!` flips a boolean and `~` inverts an integer's bits.
///
/// # Example
/// ```
/// use runa::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_unary, lexer::Position, value::Value},
/// };
///
/// let pos = Position::default();
///
/// let v = eval_unary(UnaryOperator::Negate, &Value::Integer(5), pos).unwrap();
/// assert_eq!(v, Value::Integer(-5));
///
/// let v = eval_unary(UnaryOperator::Not, &Value::Boolean(false), pos).unwrap();
/// assert_eq!(v, Value::Boolean(true));
/// ```
pub fn eval_unary(op: UnaryOperator, value: &Value, pos: Position) -> EvalResult<Value> {
    match op {
        UnaryOperator::Negate => match value {
            Value::Integer(n) => {
                n.checked_neg()
                 .map(Value::Integer)
                 .ok_or(RuntimeError::Overflow { pos })
            },
            Value::Real(r) => Ok(Value::Real(-r)),
            _ => Err(invalid_operand(op, pos)),
        },
        UnaryOperator::Not => match value {
            Value::Boolean(b) => Ok(Value::Boolean(!b)),
            _ => Err(invalid_operand(op, pos)),
        },
        UnaryOperator::BitNot => match value {
            Value::Integer(n) => Ok(Value::Integer(!n)),
            _ => Err(invalid_operand(op, pos)),
        },
    }
}

fn invalid_operand(op: UnaryOperator, pos: Position) -> RuntimeError {
    RuntimeError::InvalidOperands { operation: op.to_string(),
                                    pos }
}
