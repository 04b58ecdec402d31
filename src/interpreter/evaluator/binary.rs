use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, lexer::Position, value::Value},
};

/// Evaluates a binary operation over two already-evaluated operands.
///
/// Integer arithmetic uses checked 32-bit operations and traps overflow;
/// division and modulo by zero trap for both integers and reals. `%` uses
/// Euclidean semantics, so the result is never negative for a positive
/// divisor. The type checker guarantees both operands share a kind the
/// operator accepts, so the mismatch arm only fires on unchecked trees.
///
/// # Example
/// ```
/// use runa::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary, lexer::Position, value::Value},
/// };
///
/// let left = Value::Integer(-7);
/// let right = Value::Integer(3);
/// let pos = Position::default();
///
/// let result = eval_binary(BinaryOperator::Mod, &left, &right, pos).unwrap();
/// assert_eq!(result, Value::Integer(2));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   pos: Position)
                   -> EvalResult<Value> {
    use BinaryOperator::{
        Add, BitAnd, BitOr, BitXor, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul,
        NotEqual, Pow, Sub,
    };

    match op {
        Add => match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => {
                a.checked_add(*b)
                 .map(Value::Integer)
                 .ok_or(RuntimeError::Overflow { pos })
            },
            (Value::Real(a), Value::Real(b)) => Ok(Value::Real(a + b)),
            (Value::String(a), Value::String(b)) => Ok(Value::String(format!("{a}{b}"))),
            _ => Err(invalid_operands(op, pos)),
        },
        Sub => match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => {
                a.checked_sub(*b)
                 .map(Value::Integer)
                 .ok_or(RuntimeError::Overflow { pos })
            },
            (Value::Real(a), Value::Real(b)) => Ok(Value::Real(a - b)),
            _ => Err(invalid_operands(op, pos)),
        },
        Mul => match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => {
                a.checked_mul(*b)
                 .map(Value::Integer)
                 .ok_or(RuntimeError::Overflow { pos })
            },
            (Value::Real(a), Value::Real(b)) => Ok(Value::Real(a * b)),
            _ => Err(invalid_operands(op, pos)),
        },
        Div => match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => {
                if *b == 0 {
                    return Err(RuntimeError::DivisionByZero { pos });
                }
                a.checked_div(*b)
                 .map(Value::Integer)
                 .ok_or(RuntimeError::Overflow { pos })
            },
            (Value::Real(a), Value::Real(b)) => {
                if *b == 0.0 {
                    return Err(RuntimeError::DivisionByZero { pos });
                }
                Ok(Value::Real(a / b))
            },
            _ => Err(invalid_operands(op, pos)),
        },
        Pow => match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => int_pow(*a, *b, pos).map(Value::Integer),
            (Value::Real(a), Value::Real(b)) => Ok(Value::Real(a.powf(*b))),
            _ => Err(invalid_operands(op, pos)),
        },
        Mod => match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => {
                if *b == 0 {
                    return Err(RuntimeError::DivisionByZero { pos });
                }
                a.checked_rem_euclid(*b)
                 .map(Value::Integer)
                 .ok_or(RuntimeError::Overflow { pos })
            },
            _ => Err(invalid_operands(op, pos)),
        },
        BitAnd => match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(a & b)),
            _ => Err(invalid_operands(op, pos)),
        },
        BitOr => match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(a | b)),
            _ => Err(invalid_operands(op, pos)),
        },
        BitXor => match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(a ^ b)),
            _ => Err(invalid_operands(op, pos)),
        },
        Equal => eval_equality(left, right, pos).map(Value::Boolean),
        NotEqual => eval_equality(left, right, pos).map(|eq| Value::Boolean(!eq)),
        Less | LessEqual | Greater | GreaterEqual => eval_ordering(op, left, right, pos),
    }
}

/// Compares two values of the same kind for equality.
fn eval_equality(left: &Value, right: &Value, pos: Position) -> EvalResult<bool> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Ok(a == b),
        (Value::Real(a), Value::Real(b)) => Ok(a == b),
        (Value::String(a), Value::String(b)) => Ok(a == b),
        (Value::Char(a), Value::Char(b)) => Ok(a == b),
        (Value::Boolean(a), Value::Boolean(b)) => Ok(a == b),
        _ => Err(invalid_operands(BinaryOperator::Equal, pos)),
    }
}

/// Evaluates an ordering comparison over `int`, `real`, `char` or
/// `string` operands.
fn eval_ordering(op: BinaryOperator,
                 left: &Value,
                 right: &Value,
                 pos: Position)
                 -> EvalResult<Value> {
    let ordering = match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => a.partial_cmp(b),
        (Value::Real(a), Value::Real(b)) => a.partial_cmp(b),
        (Value::Char(a), Value::Char(b)) => a.partial_cmp(b),
        (Value::String(a), Value::String(b)) => a.partial_cmp(b),
        _ => return Err(invalid_operands(op, pos)),
    };

    // NaN comparisons are vacuously false, like the underlying operators.
    let result = ordering.is_some_and(|ordering| match op {
                                          BinaryOperator::Less => ordering.is_lt(),
                                          BinaryOperator::LessEqual => ordering.is_le(),
                                          BinaryOperator::Greater => ordering.is_gt(),
                                          BinaryOperator::GreaterEqual => ordering.is_ge(),
                                          _ => unreachable!("not an ordering operator: {op}"),
                                      });

    Ok(Value::Boolean(result))
}

/// Computes an integer power by iterated multiplication.
///
/// The product is seeded at 1 and multiplied `exponent` times, so an
/// exponent of zero (or less) yields 1. Each step is overflow checked.
fn int_pow(base: i32, exponent: i32, pos: Position) -> EvalResult<i32> {
    let mut result = 1i32;

    for _ in 0..exponent {
        result = result.checked_mul(base)
                       .ok_or(RuntimeError::Overflow { pos })?;
    }

    Ok(result)
}

fn invalid_operands(op: BinaryOperator, pos: Position) -> RuntimeError {
    RuntimeError::InvalidOperands { operation: op.to_string(),
                                    pos }
}
