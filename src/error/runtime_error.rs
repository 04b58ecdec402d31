use crate::interpreter::lexer::Position;

#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
///
/// The evaluator only runs after a successful type check, so this set is
/// limited to failures the type system cannot rule out, plus lookup
/// failures that guard against running an unchecked tree.
pub enum RuntimeError {
    /// Attempted division or modulo by zero.
    DivisionByZero {
        /// The source position of the operation.
        pos: Position,
    },
    /// Integer arithmetic overflowed the 32-bit range.
    Overflow {
        /// The source position of the operation.
        pos: Position,
    },
    /// Tried to use a variable with no binding in any enclosing scope.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source position of the use.
        pos:  Position,
    },
    /// A declaration named a type missing from the root registry.
    UnknownType {
        /// The name of the type.
        name: String,
        /// The source position of the declaration.
        pos:  Position,
    },
    /// An expression that produces no value was used where one is needed.
    MissingValue {
        /// The source position of the expression.
        pos: Position,
    },
    /// An operation was applied to value kinds it does not support. Only
    /// reachable when the evaluator runs over an unchecked tree.
    InvalidOperands {
        /// Source rendering of the operator.
        operation: String,
        /// The source position of the operation.
        pos:       Position,
    },
    /// A literal's stored text failed to convert into a runtime value.
    MalformedLiteral {
        /// The literal text.
        value: String,
        /// The source position of the literal.
        pos:   Position,
    },
    /// Writing evaluator output to the sink failed.
    Io {
        /// The underlying I/O error message.
        message: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { pos } => write!(f, "{pos} - Division by zero"),
            Self::Overflow { pos } => {
                write!(f, "{pos} - Integer overflow while trying to compute result")
            },
            Self::UnknownVariable { name, pos } => {
                write!(f, "{pos} - Unknown variable '{name}'")
            },
            Self::UnknownType { name, pos } => write!(f, "{pos} - Unknown type '{name}'"),
            Self::MissingValue { pos } => write!(f, "{pos} - Value missing"),
            Self::InvalidOperands { operation, pos } => {
                write!(f, "{pos} - Invalid operands for '{operation}'")
            },
            Self::MalformedLiteral { value, pos } => {
                write!(f, "{pos} - Malformed literal '{value}'")
            },
            Self::Io { message } => write!(f, "Failed to write output: {message}"),
        }
    }
}

impl std::error::Error for RuntimeError {}
