use crate::interpreter::{lexer::Position, typechecker::primitives::Primitive};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can be reported by the static type checker.
pub enum TypeError {
    /// A declaration named a type that is not registered.
    UndefinedType {
        /// The unknown type name.
        name: String,
        /// The source position of the type name.
        pos:  Position,
    },
    /// An identifier that no enclosing scope defines.
    UndefinedIdentifier {
        /// The unknown identifier.
        name: String,
        /// The source position of the identifier.
        pos:  Position,
    },
    /// A variable was read before any value was assigned to it.
    UsedBeforeInitialized {
        /// The variable name.
        name: String,
        /// The source position of the read.
        pos:  Position,
    },
    /// An initialized immutable variable appeared as an assignment target.
    ImmutableAssignment {
        /// The variable name.
        name: String,
        /// The source position of the assignment.
        pos:  Position,
    },
    /// The assigned value's type differs from the variable's type.
    IncompatibleAssignment {
        /// The variable's declared or inferred type.
        expected: Primitive,
        /// The type of the assigned value.
        found:    Primitive,
        /// The source position of the assignment.
        pos:      Position,
    },
    /// A declaration's initializer type differs from its annotation.
    DeclarationMismatch {
        /// The annotated type.
        declared: Primitive,
        /// The initializer's inferred type.
        found:    Primitive,
        /// The source position of the declaration.
        pos:      Position,
    },
    /// A name was redeclared in the same scope with a different type.
    Redefinition {
        /// The redeclared name.
        name: String,
        /// The source position of the redeclaration.
        pos:  Position,
    },
    /// A binary or logical operator applied to operand types outside its
    /// accepted set.
    InvalidBinaryOperation {
        /// Source rendering of the offending expression.
        expr:  String,
        /// The left operand's type.
        left:  Primitive,
        /// The right operand's type.
        right: Primitive,
        /// The source position of the operator.
        pos:   Position,
    },
    /// A unary operator applied to an operand type outside its accepted
    /// set.
    InvalidUnaryOperation {
        /// Source rendering of the offending expression.
        expr:    String,
        /// The operand's type.
        operand: Primitive,
        /// The source position of the operator.
        pos:     Position,
    },
    /// An `if` condition of a non-boolean type.
    ExpectedBooleanCondition {
        /// The condition's type.
        found: Primitive,
        /// The source position of the condition.
        pos:   Position,
    },
    /// The branches of an `if` expression have different types.
    BranchMismatch {
        /// The source position of the `if`.
        pos: Position,
    },
    /// An integer literal outside the signed 32-bit range.
    IntegerOutOfRange {
        /// The literal text.
        value: String,
        /// The source position of the literal.
        pos:   Position,
    },
    /// An expression that produces no value was used where one is needed.
    MissingValue {
        /// Source rendering of the offending expression.
        expr: String,
        /// The source position of the expression.
        pos:  Position,
    },
}

impl std::fmt::Display for TypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedType { name, pos } => write!(f, "{pos} - Undefined type: {name}"),
            Self::UndefinedIdentifier { name, pos } => {
                write!(f, "{pos} - Undefined identifier: {name}")
            },
            Self::UsedBeforeInitialized { name, pos } => {
                write!(f, "{pos} - Identifier used before initialized: {name}")
            },
            Self::ImmutableAssignment { name, pos } => {
                write!(f, "{pos} - Cannot assign to immutable variable {name}")
            },
            Self::IncompatibleAssignment { expected, found, pos } => write!(f,
                                                                            "{pos} - Incompatible assignment. {found} is not compatible with {expected}"),
            Self::DeclarationMismatch { declared, found, pos } => write!(f,
                                                                         "{pos} - Inferred type does not match declared type (declared {declared}, found {found})"),
            Self::Redefinition { name, pos } => {
                write!(f, "{pos} - Redefinition of {name} with a different type")
            },
            Self::InvalidBinaryOperation { expr, left, right, pos } => write!(f,
                                                                              "{pos} - Invalid operation: {expr} (mismatched types {left} and {right})"),
            Self::InvalidUnaryOperation { expr, operand, pos } => write!(f,
                                                                         "{pos} - Invalid operation: {expr} (mismatched type {operand})"),
            Self::ExpectedBooleanCondition { found, pos } => {
                write!(f, "{pos} - Expected boolean condition, found {found}")
            },
            Self::BranchMismatch { pos } => {
                write!(f, "{pos} - Both branches must return the same type")
            },
            Self::IntegerOutOfRange { value, pos } => {
                write!(f, "{pos} - Integer literal out of range: {value}")
            },
            Self::MissingValue { expr, pos } => {
                write!(f, "{pos} - Expression has no value: {expr}")
            },
        }
    }
}

impl std::error::Error for TypeError {}
