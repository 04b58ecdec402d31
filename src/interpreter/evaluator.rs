/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations: arithmetic with checked
/// 32-bit integer semantics, string concatenation, comparisons, equality,
/// and the bitwise operators.
pub mod binary;
/// The interpreter's state and traversal.
///
/// Declares the `Interpreter` struct with its environment stack and output
/// sink, statement execution, and expression evaluation including
/// short-circuiting logical operators and block values.
pub mod core;
/// Unary operator evaluation logic: negation, logical not, bitwise not.
pub mod unary;

pub use self::core::{EvalResult, Interpreter};
