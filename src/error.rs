/// Lexical errors.
///
/// Defines the error types reported while scanning source text into tokens:
/// unterminated strings, characters and block comments, malformed numeric
/// literals, and characters the language does not recognize.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree:
/// unexpected tokens, missing terminators, and invalid assignment targets.
pub mod parse_error;
/// Pipeline errors.
///
/// Bundles the error list of a failed pass together with the logical file
/// name, producing the `<file>:<row>:<col> - <message>` lines the driver
/// reports.
pub mod run_error;
/// Runtime errors.
///
/// Contains the error types that can be raised during evaluation. Because
/// execution only starts after a successful type check, these are limited
/// to failures the type system cannot rule out, such as division by zero
/// and integer overflow.
pub mod runtime_error;
/// Type errors.
///
/// Defines the error types reported by the static checker: unknown types
/// and identifiers, operand mismatches, mutability violations, and
/// control-flow typing failures.
pub mod type_error;

pub use lex_error::{LexError, LexErrorKind};
pub use parse_error::ParseError;
pub use run_error::RunError;
pub use runtime_error::RuntimeError;
pub use type_error::TypeError;
