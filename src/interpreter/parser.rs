/// The parser's state, shared helpers, and panic-mode error recovery.
///
/// Declares the `Parser` struct, the token-stream helpers every production
/// uses (`expect`, `check`, `consume`, `advance`), and the `synchronize`
/// routine that skips to the next statement boundary after an error.
pub mod core;
/// Expression productions from logical-or down to equality, comparison,
/// term and factor, plus the if expression.
pub mod expression;
/// Statement productions: declarations, blocks, if statements, expression
/// statements and assignments.
pub mod statement;
/// The highest-precedence productions: unary operators, the single-shot
/// exponent rule, and primaries.
pub mod unary;

pub use self::core::{ParseResult, Parser};
