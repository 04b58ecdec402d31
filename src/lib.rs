//! # runa
//!
//! runa is a small statically typed, expression oriented scripting
//! language. Source text is lexed into tokens, parsed into an abstract
//! syntax tree, type checked against a primitive type system with
//! lexically scoped symbol tables, and executed by recursive tree
//! traversal over an environment chain.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    error::RunError,
    interpreter::{evaluator::Interpreter, lexer::Lexer, parser::Parser, typechecker::Checker},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Stmt` enums and related types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser, verified by the type checker, and traversed by the
/// evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source positions to every node for error reporting.
/// - Keeps short-circuiting logical operations distinct from ordinary
///   binary operations.
pub mod ast;
/// Provides unified error types for every pass.
///
/// This module defines the errors that can be raised while lexing,
/// parsing, type checking or evaluating code, plus the aggregate that
/// formats them as `<file>:<row>:<col> - <message>` lines.
///
/// # Responsibilities
/// - Defines one error enum per pipeline pass.
/// - Attaches source positions and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, type checking, evaluation,
/// value representations and error handling to provide a complete runtime
/// for source code execution.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, type checker, and
///   evaluator.
/// - Provides entry points for interpreting user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Runs a whole program through the pipeline.
///
/// The four passes run strictly in order — lex, parse, type check,
/// evaluate — and a pass that reports any error blocks every later pass.
/// Evaluator output (the printed values of expression statements) is
/// written to `out`; `file` is the logical file name used in error lines,
/// `"repl"` for interactive input.
///
/// # Errors
/// Returns the failing pass's complete error list, or the runtime error
/// that stopped execution.
///
/// # Examples
/// ```
/// use runa::run_program;
///
/// let mut out = Vec::new();
/// run_program("val x: int = 5; x + 10;", "example", &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "15\n");
///
/// // A type error blocks evaluation entirely.
/// let mut out = Vec::new();
/// let result = run_program("val x = 1; x = 2;", "example", &mut out);
/// assert!(result.is_err());
/// assert!(out.is_empty());
/// ```
pub fn run_program<W: Write>(source: &str, file: &str, out: &mut W) -> Result<(), RunError> {
    let (tokens, errors) = Lexer::new(source).tokenize();
    if !errors.is_empty() {
        return Err(RunError::Lex { file: file.to_string(),
                                   errors });
    }

    let (statements, errors) = Parser::new(tokens).parse();
    if !errors.is_empty() {
        return Err(RunError::Parse { file: file.to_string(),
                                     errors });
    }

    if let Err(errors) = Checker::new().check(&statements) {
        return Err(RunError::Type { file: file.to_string(),
                                    errors });
    }

    Interpreter::new(out).run(&statements)
                         .map_err(|error| RunError::Runtime { file: file.to_string(),
                                                              error })
}
