//! # mathex
//!
//! mathex is a mathematical expression interpreter written in Rust.
//! It tokenizes, parses, and evaluates expressions with support for
//! variables, built-in functions, constants, implicit multiplication, and
//! absolute-value notation.

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
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::float_cmp)]

use crate::interpreter::{evaluator::Context, lexer::tokenize, parser::parse};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent
/// the syntactic structure of a source line as a tree. The AST is built by
/// the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines node types for every expression construct.
/// - Keeps operator and constant kinds as closed enums so evaluation is
///   exhaustive.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while interpreting a
/// line. It standardizes error reporting and carries detailed information
/// about failures, including the offending input and its position.
///
/// # Responsibilities
/// - Defines one error enum per pipeline stage.
/// - Attaches byte positions and descriptive messages for user feedback.
/// - Implements the standard error traits for uniform propagation.
pub mod error;
/// Orchestrates the entire process of expression interpretation.
///
/// This module ties together the lexer, parser, function registry, and
/// evaluator to provide a complete pipeline from source text to a numeric
/// result.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, registry, and
///   evaluator.
/// - Provides entry points for tokenizing, parsing, and evaluating user
///   input.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Interprets one source line against the given context.
///
/// This function runs the full pipeline: the line is tokenized, parsed into
/// a single expression tree, and evaluated. Assignments update the context,
/// so passing the same context across calls gives session semantics.
///
/// # Errors
/// Returns the first error raised by any stage: a lexing error for invalid
/// input characters, a parse error for malformed syntax, or a runtime error
/// from evaluation.
///
/// # Examples
/// ```
/// use mathex::{eval_line, interpreter::evaluator::Context};
///
/// let mut context = Context::new();
/// assert_eq!(eval_line("x = 3", &mut context).unwrap(), 3.0);
/// assert_eq!(eval_line("2x + 1", &mut context).unwrap(), 7.0);
///
/// // 'y' is not defined.
/// assert!(eval_line("y + 1", &mut context).is_err());
/// ```
pub fn eval_line(source: &str, context: &mut Context) -> Result<f64, Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    let expr = parse(&tokens)?;
    let value = context.eval(&expr)?;
    Ok(value)
}
