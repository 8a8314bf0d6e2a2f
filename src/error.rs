/// Lexical errors.
///
/// Defines the errors that can occur while tokenizing a source line, such as
/// characters outside the language alphabet or malformed numeric literals.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree
/// from the token sequence: unexpected tokens and missing expected tokens.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: undefined
/// variables, unknown functions, division by zero, argument count
/// mismatches, and function domain violations.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
