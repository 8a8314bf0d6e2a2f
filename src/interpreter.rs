/// The registry of built-in mathematical functions.
///
/// This module defines the lookup table of named functions, their arity
/// constraints, and their domain guards. The lexer consults the registry to
/// classify letter runs and the evaluator dispatches calls through it.
///
/// # Responsibilities
/// - Declares every callable function name and its allowed argument counts.
/// - Validates arity before a function runs.
/// - Rejects singular and out-of-domain inputs with descriptive errors.
pub mod builtins;
/// Evaluates expression trees against a variable environment.
///
/// This module walks the AST produced by the parser and reduces it to a
/// single `f64`, consulting the [`builtins`] registry for function calls and
/// the context's variable bindings for names.
///
/// # Responsibilities
/// - Performs eager, left-to-right evaluation of operands and arguments.
/// - Maintains the variable environment across evaluations.
/// - Reports runtime failures such as undefined variables and division by
///   zero.
pub mod evaluator;
/// Converts a source line into a token sequence.
///
/// This module performs lexical analysis: it recognizes numbers, operators,
/// and punctuation directly, and classifies letter runs into constants,
/// registry function names, or single-character variables.
///
/// # Responsibilities
/// - Pairs every token with its byte offset for error reporting.
/// - Applies the constant/function/variable classification order to letter
///   runs.
/// - Rejects characters outside the language alphabet and malformed
///   numbers.
pub mod lexer;
/// Builds expression trees from token sequences.
///
/// This module implements a recursive-descent parser with precedence
/// climbing, including implicit multiplication, absolute-value bars, unary
/// negation, function calls, and assignments.
///
/// # Responsibilities
/// - Enforces operator precedence and left associativity.
/// - Synthesizes multiplication between adjacent multipliable tokens.
/// - Reports unexpected or missing tokens with their positions.
pub mod parser;
