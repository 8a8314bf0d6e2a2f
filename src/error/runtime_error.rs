#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that has never been assigned.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a function that is not in the registry.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// A function was called with an unsupported number of arguments.
    ArgumentCountMismatch {
        /// The name of the function.
        name:  String,
        /// The number of arguments supplied.
        found: usize,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// A function argument violated the function's domain or hit a
    /// singularity.
    FunctionDomainError {
        /// The name of the function.
        name:    String,
        /// The offending argument value.
        value:   f64,
        /// What the function requires of its input.
        details: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => {
                write!(f, "Undefined variable: {name}.")
            },
            Self::UnknownFunction { name } => {
                write!(f, "Unknown function: {name}.")
            },
            Self::ArgumentCountMismatch { name, found } => {
                write!(f, "Function '{name}' does not accept {found} argument(s).")
            },
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::FunctionDomainError { name, value, details } => {
                write!(f, "Domain error in {name}({value}): {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
