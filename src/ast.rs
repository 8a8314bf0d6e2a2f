/// A named mathematical constant.
///
/// Constants are recognized by the lexer as the exact letter runs `pi` and
/// `e` and resolve to their `f64` values during evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    /// The circle constant, `std::f64::consts::PI`.
    Pi,
    /// Euler's number, `std::f64::consts::E`.
    E,
}

/// Represents a binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`), explicit or synthesized for implicit
    /// multiplication such as `2x`.
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

/// Represents a unary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers every construct the parser can produce: literals,
/// variables, constants, unary and binary operations, function calls,
/// assignment, and absolute value. The tree is built bottom-up by the
/// parser; every non-leaf node owns fully-formed children, so no partial
/// node ever escapes parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number(f64),
    /// Reference to a variable by name.
    Variable(String),
    /// A named constant (`pi` or `e`).
    Constant(Constant),
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Expr>,
    },
    /// A binary operation.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
    },
    /// A call to a registry function, e.g. `sin(x)` or `gcd(12, 18, 30)`.
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments in source order.
        arguments: Vec<Expr>,
    },
    /// A variable assignment, `x = expr`. Evaluates to the stored value.
    Assign {
        /// The target variable name.
        name:  String,
        /// The value expression.
        value: Box<Expr>,
    },
    /// Absolute value, `|expr|`.
    Abs(Box<Expr>),
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}

impl std::fmt::Display for Constant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pi => write!(f, "pi"),
            Self::E => write!(f, "e"),
        }
    }
}
