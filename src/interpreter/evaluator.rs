use std::collections::HashMap;
use std::f64::consts;

use crate::{
    ast::{BinaryOperator, Constant, Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::builtins,
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Holds the variable environment an expression tree is evaluated against.
///
/// A context starts empty and accumulates bindings as assignments are
/// evaluated, so it persists naturally across the lines of an interactive
/// session. Reading a name that was never bound is a hard error rather
/// than a default value.
#[derive(Debug, Default, Clone)]
pub struct Context {
    variables: HashMap<String, f64>,
}

impl Context {
    /// Creates an empty evaluation context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates an expression tree to a single number.
    ///
    /// Evaluation is eager throughout: both operands of a binary operator
    /// and every function argument are evaluated (left to right) before
    /// the operation itself runs. Assignments bind the evaluated value in
    /// this context and yield it as the expression's result.
    ///
    /// # Parameters
    /// - `expr`: The root of the tree to evaluate.
    ///
    /// # Returns
    /// The numeric value of the expression.
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] for undefined variables, division by
    /// exactly zero, and registry failures (unknown name, arity mismatch,
    /// domain violations).
    ///
    /// # Examples
    /// ```
    /// use mathex::{ast::Expr, interpreter::evaluator::Context};
    ///
    /// let mut context = Context::new();
    /// assert_eq!(context.eval(&Expr::Number(42.0)), Ok(42.0));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Number(value) => Ok(*value),
            Expr::Variable(name) => self.variable(name),
            Expr::Constant(constant) => Ok(match constant {
                                              Constant::Pi => consts::PI,
                                              Constant::E => consts::E,
                                          }),
            Expr::UnaryOp { op, operand } => {
                let value = self.eval(operand)?;
                match op {
                    UnaryOperator::Negate => Ok(-value),
                }
            },
            Expr::BinaryOp { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                self.eval_binary(*op, left, right)
            },
            Expr::FunctionCall { name, arguments } => {
                let mut values = Vec::with_capacity(arguments.len());
                for argument in arguments {
                    values.push(self.eval(argument)?);
                }
                builtins::call(name, &values)
            },
            Expr::Assign { name, value } => {
                let value = self.eval(value)?;
                self.variables.insert(name.clone(), value);
                log::debug!("bound variable {name} = {value}");
                Ok(value)
            },
            Expr::Abs(inner) => Ok(self.eval(inner)?.abs()),
        }
    }

    /// Applies a binary operator to two evaluated operands.
    ///
    /// The zero check on division is bit-exact: only a divisor that is
    /// exactly `0.0` is rejected.
    fn eval_binary(&self, op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        match op {
            BinaryOperator::Add => Ok(left + right),
            BinaryOperator::Sub => Ok(left - right),
            BinaryOperator::Mul => Ok(left * right),
            BinaryOperator::Div => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(left / right)
            },
            BinaryOperator::Pow => Ok(left.powf(right)),
        }
    }

    /// Looks up a variable binding.
    ///
    /// # Errors
    /// [`RuntimeError::UndefinedVariable`] if the name has no binding.
    pub fn variable(&self, name: &str) -> EvalResult<f64> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string() })
    }

    /// Binds a variable directly, outside of expression evaluation.
    pub fn set_variable(&mut self, name: impl Into<String>, value: f64) {
        self.variables.insert(name.into(), value);
    }

    /// Removes a binding, returning its value if it existed.
    pub fn remove_variable(&mut self, name: &str) -> Option<f64> {
        self.variables.remove(name)
    }

    /// Drops every binding in this context.
    pub fn clear_variables(&mut self) {
        self.variables.clear();
    }

    /// The current bindings, for inspection.
    #[must_use]
    pub fn variables(&self) -> &HashMap<String, f64> {
        &self.variables
    }
}
