use std::f64::consts::FRAC_PI_2;

use crate::{error::RuntimeError, interpreter::evaluator::EvalResult};

/// Type alias for builtin function handlers.
///
/// A builtin receives the slice of evaluated argument values and returns
/// the computed number or a `RuntimeError`. Every entry performs its own
/// domain and singularity checks before computing.
type BuiltinFn = fn(&[f64]) -> EvalResult<f64>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
/// - `AtLeast(n)` means the builtin is variadic with a minimum of `n`.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
    AtLeast(usize),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every registry function, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    // Trig
    "sin"     => { arity: Arity::Exact(1), func: sin },
    "cos"     => { arity: Arity::Exact(1), func: cos },
    "tan"     => { arity: Arity::Exact(1), func: tan },
    "csc"     => { arity: Arity::Exact(1), func: csc },
    "sec"     => { arity: Arity::Exact(1), func: sec },
    "cot"     => { arity: Arity::Exact(1), func: cot },
    // Inverse trig
    "asin"    => { arity: Arity::Exact(1), func: asin },
    "acos"    => { arity: Arity::Exact(1), func: acos },
    "atan"    => { arity: Arity::Exact(1), func: atan },
    "acsc"    => { arity: Arity::Exact(1), func: acsc },
    "asec"    => { arity: Arity::Exact(1), func: asec },
    "acot"    => { arity: Arity::Exact(1), func: acot },
    // Hyperbolic
    "sinh"    => { arity: Arity::Exact(1), func: sinh },
    "cosh"    => { arity: Arity::Exact(1), func: cosh },
    "tanh"    => { arity: Arity::Exact(1), func: tanh },
    "csch"    => { arity: Arity::Exact(1), func: csch },
    "sech"    => { arity: Arity::Exact(1), func: sech },
    "coth"    => { arity: Arity::Exact(1), func: coth },
    // Number theory and rounding
    "lcm"     => { arity: Arity::AtLeast(1), func: lcm },
    "gcd"     => { arity: Arity::AtLeast(1), func: gcd },
    "mod"     => { arity: Arity::Exact(2), func: modulo },
    "ceil"    => { arity: Arity::Exact(1), func: ceil },
    "floor"   => { arity: Arity::Exact(1), func: floor },
    "round"   => { arity: Arity::OneOf(&[1, 2]), func: round },
    "sign"    => { arity: Arity::Exact(1), func: sign },
    "nthroot" => { arity: Arity::Exact(2), func: nthroot },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity
    /// constraint.
    fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(arr) => arr.contains(&n),
            Self::AtLeast(m) => n >= *m,
        }
    }
}

/// Tests whether `name` is a registry function.
///
/// The lexer consults this when classifying letter runs, so a run that
/// matches a registry name becomes a function token instead of being split
/// into single-character variables.
///
/// # Examples
/// ```
/// use mathex::interpreter::builtins::is_builtin;
///
/// assert!(is_builtin("sin"));
/// assert!(!is_builtin("sinus"));
/// ```
#[must_use]
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_TABLE.iter().any(|builtin| builtin.name == name)
}

/// Invokes the named registry function on evaluated arguments.
///
/// The arity is validated against the table entry before the function
/// runs; the function itself performs its domain and singularity checks.
///
/// # Errors
/// - `UnknownFunction` if the name is not in the table.
/// - `ArgumentCountMismatch` if the arity check fails.
/// - `FunctionDomainError` from the entry's own guards.
pub fn call(name: &str, args: &[f64]) -> EvalResult<f64> {
    let Some(builtin) = BUILTIN_TABLE.iter().find(|builtin| builtin.name == name) else {
        return Err(RuntimeError::UnknownFunction { name: name.to_string() });
    };
    if !builtin.arity.check(args.len()) {
        return Err(RuntimeError::ArgumentCountMismatch { name:  name.to_string(),
                                                         found: args.len(), });
    }
    (builtin.func)(args)
}

fn domain_error(name: &str, value: f64, details: &str) -> RuntimeError {
    RuntimeError::FunctionDomainError { name:    name.to_string(),
                                        value,
                                        details: details.to_string(), }
}

/// Builds a one-argument builtin that rejects a singular input before
/// delegating to the underlying `f64` computation. The singularity checks
/// compare bit-exact values on purpose: only an argument that lands
/// precisely on the singular point is rejected.
macro_rules! guarded_unary {
    ($fname:ident, $name:literal, $singular:expr, $details:literal, $compute:expr) => {
        fn $fname(args: &[f64]) -> EvalResult<f64> {
            let x = args[0];
            if ($singular)(x) {
                return Err(domain_error($name, x, $details));
            }
            Ok(($compute)(x))
        }
    };
}

fn at_half_pi(x: f64) -> bool {
    x == FRAC_PI_2 || x == -FRAC_PI_2
}

fn at_zero(x: f64) -> bool {
    x == 0.0
}

guarded_unary!(sin, "sin", at_half_pi, "undefined at +/- pi/2", f64::sin);
guarded_unary!(cos, "cos", at_half_pi, "undefined at +/- pi/2", f64::cos);
guarded_unary!(tan, "tan", at_half_pi, "undefined at odd multiples of pi/2", f64::tan);
guarded_unary!(sec, "sec", at_half_pi, "undefined at odd multiples of pi/2", |x: f64| {
    x.cos().recip()
});
guarded_unary!(csc, "csc", at_zero, "undefined at multiples of pi", |x: f64| x.sin().recip());
guarded_unary!(cot, "cot", at_zero, "undefined at multiples of pi", |x: f64| x.tan().recip());

guarded_unary!(atan, "atan", at_zero, "zero input is rejected", f64::atan);
guarded_unary!(acot, "acot", at_zero, "undefined at zero", |x: f64| x.recip().atan());

// The hyperbolic entries all reject zero input, even where the function is
// mathematically defined there (cosh(0) = 1, tanh(0) = 0). This mirrors the
// behavior of the system of record.
guarded_unary!(sinh, "sinh", at_zero, "zero input is rejected", f64::sinh);
guarded_unary!(cosh, "cosh", at_zero, "zero input is rejected", f64::cosh);
guarded_unary!(tanh, "tanh", at_zero, "zero input is rejected", f64::tanh);
guarded_unary!(csch, "csch", at_zero, "undefined at zero", |x: f64| x.sinh().recip());
guarded_unary!(sech, "sech", at_zero, "zero input is rejected", |x: f64| x.cosh().recip());
guarded_unary!(coth, "coth", at_zero, "undefined at zero", |x: f64| x.tanh().recip());

fn asin(args: &[f64]) -> EvalResult<f64> {
    let x = args[0];
    if x.abs() > 1.0 {
        return Err(domain_error("asin", x, "input must satisfy |x| <= 1"));
    }
    Ok(x.asin())
}

fn acos(args: &[f64]) -> EvalResult<f64> {
    let x = args[0];
    if x.abs() > 1.0 {
        return Err(domain_error("acos", x, "input must satisfy |x| <= 1"));
    }
    Ok(x.acos())
}

fn acsc(args: &[f64]) -> EvalResult<f64> {
    let x = args[0];
    if x == 0.0 {
        return Err(domain_error("acsc", x, "undefined at zero"));
    }
    if x.abs() < 1.0 {
        return Err(domain_error("acsc", x, "input must satisfy |x| >= 1"));
    }
    Ok(x.recip().asin())
}

fn asec(args: &[f64]) -> EvalResult<f64> {
    let x = args[0];
    if x == 0.0 {
        return Err(domain_error("asec", x, "undefined at zero"));
    }
    if x.abs() < 1.0 {
        return Err(domain_error("asec", x, "input must satisfy |x| >= 1"));
    }
    Ok(x.recip().acos())
}

/// Greatest common divisor of two values via the Euclidean algorithm on
/// `f64` remainders.
fn euclid(a: f64, b: f64) -> f64 {
    let (mut a, mut b) = (a, b);
    while b != 0.0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

fn gcd(args: &[f64]) -> EvalResult<f64> {
    Ok(args.iter().copied().reduce(euclid).unwrap_or(0.0))
}

fn lcm(args: &[f64]) -> EvalResult<f64> {
    Ok(args.iter()
           .copied()
           .reduce(|a, b| (a * b) / euclid(a, b))
           .unwrap_or(0.0))
}

fn modulo(args: &[f64]) -> EvalResult<f64> {
    let (x, y) = (args[0], args[1]);
    if y == 0.0 {
        return Err(domain_error("mod", y, "division by zero"));
    }
    Ok(x % y)
}

fn ceil(args: &[f64]) -> EvalResult<f64> {
    Ok(args[0].ceil())
}

fn floor(args: &[f64]) -> EvalResult<f64> {
    Ok(args[0].floor())
}

/// Rounds to the nearest integer, or to an optional number of decimal
/// places given as the second argument.
fn round(args: &[f64]) -> EvalResult<f64> {
    let x = args[0];
    let Some(&precision) = args.get(1) else {
        return Ok(x.round());
    };
    if precision < 0.0 {
        return Err(domain_error("round", precision, "precision must be non-negative"));
    }
    if precision == 0.0 {
        return Ok(x.round());
    }
    let factor = 10f64.powf(precision);
    Ok((x * factor).round() / factor)
}

fn sign(args: &[f64]) -> EvalResult<f64> {
    let x = args[0];
    if x > 0.0 {
        Ok(1.0)
    } else if x < 0.0 {
        Ok(-1.0)
    } else {
        Ok(0.0)
    }
}

fn nthroot(args: &[f64]) -> EvalResult<f64> {
    let (x, n) = (args[0], args[1]);
    if n == 0.0 {
        return Err(domain_error("nthroot", n, "zeroth root is undefined"));
    }
    Ok(x.powf(n.recip()))
}
