use mathex::{error::RuntimeError, eval_line, interpreter::evaluator::Context};

const EPSILON: f64 = 1e-9;

fn eval(src: &str) -> Result<f64, Box<dyn std::error::Error>> {
    let mut context = Context::new();
    eval_line(src, &mut context)
}

fn assert_eval(src: &str, expected: f64) {
    match eval(src) {
        Ok(value) => assert!((value - expected).abs() < EPSILON,
                             "'{src}' evaluated to {value}, expected {expected}"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(value) = eval(src) {
        panic!("'{src}' evaluated to {value} but was expected to fail");
    }
}

/// Evaluates every line against one shared context and checks the value of
/// the last line.
fn assert_session(lines: &[&str], expected: f64) {
    let mut context = Context::new();
    let mut last = f64::NAN;
    for line in lines {
        last = eval_line(line, &mut context).unwrap_or_else(|e| panic!("'{line}' failed: {e}"));
    }
    assert!((last - expected).abs() < EPSILON,
            "session ended with {last}, expected {expected}");
}

#[test]
fn basic_arithmetic() {
    assert_eval("1 + 2", 3.0);
    assert_eval("7 * 9", 63.0);
    assert_eval("8 - 5", 3.0);
    assert_eval("10 / 2", 5.0);
    assert_eval("42", 42.0);
    assert_eval("3.14", 3.14);
}

#[test]
fn precedence_and_parentheses() {
    assert_eval("2 + 3 * 4", 14.0);
    assert_eval("(2 + 3) * 4", 20.0);
    assert_eval("2 * 3 ^ 2", 18.0);
    assert_eval("6 / 2 + 1", 4.0);
}

#[test]
fn operators_are_left_associative() {
    assert_eval("8 - 5 - 1", 2.0);
    assert_eval("16 / 4 / 2", 2.0);
    assert_eval("2 ^ 3 ^ 2", 64.0);
}

#[test]
fn unary_negation_and_absolute_value() {
    assert_eval("-5", -5.0);
    assert_eval("-2 ^ 2", -4.0);
    assert_eval("|-5|", 5.0);
    assert_eval("|2 - 7|", 5.0);
    assert_eval("3 - -2", 5.0);
}

#[test]
fn constants() {
    assert_eval("pi", std::f64::consts::PI);
    assert_eval("e", std::f64::consts::E);
    assert_eval("pi + e", 5.859_874_482_048_838);
    assert_eval("2pi", 2.0 * std::f64::consts::PI);
}

#[test]
fn assignment_returns_and_persists() {
    assert_eval("x = 7", 7.0);
    assert_session(&["x = 4", "x + 1"], 5.0);
    assert_session(&["x = 4", "x = x + 1", "x"], 5.0);
    assert_session(&["a = 2", "b = 3", "a b"], 6.0);
}

#[test]
fn implicit_multiplication() {
    assert_session(&["x = 4", "2x"], 8.0);
    assert_session(&["x = 3", "(x + 1)(x - 1)"], 8.0);
    assert_session(&["x = 2", "y = 3", "z = 4", "xyz"], 24.0);
    assert_session(&["x = 5", "xsin(0)"], 0.0);
    assert_session(&["x = 1", "2|x - 3|"], 4.0);
    assert_eval("2(3 + 4)", 14.0);
}

#[test]
fn trig_functions() {
    assert_eval("sin(0)", 0.0);
    assert_eval("cos(0)", 1.0);
    assert_eval("tan(pi)", 0.0);
    assert_eval("sec(0)", 1.0);
    assert_eval("atan(1)", std::f64::consts::FRAC_PI_4);
    assert_eval("asin(1)", std::f64::consts::FRAC_PI_2);
    assert_eval("acos(0.5)", (0.5f64).acos());
    assert_eval("acsc(2)", (0.5f64).asin());
}

#[test]
fn trig_singularities_are_rejected() {
    assert_failure("sin(pi / 2)");
    assert_failure("cos(-pi / 2)");
    assert_failure("tan(pi / 2)");
    assert_failure("sec(pi / 2)");
    assert_failure("csc(0)");
    assert_failure("cot(0)");
    assert_failure("atan(0)");
    assert_failure("acot(0)");
}

#[test]
fn inverse_trig_domains_are_enforced() {
    assert_failure("asin(2)");
    assert_failure("acos(-1.5)");
    assert_failure("acsc(0.5)");
    assert_failure("asec(0)");
}

#[test]
fn hyperbolic_functions_reject_zero() {
    assert_eval("sinh(1)", (1.0f64).sinh());
    assert_eval("tanh(1)", (1.0f64).tanh());
    assert_failure("sinh(0)");
    assert_failure("cosh(0)");
    assert_failure("tanh(0)");
    assert_failure("csch(0)");
    assert_failure("sech(0)");
    assert_failure("coth(0)");
}

#[test]
fn rounding_functions() {
    assert_eval("round(3.7)", 4.0);
    assert_eval("round(3.14159, 2)", 3.14);
    assert_eval("round(3.14159, 0)", 3.0);
    assert_eval("ceil(2.1)", 3.0);
    assert_eval("floor(2.9)", 2.0);
    assert_failure("round(2.5, -1)");
}

#[test]
fn sign_is_exact() {
    assert_eval("sign(-42)", -1.0);
    assert_eval("sign(0)", 0.0);
    assert_eval("sign(11)", 1.0);
}

#[test]
fn number_theory_functions() {
    assert_eval("gcd(48, 18)", 6.0);
    assert_eval("gcd(12, 18, 24)", 6.0);
    assert_eval("lcm(4, 6)", 12.0);
    assert_eval("lcm(2, 3, 4)", 12.0);
    assert_eval("mod(10, 3)", 1.0);
    assert_eval("nthroot(27, 3)", 3.0);
    assert_failure("mod(1, 0)");
    assert_failure("nthroot(2, 0)");
}

#[test]
fn arity_is_validated() {
    assert_failure("sin()");
    assert_failure("sin(1, 2)");
    assert_failure("mod(1)");
    assert_failure("round(1, 2, 3)");
}

#[test]
fn undefined_variables_are_errors() {
    assert_failure("y + 1");
    assert_session(&["x = 1", "x"], 1.0);
    // Clearing one name must not leak into a fresh context.
    assert_failure("x");
}

#[test]
fn division_by_zero_is_an_error() {
    assert_failure("1 / 0");
    assert_failure("1 / (2 - 2)");
    assert_eval("1 / 0.5", 2.0);
}

#[test]
fn lexing_failures() {
    assert_failure("2 @ 3");
    assert_failure("1.2.3");
    assert_failure("#");
}

#[test]
fn parsing_failures() {
    assert_failure("(5");
    assert_failure("2 +");
    assert_failure(")");
    assert_failure("|5");
    assert_failure("");
}

#[test]
fn unknown_function_error_from_registry() {
    let result = mathex::interpreter::builtins::call("frobnicate", &[1.0]);
    assert_eq!(result,
               Err(RuntimeError::UnknownFunction { name: "frobnicate".to_string() }));
}

#[test]
fn context_accessors() {
    let mut context = Context::new();
    context.set_variable("x", 2.5);
    assert_eq!(context.variable("x"), Ok(2.5));
    assert_eq!(context.remove_variable("x"), Some(2.5));
    assert_eq!(context.variable("x"),
               Err(RuntimeError::UndefinedVariable { name: "x".to_string() }));

    context.set_variable("a", 1.0);
    context.set_variable("b", 2.0);
    context.clear_variables();
    assert!(context.variables().is_empty());
}
