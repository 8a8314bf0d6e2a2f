use mathex::{
    ast::{BinaryOperator, Constant, Expr},
    error::{LexError, ParseError},
    interpreter::{
        lexer::{Token, tokenize},
        parser::parse,
    },
};

fn tokens_of(src: &str) -> Vec<Token> {
    tokenize(src).unwrap_or_else(|e| panic!("'{src}' failed to tokenize: {e}"))
                 .into_iter()
                 .map(|(token, _)| token)
                 .collect()
}

fn tree_of(src: &str) -> Expr {
    let tokens = tokenize(src).unwrap_or_else(|e| panic!("'{src}' failed to tokenize: {e}"));
    parse(&tokens).unwrap_or_else(|e| panic!("'{src}' failed to parse: {e}"))
}

fn binary(op: BinaryOperator, left: Expr, right: Expr) -> Expr {
    Expr::BinaryOp { op,
                     left: Box::new(left),
                     right: Box::new(right) }
}

#[test]
fn letter_runs_split_into_variables() {
    assert_eq!(tokens_of("xyz"),
               vec![Token::Variable('x'),
                    Token::Variable('y'),
                    Token::Variable('z'),
                    Token::Eof]);
}

#[test]
fn registry_names_beat_variable_splitting() {
    assert_eq!(tokens_of("sin"),
               vec![Token::Function("sin".to_string()), Token::Eof]);
    // Not an exact registry name, so the whole run sheds into variables.
    assert_eq!(tokens_of("sinus").len(), 6);
}

#[test]
fn rescan_finds_suffix_functions_and_constants() {
    assert_eq!(tokens_of("xsin"),
               vec![Token::Variable('x'),
                    Token::Function("sin".to_string()),
                    Token::Eof]);
    assert_eq!(tokens_of("xpi"),
               vec![Token::Variable('x'), Token::Pi, Token::Eof]);
}

#[test]
fn constants_are_exact_runs() {
    assert_eq!(tokens_of("pi e"), vec![Token::Pi, Token::E, Token::Eof]);
    // 'pie' is not 'pi' followed by 'e': the run is reclassified from its
    // second character, where 'ie' sheds 'i' and leaves the constant 'e'.
    assert_eq!(tokens_of("pie"),
               vec![Token::Variable('p'), Token::Variable('i'), Token::E, Token::Eof]);
}

#[test]
fn tokens_carry_byte_positions() {
    let tokens = tokenize("1 + 2").unwrap();
    assert_eq!(tokens,
               vec![(Token::Number(1.0), 0),
                    (Token::Plus, 2),
                    (Token::Number(2.0), 4),
                    (Token::Eof, 5)]);
}

#[test]
fn invalid_characters_are_reported_with_position() {
    assert_eq!(tokenize("2 @ 3"),
               Err(LexError::InvalidCharacter { character: '@',
                                                position:  2, }));
}

#[test]
fn malformed_numbers_are_rejected() {
    assert_eq!(tokenize("1.2.3"),
               Err(LexError::InvalidNumber { literal:  "1.2.3".to_string(),
                                             position: 0, }));
    assert_eq!(tokens_of(".5"), vec![Token::Number(0.5), Token::Eof]);
}

#[test]
fn exponentiation_parses_left_associative() {
    assert_eq!(tree_of("2^3^2"),
               binary(BinaryOperator::Pow,
                      binary(BinaryOperator::Pow, Expr::Number(2.0), Expr::Number(3.0)),
                      Expr::Number(2.0)));
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(tree_of("2 + 3 * 4"),
               binary(BinaryOperator::Add,
                      Expr::Number(2.0),
                      binary(BinaryOperator::Mul, Expr::Number(3.0), Expr::Number(4.0))));
}

#[test]
fn implicit_multiplication_between_groups() {
    assert_eq!(tree_of("(x)(y)"),
               binary(BinaryOperator::Mul,
                      Expr::Variable("x".to_string()),
                      Expr::Variable("y".to_string())));
}

#[test]
fn implicit_multiplication_inside_call_arguments() {
    assert_eq!(tree_of("sin(2x)"),
               Expr::FunctionCall { name:      "sin".to_string(),
                                    arguments: vec![binary(BinaryOperator::Mul,
                                                           Expr::Number(2.0),
                                                           Expr::Variable("x".to_string()))], });
}

#[test]
fn assignment_forms_a_single_node() {
    assert_eq!(tree_of("x = 2pi"),
               Expr::Assign { name:  "x".to_string(),
                              value: Box::new(binary(BinaryOperator::Mul,
                                                     Expr::Number(2.0),
                                                     Expr::Constant(Constant::Pi))), });
}

#[test]
fn absolute_value_bars_nest_around_expressions() {
    assert_eq!(tree_of("|1 - 2|"),
               Expr::Abs(Box::new(binary(BinaryOperator::Sub,
                                         Expr::Number(1.0),
                                         Expr::Number(2.0)))));
}

#[test]
fn call_arguments_split_on_commas() {
    assert_eq!(tree_of("mod(10, 3)"),
               Expr::FunctionCall { name:      "mod".to_string(),
                                    arguments: vec![Expr::Number(10.0), Expr::Number(3.0)], });
}

#[test]
fn missing_closing_tokens_are_reported() {
    let tokens = tokenize("(5").unwrap();
    assert_eq!(parse(&tokens),
               Err(ParseError::ExpectedToken { expected: ")".to_string(),
                                               found:    "end of input".to_string(),
                                               position: 2, }));

    let tokens = tokenize("2 +").unwrap();
    assert_eq!(parse(&tokens),
               Err(ParseError::UnexpectedEndOfInput { position: 3 }));
}

#[test]
fn stray_tokens_are_unexpected() {
    let tokens = tokenize(")").unwrap();
    assert_eq!(parse(&tokens),
               Err(ParseError::UnexpectedToken { token:    ")".to_string(),
                                                 position: 0, }));
}
