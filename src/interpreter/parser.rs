use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Constant, Expr, UnaryOperator},
    error::ParseError,
    interpreter::lexer::Token,
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Binding power of multiplication, used when synthesizing implicit
/// multiplication operators.
const MUL_BINDING_POWER: u8 = 2;

/// Parses a token sequence into a single expression tree.
///
/// This is the entry point for parsing. If the sequence begins with a
/// variable followed by `=`, the whole line is parsed as an assignment;
/// otherwise a single expression is parsed. Tokens remaining after a
/// complete expression are ignored up to [`Token::Eof`].
///
/// Expression parsing uses precedence climbing with binding powers
/// `+`/`-` = 1, `*`/`/` = 2, `^` = 3. All operators are left-associative
/// at equal precedence, including `^`: the uniform climbing rule is not
/// specialized for exponentiation, so `2^3^2` parses as `(2^3)^2`.
///
/// # Parameters
/// - `tokens`: The `(Token, position)` sequence produced by `tokenize`.
///
/// # Returns
/// The root [`Expr`] node of the parsed tree.
///
/// # Errors
/// Returns a [`ParseError`] carrying the offending token and its position.
///
/// # Examples
/// ```
/// use mathex::{ast::Expr, interpreter::{lexer::tokenize, parser::parse}};
///
/// let tokens = tokenize("42").unwrap();
/// assert_eq!(parse(&tokens).unwrap(), Expr::Number(42.0));
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();

    if let (Some((Token::Variable(_), _)), Some((Token::Equals, _))) =
        (tokens.first(), tokens.get(1))
    {
        let expr = parse_assignment(&mut iter)?;
        log::trace!("parsed assignment: {expr:?}");
        return Ok(expr);
    }

    let expr = parse_expression(&mut iter, 0, false)?;
    log::trace!("parsed expression: {expr:?}");
    Ok(expr)
}

/// Parses `variable = expression` into an [`Expr::Assign`] node.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let name = match tokens.next() {
        Some((Token::Variable(name), _)) => name.to_string(),
        Some((token, position)) => {
            return Err(ParseError::UnexpectedToken { token:    token.to_string(),
                                                     position: *position, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { position: 0 }),
    };
    expect(tokens, &Token::Equals)?;
    let value = parse_expression(tokens, 0, false)?;

    Ok(Expr::Assign { name,
                      value: Box::new(value), })
}

/// Parses one expression at the given minimum binding power.
///
/// A leading `-` is recognized as unary negation only here, at the start
/// of an expression; its operand is parsed at the unary operator's own
/// binding power. Everything else starts with a primary. The result is
/// then extended by the binary-operator loop.
///
/// `in_abs` is true while parsing the inside of `| ... |`, where a `|`
/// closes the construct instead of opening a new absolute value.
fn parse_expression<'a, I>(tokens: &mut Peekable<I>, min_bp: u8, in_abs: bool) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = if let Some((Token::Minus, _)) = tokens.peek() {
        tokens.next();
        let operand = parse_expression(tokens, binding_power(&Token::Minus), in_abs)?;
        Expr::UnaryOp { op:      UnaryOperator::Negate,
                        operand: Box::new(operand), }
    } else {
        parse_primary(tokens, in_abs)?
    };

    parse_binary_ops(tokens, left, min_bp, in_abs)
}

/// The precedence-climbing loop.
///
/// Consumes explicit binary operators whose binding power is at least
/// `min_bp`, parsing each right-hand side one level tighter (which yields
/// left associativity at equal precedence). When no explicit operator is
/// present but the current token itself begins a primary, a multiplication
/// is synthesized at multiplication's binding power and the loop
/// continues; this is what makes `sin(2x)` bind the argument inside the
/// call rather than after it.
fn parse_binary_ops<'a, I>(tokens: &mut Peekable<I>,
                           mut left: Expr,
                           min_bp: u8,
                           in_abs: bool)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    loop {
        let Some((token, _)) = tokens.peek() else {
            break;
        };

        if let Some(op) = binary_operator(token) {
            let bp = binding_power(token);
            if bp < min_bp {
                break;
            }
            tokens.next();
            let right = parse_expression(tokens, bp + 1, in_abs)?;
            left = Expr::BinaryOp { op,
                                    left: Box::new(left),
                                    right: Box::new(right) };
            continue;
        }

        if implicit_multiplicand(tokens, in_abs) {
            if MUL_BINDING_POWER < min_bp {
                break;
            }
            let right = parse_expression(tokens, MUL_BINDING_POWER + 1, in_abs)?;
            left = Expr::BinaryOp { op:    BinaryOperator::Mul,
                                    left:  Box::new(left),
                                    right: Box::new(right), };
            continue;
        }

        break;
    }
    Ok(left)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions include:
/// - numeric literals
/// - variables and the constants `pi` / `e`
/// - parenthesized sub-expressions
/// - function calls `name(arg, arg, ...)`
/// - absolute values `| expr |`
///
/// After the atom, adjacent multipliable tokens are consumed into a
/// left-associative implicit-multiplication chain: `2x`, `xyz`,
/// `(x+1)(x-1)`, `2|x|`.
fn parse_primary<'a, I>(tokens: &mut Peekable<I>, in_abs: bool) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut node = match tokens.peek() {
        Some((Token::Number(value), _)) => {
            let value = *value;
            tokens.next();
            Expr::Number(value)
        },
        Some((Token::Variable(name), _)) => {
            let name = name.to_string();
            tokens.next();
            Expr::Variable(name)
        },
        Some((Token::Pi, _)) => {
            tokens.next();
            Expr::Constant(Constant::Pi)
        },
        Some((Token::E, _)) => {
            tokens.next();
            Expr::Constant(Constant::E)
        },
        Some((Token::LParen, _)) => {
            tokens.next();
            let inner = parse_expression(tokens, 0, false)?;
            expect(tokens, &Token::RParen)?;
            inner
        },
        Some((Token::Function(_), _)) => parse_function_call(tokens)?,
        Some((Token::Pipe, _)) => parse_absolute_value(tokens)?,
        Some((Token::Eof, position)) => {
            return Err(ParseError::UnexpectedEndOfInput { position: *position });
        },
        Some((token, position)) => {
            return Err(ParseError::UnexpectedToken { token:    token.to_string(),
                                                     position: *position, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { position: 0 }),
    };

    while let Some((token, _)) = tokens.peek()
          && is_multipliable(token, in_abs)
    {
        let right = parse_primary(tokens, in_abs)?;
        node = Expr::BinaryOp { op:    BinaryOperator::Mul,
                                left:  Box::new(node),
                                right: Box::new(right), };
    }

    Ok(node)
}

/// Parses a function call: `name ( expr ("," expr)* )` with zero or more
/// arguments.
fn parse_function_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let name = match tokens.next() {
        Some((Token::Function(name), _)) => name.clone(),
        Some((token, position)) => {
            return Err(ParseError::UnexpectedToken { token:    token.to_string(),
                                                     position: *position, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { position: 0 }),
    };
    expect(tokens, &Token::LParen)?;
    let arguments = parse_arguments(tokens)?;

    Ok(Expr::FunctionCall { name, arguments })
}

/// Parses a comma-separated argument list up to the closing `)`.
///
/// An immediately encountered `)` produces an empty list.
fn parse_arguments<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut arguments = Vec::new();
    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();
        return Ok(arguments);
    }
    loop {
        arguments.push(parse_expression(tokens, 0, false)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            _ => {
                expect(tokens, &Token::RParen)?;
                break;
            },
        }
    }
    Ok(arguments)
}

/// Parses `| expr |`. The inner expression is parsed with `in_abs` set so
/// the closing `|` terminates it instead of starting a nested absolute
/// value.
fn parse_absolute_value<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();
    let inner = parse_expression(tokens, 0, true)?;
    expect(tokens, &Token::Pipe)?;
    Ok(Expr::Abs(Box::new(inner)))
}

/// Consumes the next token, requiring it to equal `expected`.
fn expect<'a, I>(tokens: &mut Peekable<I>, expected: &Token) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((token, _)) if token == expected => Ok(()),
        Some((token, position)) => {
            Err(ParseError::ExpectedToken { expected: expected.to_string(),
                                            found:    token.to_string(),
                                            position: *position, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { position: 0 }),
    }
}

/// Maps a token to its corresponding binary operator.
fn binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}

/// Binding power of a binary operator token; `0` for anything else.
fn binding_power(token: &Token) -> u8 {
    match token {
        Token::Plus | Token::Minus => 1,
        Token::Star | Token::Slash => 2,
        Token::Caret => 3,
        _ => 0,
    }
}

/// Tests whether a token can appear as one side of an implicit
/// multiplication. A `|` only opens a new absolute value when we are not
/// already inside one.
fn is_multipliable(token: &Token, in_abs: bool) -> bool {
    match token {
        Token::Variable(_)
        | Token::Pi
        | Token::E
        | Token::LParen
        | Token::Number(_)
        | Token::Function(_) => true,
        Token::Pipe => !in_abs,
        _ => false,
    }
}

/// Tests whether the current token begins the right-hand side of an
/// implicit multiplication inside the binary-operator loop. A function
/// name only qualifies when the lookahead is not `)`.
fn implicit_multiplicand<'a, I>(tokens: &Peekable<I>, in_abs: bool) -> bool
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut ahead = tokens.clone();
    let Some((token, _)) = ahead.next() else {
        return false;
    };
    match token {
        Token::Function(_) => !matches!(ahead.peek(), Some((Token::RParen, _))),
        _ => is_multipliable(token, in_abs),
    }
}
