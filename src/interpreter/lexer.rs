use logos::Logos;

use crate::{error::LexError, interpreter::builtins};

/// Represents a lexical token in a source line.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression language.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    Number(f64),
    /// A single-character variable name, such as `x`.
    Variable(char),
    /// A registry function name, such as `sin` or `nthroot`.
    Function(String),
    /// The constant `pi`.
    Pi,
    /// The constant `e`.
    E,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `^`
    Caret,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
    /// `|`
    Pipe,
    /// `=`
    Equals,
    /// End of input. `tokenize` appends exactly one after the last real
    /// token.
    Eof,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Variable(name) => write!(f, "{name}"),
            Self::Function(name) => write!(f, "{name}"),
            Self::Pi => write!(f, "pi"),
            Self::E => write!(f, "e"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Caret => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
            Self::Pipe => write!(f, "|"),
            Self::Equals => write!(f, "="),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

/// Raw character-level lexemes.
///
/// Letter runs are kept whole here; [`tokenize`] classifies them into
/// constants, function names, or split single-character variables, because
/// that classification needs the function registry.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum Lexeme {
    /// Digit/dot runs such as `42`, `3.14`, or `.5`. A run that is not a
    /// valid float (e.g. `1.2.3`) fails the callback and surfaces as a
    /// lexing error.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// A run of ASCII letters, classified later against constants and the
    /// function registry.
    #[regex(r"[a-zA-Z]+")]
    Word,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("^")]
    Caret,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token("|")]
    Pipe,
    #[token("=")]
    Equals,
}

/// Parses a digit/dot run from the current lexeme slice.
///
/// Returns `None` when the run is not a valid floating-point literal,
/// which logos reports as an error token over the same span.
fn parse_number(lex: &mut logos::Lexer<Lexeme>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Converts a source line into a token sequence.
///
/// Each token is paired with its byte offset in the input, and exactly one
/// [`Token::Eof`] is appended after the last real token. Letter runs are
/// classified in a fixed order: the exact run `pi` or `e` becomes a
/// constant, an exact registry name becomes a [`Token::Function`], and
/// anything else sheds its first character as a [`Token::Variable`] with the
/// remainder of the run reclassified from scratch. The re-scan makes `xyz`
/// three variables while `xsin` is a variable followed by a function name.
///
/// # Errors
/// - [`LexError::InvalidCharacter`] for any character outside the language
///   alphabet, carrying the character and its position.
/// - [`LexError::InvalidNumber`] for digit/dot runs that do not form a
///   valid float, such as `1.2.3`.
///
/// # Examples
/// ```
/// use mathex::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2x").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(t, _)| t).collect();
/// assert_eq!(kinds, vec![Token::Number(2.0), Token::Variable('x'), Token::Eof]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let position = lexer.span().start;
        match lexeme {
            Ok(Lexeme::Number(value)) => tokens.push((Token::Number(value), position)),
            Ok(Lexeme::Word) => classify_word(lexer.slice(), position, &mut tokens),
            Ok(Lexeme::Plus) => tokens.push((Token::Plus, position)),
            Ok(Lexeme::Minus) => tokens.push((Token::Minus, position)),
            Ok(Lexeme::Star) => tokens.push((Token::Star, position)),
            Ok(Lexeme::Slash) => tokens.push((Token::Slash, position)),
            Ok(Lexeme::Caret) => tokens.push((Token::Caret, position)),
            Ok(Lexeme::LParen) => tokens.push((Token::LParen, position)),
            Ok(Lexeme::RParen) => tokens.push((Token::RParen, position)),
            Ok(Lexeme::Comma) => tokens.push((Token::Comma, position)),
            Ok(Lexeme::Pipe) => tokens.push((Token::Pipe, position)),
            Ok(Lexeme::Equals) => tokens.push((Token::Equals, position)),
            Err(()) => return Err(invalid_lexeme(lexer.slice(), position)),
        }
    }

    tokens.push((Token::Eof, source.len()));
    log::trace!("tokenized {:?} into {} token(s)", source, tokens.len());
    Ok(tokens)
}

/// Classifies a letter run into constant, function, and variable tokens.
///
/// Classification order is a hard invariant: constants first, then the
/// registry, then the single-character split with re-scan of the remainder.
fn classify_word(run: &str, position: usize, tokens: &mut Vec<(Token, usize)>) {
    let mut rest = run;
    let mut offset = position;

    while !rest.is_empty() {
        if rest == "pi" {
            tokens.push((Token::Pi, offset));
            return;
        }
        if rest == "e" {
            tokens.push((Token::E, offset));
            return;
        }
        if builtins::is_builtin(rest) {
            tokens.push((Token::Function(rest.to_string()), offset));
            return;
        }

        // Shed one variable and reclassify the rest of the run.
        let Some(first) = rest.chars().next() else {
            return;
        };
        tokens.push((Token::Variable(first), offset));
        rest = &rest[first.len_utf8()..];
        offset += first.len_utf8();
    }
}

/// Maps an errored lexeme slice to the matching [`LexError`].
///
/// Digit/dot slices failed the float parse; anything else is a character
/// outside the alphabet.
fn invalid_lexeme(slice: &str, position: usize) -> LexError {
    let first = slice.chars().next().unwrap_or('\0');
    if first.is_ascii_digit() || first == '.' {
        LexError::InvalidNumber { literal: slice.to_string(),
                                  position }
    } else {
        LexError::InvalidCharacter { character: first,
                                     position }
    }
}
