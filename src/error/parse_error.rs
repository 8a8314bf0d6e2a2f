#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing the token sequence.
pub enum ParseError {
    /// Found a token that cannot start or continue the current construct.
    UnexpectedToken {
        /// The token encountered, rendered as written.
        token:    String,
        /// Byte offset of the token in the input.
        position: usize,
    },
    /// A specific token was required but something else was found.
    ExpectedToken {
        /// The token that was required, rendered as written.
        expected: String,
        /// The token actually found.
        found:    String,
        /// Byte offset of the found token in the input.
        position: usize,
    },
    /// The token sequence ended while a construct was still open.
    UnexpectedEndOfInput {
        /// Byte offset of the end of the input.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, position } => {
                write!(f, "Unexpected token '{token}' at position {position}.")
            },
            Self::ExpectedToken { expected,
                                  found,
                                  position, } => {
                write!(f,
                       "Expected '{expected}' but found '{found}' at position {position}.")
            },
            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Unexpected end of input at position {position}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
