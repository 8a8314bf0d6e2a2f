#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenization.
pub enum LexError {
    /// A character matched none of: digit, letter, whitespace, or one of
    /// `+ - * / ^ ( ) | , =`.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        position:  usize,
    },
    /// A digit/dot run did not form a valid floating-point literal, such as
    /// `1.2.3` or a lone `.`.
    InvalidNumber {
        /// The literal as written.
        literal:  String,
        /// Byte offset of the literal in the input.
        position: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, position } => {
                write!(f, "Invalid character '{character}' at position {position}.")
            },
            Self::InvalidNumber { literal, position } => {
                write!(f, "Invalid number literal '{literal}' at position {position}.")
            },
        }
    }
}

impl std::error::Error for LexError {}
