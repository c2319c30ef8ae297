#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning source text.
pub enum LexError {
    /// Found a character that does not start any token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source.
        position:  usize,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// Found a run of dots whose length is not exactly three.
    InvalidRange {
        /// The dots as they appear in the source.
        lexeme:   String,
        /// Byte offset of the first dot in the source.
        position: usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An integer literal does not fit in 64 bits.
    NumberTooLarge {
        /// The digits as they appear in the source.
        lexeme:   String,
        /// Byte offset of the first digit in the source.
        position: usize,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl LexError {
    /// Byte offset in the source at which scanning failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::InvalidRange { position, .. }
            | Self::NumberTooLarge { position, .. } => *position,
        }
    }

    /// Line on which scanning failed, starting at 1.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. }
            | Self::InvalidRange { line, .. }
            | Self::NumberTooLarge { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, position, line } => {
                write!(f,
                       "Error on line {line} at offset {position}: Unexpected character: {character:?}.")
            },

            Self::InvalidRange { lexeme, position, line } => write!(f,
                                                                     "Error on line {line} at offset {position}: Invalid range symbol {lexeme:?}, expected '...'."),

            Self::NumberTooLarge { lexeme, position, line } => write!(f,
                                                                       "Error on line {line} at offset {position}: Number {lexeme} is too large."),
        }
    }
}

impl std::error::Error for LexError {}
