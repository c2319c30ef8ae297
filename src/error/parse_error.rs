use crate::interpreter::lexer::Token;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing an initializer.
pub enum ParseError {
    /// The current token does not fit the grammar at this position.
    UnexpectedToken {
        /// Human readable description of what the grammar allows here.
        expected: String,
        /// The token encountered.
        found:    Token,
    },
    /// Two initializers follow each other without a comma between them.
    MissingSeparator {
        /// The token that starts the second initializer.
        found: Token,
    },
    /// Found extra tokens after the top-level value was complete.
    TrailingInput {
        /// The first unconsumed token.
        found: Token,
    },
    /// A designator names an index at or beyond the configured array limit.
    IndexTooLarge {
        /// The `NUMBER` token holding the index.
        found: Token,
        /// The configured maximum array length.
        limit: usize,
    },
    /// Brace groups nest deeper than the configured limit.
    NestingTooDeep {
        /// The `{` that would open one group too many.
        found: Token,
        /// The configured maximum depth.
        limit: usize,
    },
    /// Materializing an initializer would write more elements than the
    /// configured maximum array length.
    ArrayTooLarge {
        /// The first token of the offending initializer.
        found: Token,
        /// The configured maximum array length.
        limit: usize,
    },
}

impl ParseError {
    /// The token at which parsing stopped.
    #[must_use]
    pub const fn token(&self) -> &Token {
        match self {
            Self::UnexpectedToken { found, .. }
            | Self::MissingSeparator { found }
            | Self::TrailingInput { found }
            | Self::IndexTooLarge { found, .. }
            | Self::NestingTooDeep { found, .. }
            | Self::ArrayTooLarge { found, .. } => found,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let line = self.token().line;
        match self {
            Self::UnexpectedToken { expected, found } => {
                write!(f, "Error on line {line}: Expected {expected}, found {found}.")
            },

            Self::MissingSeparator { found } => write!(f,
                                                       "Error on line {line}: Expected ',' or '}}' between initializers, found {found}."),

            Self::TrailingInput { found } => write!(f,
                                                    "Error on line {line}: Expected EOF after the initializer, found {found}."),

            Self::IndexTooLarge { found, limit } => write!(f,
                                                           "Error on line {line}: Index {} exceeds the maximum array length {limit}.",
                                                           found.lexeme),

            Self::NestingTooDeep { limit, .. } => write!(f,
                                                         "Error on line {line}: Initializers nest deeper than {limit} levels."),

            Self::ArrayTooLarge { found, limit } => write!(f,
                                                           "Error on line {line}: Initializer starting at {found} writes more than {limit} elements."),
        }
    }
}

impl std::error::Error for ParseError {}
