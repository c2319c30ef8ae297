/// Lexical errors.
///
/// Defines the failures the tokenizer can raise while scanning source text:
/// characters outside the language, malformed range symbols and integer
/// literals that do not fit in 64 bits.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while matching the token stream
/// against the initializer grammar, including trailing input after a complete
/// value and missing separators between initializers.
pub mod parse_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Any failure produced while turning source text into a token list, an AST or
/// a materialized value.
///
/// The tokenizer and the parser share this type so that a single `Result`
/// flows from the innermost token pull up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The source text could not be split into tokens.
    Lex(LexError),
    /// The tokens do not form a valid initializer.
    Parse(ParseError),
}

impl Error {
    /// Returns `true` if this is a lexical error.
    #[must_use]
    pub const fn is_lex(&self) -> bool {
        matches!(self, Self::Lex(..))
    }

    /// Returns `true` if this is a syntax error.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(..))
    }
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Self::Lex(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "[lexer] {e}"),
            Self::Parse(e) => write!(f, "[parser] {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}
