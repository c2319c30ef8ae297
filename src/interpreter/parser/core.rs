use tracing::debug;

use crate::{
    config::ParserConfig,
    error::{Error, ParseError},
    interpreter::{
        lexer::{Token, TokenKind, Tokenizer},
        parser::{builder::Builder, initializer::parse_val},
    },
};

pub type ParseResult<T> = Result<T, Error>;

/// The parser's view of the input: a tokenizer plus one token of lookahead.
///
/// Tokens are pulled from the [`Tokenizer`] only when the current one is
/// consumed, so a lexical error past a syntax error is never reported.
pub struct TokenStream<'src> {
    tokenizer:     Tokenizer<'src>,
    lookahead:     Token,
    max_array_len: usize,
    depth:         usize,
    max_depth:     usize,
}

impl<'src> TokenStream<'src> {
    /// Scans the first token of `source`.
    ///
    /// # Errors
    /// Returns a lexical error if the first token cannot be scanned.
    pub fn new(source: &'src str, config: &ParserConfig) -> ParseResult<Self> {
        let mut tokenizer = Tokenizer::new(source);
        let lookahead = tokenizer.next_token()?;

        Ok(Self { tokenizer,
                  lookahead,
                  max_array_len: config.max_array_len,
                  depth: 0,
                  max_depth: config.max_depth })
    }

    /// The current token, not yet consumed.
    #[must_use]
    pub const fn peek(&self) -> &Token {
        &self.lookahead
    }

    /// Returns `true` if the current token has the given kind.
    #[must_use]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.lookahead.kind.same_kind(kind)
    }

    /// Consumes the current token and returns it.
    ///
    /// # Errors
    /// Returns a lexical error if the following token cannot be scanned.
    pub fn advance(&mut self) -> ParseResult<Token> {
        let next = self.tokenizer.next_token()?;
        Ok(std::mem::replace(&mut self.lookahead, next))
    }

    /// Consumes the current token if it has the given kind.
    ///
    /// # Errors
    /// - `ParseError::UnexpectedToken` naming `kind` if the current token
    ///   differs.
    /// - A lexical error if the following token cannot be scanned.
    pub fn expect(&mut self, kind: &TokenKind) -> ParseResult<Token> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(self.unexpected(kind.name()))
        }
    }

    /// Builds an `UnexpectedToken` error at the current token.
    #[must_use]
    pub fn unexpected(&self, expected: &str) -> Error {
        ParseError::UnexpectedToken { expected: expected.to_string(),
                                      found:    self.lookahead.clone(), }.into()
    }

    /// Records that a brace group is about to be opened at the current token.
    ///
    /// # Errors
    /// Returns `ParseError::NestingTooDeep` if `max_depth` groups are already
    /// open.
    pub fn enter(&mut self) -> ParseResult<()> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep { found: self.lookahead.clone(),
                                                    limit: self.max_depth, }.into());
        }

        self.depth += 1;
        Ok(())
    }

    /// Records that the innermost brace group was closed.
    pub const fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Exclusive upper bound on designator indices.
    #[must_use]
    pub const fn max_array_len(&self) -> usize {
        self.max_array_len
    }
}

/// Parses a complete program: exactly one `val` followed by end of input.
///
/// This is the entry point for parsing. What gets built is decided by
/// `builder`; the grammar and its errors are the same for every builder.
///
/// Grammar: `program := val EOF`
///
/// # Errors
/// - Any lexical or syntax error raised while parsing the value.
/// - `ParseError::TrailingInput` if tokens remain after the value.
pub fn parse_program<B: Builder>(source: &str,
                                 config: &ParserConfig,
                                 builder: &mut B)
                                 -> ParseResult<B::Output> {
    let mut tokens = TokenStream::new(source, config)?;

    let value = parse_val(&mut tokens, builder)?;

    if !tokens.peek().is_eof() {
        debug!(token = %tokens.peek(), "input left after the top-level value");
        return Err(ParseError::TrailingInput { found: tokens.peek().clone() }.into());
    }

    Ok(value)
}
