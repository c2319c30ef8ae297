use std::ops::Range;

use logos::Logos;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::trace;

use crate::error::LexError;

/// Raw lexical symbols recognized by the scanner.
///
/// This is the `logos` layer of the tokenizer. It knows nothing about the
/// trailing-comma rule; [`Tokenizer`] turns symbols into [`Token`]s and
/// decides whether a comma is a separator or the optional trailing comma.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
enum Symbol {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_number)]
    Number(u64),
    /// `=`
    #[token("=")]
    Equal,
    /// `,`
    #[token(",")]
    Comma,
    /// `[`
    #[token("[")]
    LSquare,
    /// `]`
    #[token("]")]
    RSquare,
    /// `{`
    #[token("{")]
    LCurly,
    /// `}`
    #[token("}")]
    RCurly,
    /// `...`; any other run of dots is rejected.
    #[regex(r"\.+", |lex| lex.slice().len() == 3)]
    Range,
    /// Line breaks only bump the line counter.
    #[regex(r"\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Any other Unicode whitespace.
    #[regex(r"[\s--\n]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Debug, Default, Clone)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` when the digits do not fit in a `u64`, which makes the
/// scanner report an error for the whole digit run.
fn parse_number(lex: &logos::Lexer<Symbol>) -> Option<u64> {
    lex.slice().parse().ok()
}

/// The kind of a lexical token, together with the parsed value for numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A non-negative integer literal.
    Number(u64),
    /// `[`
    LSquare,
    /// `]`
    RSquare,
    /// `=`
    Equal,
    /// `...`
    Range,
    /// `,` separating two initializers.
    Comma,
    /// `,` whose next token is `}`: the optional trailing comma.
    EndComma,
    /// `{`
    LCurly,
    /// `}`
    RCurly,
    /// End of input. Returned forever once the source is exhausted.
    Eof,
}

impl TokenKind {
    /// Upper-case name of the kind, as used in diagnostics and token dumps.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Number(_) => "NUMBER",
            Self::LSquare => "LSQUARE",
            Self::RSquare => "RSQUARE",
            Self::Equal => "EQUAL",
            Self::Range => "RANGE",
            Self::Comma => "COMMA",
            Self::EndComma => "ENDCOMMA",
            Self::LCurly => "LCURLY",
            Self::RCurly => "RCURLY",
            Self::Eof => "EOF",
        }
    }

    /// Compares kinds while ignoring the value carried by `Number`.
    ///
    /// ## Example
    /// ```
    /// use arrinit::interpreter::lexer::TokenKind;
    ///
    /// assert!(TokenKind::Number(1).same_kind(&TokenKind::Number(7)));
    /// assert!(!TokenKind::Comma.same_kind(&TokenKind::EndComma));
    /// ```
    #[must_use]
    pub fn same_kind(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the
/// [`Tokenizer`]. Besides its kind it keeps the exact source text it was
/// scanned from and where that text lives, so that diagnostics can point at
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind:   TokenKind,
    /// The raw source text of the token. Empty for `EOF`.
    pub lexeme: String,
    /// Byte range of the lexeme in the source.
    pub span:   Range<usize>,
    /// Line on which the token starts, counting from 1.
    pub line:   usize,
}

impl Token {
    /// Returns `true` for the end-of-input token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_eof() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}({})", self.kind, self.lexeme)
        }
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Token", 2)?;
        state.serialize_field("kind", self.kind.name())?;
        state.serialize_field("lexeme", &self.lexeme)?;
        state.end()
    }
}

/// Pull-based tokenizer over a source string.
///
/// Each call to [`Tokenizer::next_token`] scans exactly one token. Whitespace
/// separates tokens and is otherwise ignored. A comma is reported as
/// [`TokenKind::EndComma`] when the next token is `}`, which lets the parser
/// accept a trailing comma without looking more than one token ahead.
///
/// ## Example
/// ```
/// use arrinit::interpreter::lexer::{TokenKind, Tokenizer};
///
/// let mut tokenizer = Tokenizer::new("{1, }");
/// let kinds: Vec<TokenKind> = (0..5).map(|_| tokenizer.next_token().unwrap().kind)
///                                   .collect();
///
/// assert_eq!(kinds,
///            [TokenKind::LCurly,
///             TokenKind::Number(1),
///             TokenKind::EndComma,
///             TokenKind::RCurly,
///             TokenKind::Eof]);
/// ```
#[derive(Clone)]
pub struct Tokenizer<'src> {
    symbols: logos::Lexer<'src, Symbol>,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { symbols: Symbol::lexer_with_extras(source, LexerExtras { line: 1 }) }
    }

    /// Scans and returns the next token.
    ///
    /// Once the input is exhausted every call returns an `EOF` token.
    ///
    /// # Errors
    /// - `LexError::UnexpectedCharacter` for characters outside the language.
    /// - `LexError::InvalidRange` for a run of dots other than `...`.
    /// - `LexError::NumberTooLarge` for literals that overflow a `u64`.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let Some(result) = self.symbols.next() else {
            return Ok(self.eof());
        };

        let span = self.symbols.span();
        let lexeme = self.symbols.slice();
        let line = self.symbols.extras.line;

        let kind = match result {
            Ok(Symbol::Number(n)) => TokenKind::Number(n),
            Ok(Symbol::Equal) => TokenKind::Equal,
            Ok(Symbol::Comma) if self.closes_aggregate() => TokenKind::EndComma,
            Ok(Symbol::Comma) => TokenKind::Comma,
            Ok(Symbol::LSquare) => TokenKind::LSquare,
            Ok(Symbol::RSquare) => TokenKind::RSquare,
            Ok(Symbol::LCurly) => TokenKind::LCurly,
            Ok(Symbol::RCurly) => TokenKind::RCurly,
            Ok(Symbol::Range) => TokenKind::Range,
            // Both are skipped by their callbacks and never surface.
            Ok(Symbol::NewLine | Symbol::Ignored) => return self.next_token(),
            Err(()) => return Err(scan_error(lexeme, span.start, line)),
        };

        let token = Token { kind,
                            lexeme: lexeme.to_string(),
                            span,
                            line };
        trace!(%token, "scanned token");

        Ok(token)
    }

    /// Looks at the symbol after the current one without consuming it.
    fn closes_aggregate(&self) -> bool {
        let mut ahead = self.symbols.clone();
        matches!(ahead.next(), Some(Ok(Symbol::RCurly)))
    }

    fn eof(&self) -> Token {
        let end = self.symbols.source().len();
        Token { kind:   TokenKind::Eof,
                lexeme: String::new(),
                span:   end..end,
                line:   self.symbols.extras.line, }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) if token.is_eof() => None,
            result => Some(result),
        }
    }
}

/// Classifies a slice the scanner could not turn into a symbol.
fn scan_error(lexeme: &str, position: usize, line: usize) -> LexError {
    if lexeme.starts_with('.') {
        LexError::InvalidRange { lexeme: lexeme.to_string(),
                                 position,
                                 line }
    } else if lexeme.starts_with(|c: char| c.is_ascii_digit()) {
        LexError::NumberTooLarge { lexeme: lexeme.to_string(),
                                   position,
                                   line }
    } else {
        LexError::UnexpectedCharacter { character: lexeme.chars().next().unwrap_or('\u{fffd}'),
                                        position,
                                        line }
    }
}

/// Splits `source` into tokens, excluding the terminal `EOF`.
///
/// # Errors
/// Returns the first `LexError` encountered while scanning.
///
/// # Examples
/// ```
/// use arrinit::interpreter::lexer::tokenize;
///
/// let tokens = tokenize("{[6...8] = 33,}").unwrap();
/// let dump: Vec<String> = tokens.iter().map(ToString::to_string).collect();
///
/// assert_eq!(dump,
///            ["LCURLY({)", "LSQUARE([)", "NUMBER(6)", "RANGE(...)", "NUMBER(8)",
///             "RSQUARE(])", "EQUAL(=)", "NUMBER(33)", "ENDCOMMA(,)", "RCURLY(})"]);
///
/// assert!(tokenize("1..2").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Tokenizer::new(source).collect()
}
