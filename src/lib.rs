//! # arrinit
//!
//! arrinit parses C-style array initializer literals such as
//! `{22, [6...8] = 33, [4] = {99}}`. A source string can be turned into its
//! tokens, into an abstract syntax tree that mirrors the grammar, or into the
//! array it describes, with zero-filled gaps, inclusive range fills and
//! last-writer-wins overlaps.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::{
    ast::Ast,
    config::ParserConfig,
    error::Error,
    interpreter::{
        lexer::{Token, tokenize},
        parser::{
            builder::{ArrayBuilder, AstBuilder},
            core::parse_program,
        },
        value::core::Value,
    },
};

/// Defines the structure of parsed initializers.
///
/// This module declares the `Ast` enum, the grammar tags of its nodes and the
/// `Designator` of an indexed initializer. The AST is produced by the parser
/// when the caller asks for a tree instead of a value.
pub mod ast;
/// Parser limits.
///
/// Holds the `ParserConfig` that bounds how large the materialized array may
/// grow and how deeply initializers may nest.
pub mod config;
/// Provides unified error types for lexing and parsing.
///
/// This module defines the errors raised while scanning or parsing source
/// text. Each carries enough location information to point at the failure.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser).
/// - Attaches positions, line numbers and offending tokens for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates lexing, parsing and materialization.
///
/// # Responsibilities
/// - Coordinates the lexer, the parser and the value types.
/// - Manages the flow of tokens and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// What [`parse`] should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// The materialized value.
    #[default]
    Array,
    /// The abstract syntax tree.
    Ast,
    /// The token list, without the terminal `EOF`.
    Tokens,
}

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "array" => Ok(Self::Array),
            "ast" => Ok(Self::Ast),
            "tokens" => Ok(Self::Tokens),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Array => "array",
            Self::Ast => "ast",
            Self::Tokens => "tokens",
        };
        write!(f, "{name}")
    }
}

/// A mode name other than `array`, `ast` or `tokens`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl std::fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown mode {:?}, expected one of: array, ast, tokens.", self.0)
    }
}

impl std::error::Error for UnknownMode {}

/// The result of [`parse`], shaped by the requested [`Mode`].
///
/// Serializes as the inner value, without a wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Output {
    /// Produced by [`Mode::Array`].
    Value(Value),
    /// Produced by [`Mode::Ast`].
    Ast(Ast),
    /// Produced by [`Mode::Tokens`].
    Tokens(Vec<Token>),
}

/// Parses `source` with the default [`ParserConfig`].
///
/// # Errors
/// Returns `Error::Lex` if the source cannot be tokenized and `Error::Parse`
/// if the tokens do not form exactly one initializer value.
///
/// # Examples
/// ```
/// use arrinit::{Mode, Output, interpreter::value::core::Value, parse};
///
/// let out = parse("{1, [4] = 9, [2...1] = 5}", Mode::Array).unwrap();
/// assert_eq!(out, Output::Value(Value::from([1, 5, 5, 0, 9])));
///
/// // Two initializers need a comma between them.
/// assert!(parse("{1 2}", Mode::Array).is_err());
/// ```
pub fn parse(source: &str, mode: Mode) -> Result<Output, Error> {
    parse_with(source, mode, &ParserConfig::default())
}

/// Parses `source` with an explicit configuration.
///
/// # Errors
/// See [`parse`]. Additionally fails with
/// - `ParseError::IndexTooLarge` when a designator reaches
///   `config.max_array_len`,
/// - `ParseError::ArrayTooLarge` when materializing writes more than
///   `config.max_array_len` values,
/// - `ParseError::NestingTooDeep` when more than `config.max_depth` brace
///   groups are open at once.
pub fn parse_with(source: &str, mode: Mode, config: &ParserConfig) -> Result<Output, Error> {
    debug!(%mode, len = source.len(), "parsing");

    let output = match mode {
        Mode::Tokens => Output::Tokens(tokenize(source)?),
        Mode::Ast => Output::Ast(parse_program(source, config, &mut AstBuilder)?),
        Mode::Array => {
            let mut builder = ArrayBuilder::new(config.max_array_len);
            Output::Value(parse_program(source, config, &mut builder)?)
        },
    };

    debug!(%mode, "parsed");
    Ok(output)
}

/// Parses `source` and materializes it.
///
/// # Errors
/// See [`parse`].
///
/// # Examples
/// ```
/// use arrinit::{interpreter::value::core::Value, parse_value};
///
/// assert_eq!(parse_value("7").unwrap(), Value::Integer(7));
/// assert_eq!(parse_value("{}").unwrap(), Value::Array(vec![]));
/// ```
pub fn parse_value(source: &str) -> Result<Value, Error> {
    let config = ParserConfig::default();
    parse_program(source, &config, &mut ArrayBuilder::new(config.max_array_len))
}

/// Parses `source` into its abstract syntax tree.
///
/// # Errors
/// See [`parse`].
///
/// # Examples
/// ```
/// use arrinit::parse_ast;
///
/// let tree = parse_ast("{[2] = 5}").unwrap();
/// assert_eq!(tree.to_string(),
///            "(val (initializers (initializer (designator 2) (val 5))))");
/// ```
pub fn parse_ast(source: &str) -> Result<Ast, Error> {
    parse_program(source, &ParserConfig::default(), &mut AstBuilder)
}
