/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces tokens on demand: numbers,
/// brackets, braces, `=`, the `...` range symbol and the two kinds of comma.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, lexeme, span
///   and line.
/// - Tells a separating comma from a trailing comma by looking one token ahead.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module matches tokens against the initializer grammar.
///
/// The parser pulls tokens from the lexer one at a time and descends through
/// the `val`, `initializers` and `initializer` rules, reporting each construct
/// to a builder that produces either an AST or a materialized value.
///
/// # Responsibilities
/// - Validates the grammar, reporting errors with the offending token.
/// - Rejects input left over after the top-level value.
/// - Keeps the output shape independent from the grammar walk.
pub mod parser;
/// The value module defines the materialized result of an initializer.
///
/// # Responsibilities
/// - Defines the `Value` enum: an integer or a nested array.
/// - Implements sparse, zero-filled array growth for designated writes.
pub mod value;
