/// Token stream, parse entry point and shared result type.
///
/// Holds the single token of lookahead the grammar needs, turns lexer
/// failures into parse failures and rejects input left over after the
/// top-level value.
pub mod core;

/// Recursive descent over the `val`, `initializers` and `initializer`
/// productions.
pub mod initializer;

/// Output construction.
///
/// The grammar functions report what they recognize to a `Builder`; one
/// builder records an AST, the other materializes arrays on the fly.
pub mod builder;

/// Helpers for the bracketed designator of an indexed initializer.
pub mod utils;
