/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between the `u64`
/// literals produced by the lexer and the `usize` positions used to index
/// materialized arrays, without risking silent truncation.
pub mod num;
