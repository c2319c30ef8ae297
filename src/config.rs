use serde::Deserialize;

/// Default upper bound on the length of any materialized array.
pub const DEFAULT_MAX_ARRAY_LEN: usize = 1 << 20;

/// Default upper bound on how deeply brace groups may nest.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Knobs that bound the work a single parse may do.
///
/// Missing fields fall back to their defaults when deserialized, so an empty
/// document yields [`ParserConfig::default`].
///
/// ## Example
/// ```
/// use arrinit::config::{DEFAULT_MAX_ARRAY_LEN, DEFAULT_MAX_DEPTH, ParserConfig};
///
/// let config = ParserConfig::default();
/// assert_eq!(config.max_array_len, DEFAULT_MAX_ARRAY_LEN);
/// assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
///
/// let config = ParserConfig::with_max_array_len(8).with_max_depth(2);
/// assert_eq!(config.max_array_len, 8);
/// assert_eq!(config.max_depth, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Designator indices must be strictly below this value, and the number
    /// of elements written while materializing one program may not exceed
    /// it.
    pub max_array_len: usize,
    /// Maximum number of brace groups open at the same time.
    pub max_depth:     usize,
}

impl ParserConfig {
    /// Returns a default configuration with the given array length limit.
    #[must_use]
    pub const fn with_max_array_len(max_array_len: usize) -> Self {
        Self { max_array_len,
               max_depth: DEFAULT_MAX_DEPTH }
    }

    /// Replaces the nesting limit.
    #[must_use]
    pub const fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::with_max_array_len(DEFAULT_MAX_ARRAY_LEN)
    }
}
