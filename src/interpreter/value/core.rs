use serde::Serialize;

/// Represents a materialized initializer.
///
/// A bare number materializes to [`Value::Integer`]; a brace group
/// materializes to [`Value::Array`], whose elements are themselves values.
/// Every position of an array holds a concrete value: gaps left by designated
/// initializers are filled with `Integer(0)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// A non-negative integer.
    Integer(u64),
    /// An ordered array of values, indexed from 0.
    Array(Vec<Self>),
}

impl Default for Value {
    fn default() -> Self {
        Self::Integer(0)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::Integer(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(v)
    }
}

impl<const N: usize> From<[u64; N]> for Value {
    fn from(v: [u64; N]) -> Self {
        Self::Array(v.into_iter().map(Self::Integer).collect())
    }
}

impl Value {
    /// Returns the integer if the value is [`Integer`](Self::Integer).
    ///
    /// # Example
    /// ```
    /// use arrinit::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_integer(), Some(10));
    /// assert_eq!(Value::Array(vec![]).as_integer(), None);
    /// ```
    #[must_use]
    pub const fn as_integer(&self) -> Option<u64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Array(_) => None,
        }
    }

    /// Returns the elements if the value is [`Array`](Self::Array).
    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(a) => Some(a),
            Self::Integer(_) => None,
        }
    }

    /// Number of values stored in this value, counting every nested array
    /// and every integer once.
    ///
    /// # Example
    /// ```
    /// use arrinit::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(3).cell_count(), 1);
    /// assert_eq!(Value::from(vec![Value::from([1, 2]), Value::Integer(3)]).cell_count(), 5);
    /// ```
    #[must_use]
    pub fn cell_count(&self) -> usize {
        match self {
            Self::Integer(_) => 1,
            Self::Array(a) => a.iter().fold(1, |acc, v| acc.saturating_add(v.cell_count())),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Array(a) => {
                write!(f, "[")?;

                for (index, value) in a.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
        }
    }
}
