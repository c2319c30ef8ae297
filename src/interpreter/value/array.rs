use std::ops::RangeInclusive;

use crate::interpreter::value::core::Value;

/// A growable array that is filled in initializer order.
///
/// Positional writes append at the current length. Range writes first grow
/// the array with `0` up to the highest targeted index and then overwrite
/// every targeted slot, so a later initializer always wins over an earlier
/// one at the same index.
///
/// ## Example
/// ```
/// use arrinit::interpreter::value::{array::SparseArray, core::Value};
///
/// let mut array = SparseArray::new();
/// array.push(Value::Integer(1));
/// array.fill(3..=4, &Value::Integer(7));
/// array.fill(0..=0, &Value::Integer(9));
///
/// assert_eq!(array.into_value(), Value::from([9, 0, 0, 7, 7]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseArray {
    elements: Vec<Value>,
}

impl SparseArray {
    /// Creates an empty array.
    #[must_use]
    pub const fn new() -> Self {
        Self { elements: Vec::new() }
    }

    /// Appends `value` at the next trailing index.
    pub fn push(&mut self, value: Value) {
        self.elements.push(value);
    }

    /// Number of values [`fill`](Self::fill) would write: the zeros padding
    /// the gap before the range plus one copy of `value` per targeted slot.
    #[must_use]
    pub fn fill_cost(&self, indices: &RangeInclusive<usize>, value: &Value) -> usize {
        let (start, end) = ordered((*indices.start(), *indices.end()));
        let gap = start.saturating_sub(self.elements.len());
        let width = (end - start).saturating_add(1);
        width.saturating_mul(value.cell_count()).saturating_add(gap)
    }

    /// Writes `value` into every index of `indices`, growing the array with
    /// zeros first if it does not reach that far. Reversed bounds cover the
    /// same indices as their ascending form.
    pub fn fill(&mut self, indices: RangeInclusive<usize>, value: &Value) {
        let (start, end) = ordered(indices.into_inner());
        if self.elements.len() <= end {
            self.elements.resize(end + 1, Value::default());
        }
        self.elements[start..=end].fill(value.clone());
    }

    /// Finishes construction.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Array(self.elements)
    }
}

fn ordered((a, b): (usize, usize)) -> (usize, usize) {
    (a.min(b), a.max(b))
}
