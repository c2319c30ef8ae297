/// Sparse array construction.
///
/// Defines the `SparseArray` used while an aggregate is being materialized:
/// positional values are appended, designated values grow the array with
/// zeros and overwrite the targeted range.
pub mod array;

pub mod core;
