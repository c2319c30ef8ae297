/// Converts a `u64` literal into an array index if and only if it is strictly
/// below `limit`.
///
/// The limit bounds how far a single designator may grow an array, so the
/// conversion doubles as the allocation guard for sparse writes.
///
/// ## Parameters
/// - `value`: The literal as scanned from the source.
/// - `limit`: Exclusive upper bound on the resulting index.
///
/// ## Returns
/// - `Some(usize)`: The index if it fits in `usize` and is below `limit`.
/// - `None`: Otherwise.
///
/// ## Example
/// ```
/// use arrinit::util::num::u64_to_index_checked;
///
/// assert_eq!(u64_to_index_checked(4, 10), Some(4));
/// assert_eq!(u64_to_index_checked(10, 10), None);
/// assert_eq!(u64_to_index_checked(u64::MAX, usize::MAX), None);
/// ```
#[must_use]
pub fn u64_to_index_checked(value: u64, limit: usize) -> Option<usize> {
    usize::try_from(value).ok().filter(|index| *index < limit)
}

/// Widens an array index back into the literal type used by the AST.
#[must_use]
pub fn index_to_u64(index: usize) -> u64 {
    u64::try_from(index).unwrap_or(u64::MAX)
}
