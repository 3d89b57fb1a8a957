//! Heap-allocated copies of values.
//!
//! Both functions here hand back a [`Box`] that owns its value outright. The
//! box never aliases the caller's storage, so writes on one side are never
//! observed on the other.

/// Moves `value` into a new heap allocation.
///
/// For [`Copy`] types the caller keeps its own, independent copy of `value`.
#[must_use]
pub fn ptr<T>(value: T) -> Box<T> {
    Box::new(value)
}

/// Clones `value` into a new heap allocation, leaving the original with the
/// caller.
#[must_use]
pub fn ptr_to<T: Clone>(value: &T) -> Box<T> {
    Box::new(value.clone())
}
