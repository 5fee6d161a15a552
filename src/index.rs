//! Index arithmetic for the implicit binary tree
//!
//! A heap stored in an array places the children of slot `i` at `2i + 1`
//! and `2i + 2`. These helpers are public so that callers drawing or
//! walking the tree can compute the same relationships the heap uses.

/// Returns the parent slot of `index`
///
/// Only meaningful for `index > 0`; the root has no parent.
///
/// ```rust
/// use indexed_binary_heap::index::parent;
///
/// assert_eq!(parent(1), 0);
/// assert_eq!(parent(2), 0);
/// assert_eq!(parent(6), 2);
/// ```
#[inline]
pub const fn parent(index: usize) -> usize {
    debug_assert!(index > 0, "the root has no parent");
    (index - 1) / 2
}

/// Returns the left child slot of `index`
#[inline]
pub const fn left(index: usize) -> usize {
    2 * index + 1
}

/// Returns the right child slot of `index`
#[inline]
pub const fn right(index: usize) -> usize {
    2 * index + 2
}
