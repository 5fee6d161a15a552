//! Common traits for indexed heaps
//!
//! [`IndexedHeap`] is the capability set a caller needs from a heap whose
//! slots can be inspected and removed by position, not only at the root.
//! Code that draws or edits a heap (walking parent/child slots, deleting the
//! element a user picked) can be written against this trait instead of a
//! concrete type.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The position does not name an active slot
    IndexOutOfBounds {
        /// The requested position
        index: usize,
        /// The number of active elements at the time of the call
        len: usize,
    },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::IndexOutOfBounds { index, len } => {
                write!(f, "heap index {} out of range for length {}", index, len)
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// A binary min-heap whose slots are addressable by position
///
/// Positions are raw array slots in `[0, len)`. They follow the heap layout,
/// not sorted order: slot 0 holds the minimum, and the children of slot `i`
/// live at [`left(i)`](crate::index::left) and [`right(i)`](crate::index::right).
/// Any mutation may move elements between slots, so a position is only
/// meaningful until the next mutating call.
///
/// # Example
///
/// ```rust
/// use indexed_binary_heap::{ArrayHeap, IndexedHeap};
///
/// fn drop_evens<H: IndexedHeap<i32>>(heap: &mut H) -> bool {
///     heap.remove_if(|x| x % 2 == 0)
/// }
///
/// let mut heap: ArrayHeap<i32> = ArrayHeap::new();
/// for x in [4, 1, 3, 2] {
///     heap.insert(x);
/// }
/// assert!(drop_evens(&mut heap));
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.pop(), Some(3));
/// ```
pub trait IndexedHeap<T> {
    /// Returns the number of active elements
    fn len(&self) -> usize;

    /// Returns true if the heap holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts an element
    ///
    /// Always returns `true`; capacity grows as needed.
    ///
    /// # Time Complexity
    /// O(log n), amortized O(1) for growth
    fn insert(&mut self, item: T) -> bool;

    /// Returns the minimum element without removing it
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the minimum element
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;

    /// Returns the first slot holding an element equal to `item`
    ///
    /// # Time Complexity
    /// O(n): a linear scan of the active slots
    fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Returns true if some slot holds an element equal to `item`
    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(item).is_some()
    }

    /// Returns the element in slot `index`
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    fn get(&self, index: usize) -> &T;

    /// Removes and returns the element in slot `index`
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    ///
    /// # Time Complexity
    /// O(log n)
    fn remove_at(&mut self, index: usize) -> T;

    /// Removes every element, keeping the allocated capacity
    fn clear(&mut self);

    /// Removes every element for which `predicate` returns true
    ///
    /// Returns `false` (and leaves the layout untouched) if nothing matched.
    ///
    /// # Time Complexity
    /// O(n)
    fn remove_if<F>(&mut self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool;

    /// Calls `visitor` once per element, in slot order
    fn for_each<F>(&self, visitor: F)
    where
        F: FnMut(&T);
}
