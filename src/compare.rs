//! Comparators for heap ordering
//!
//! An [`ArrayHeap`](crate::ArrayHeap) is ordered by a comparator chosen once at
//! construction. Any closure `Fn(&T, &T) -> Ordering` works as a comparator,
//! and [`Natural`] covers the common case of an `Ord` element type.
//!
//! # Example
//!
//! ```rust
//! use std::cmp::Ordering;
//! use indexed_binary_heap::compare::{Compare, Natural, Reversed};
//!
//! assert_eq!(Natural.compare(&1, &2), Ordering::Less);
//! assert_eq!(Reversed(Natural).compare(&1, &2), Ordering::Greater);
//!
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! assert_eq!(by_len.compare(&"abc", &"de"), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// A total order over `T`
///
/// The order must stay fixed for as long as a heap uses it. A comparator
/// whose answers change while elements are stored leaves the heap in an
/// unspecified (but memory-safe) arrangement.
pub trait Compare<T: ?Sized> {
    /// Compares two elements
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns true if `a` orders strictly before `b`
    fn less(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders elements by their `Ord` implementation (smallest first)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Inverts another comparator, turning a min-heap into a max-heap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}
