//! Standard library compatibility layer
//!
//! Conversions and iterator plumbing so an [`ArrayHeap`] can be used the way
//! `std::collections::BinaryHeap` usually is.
//!
//! # Differences from BinaryHeap
//!
//! - **Min-heap vs Max-heap**: `ArrayHeap` pops the smallest element first.
//!   Use [`Reversed`](crate::compare::Reversed) or `std::cmp::Reverse<T>` to
//!   get max-heap behavior.
//! - **Iteration order**: borrowing and owning iterators walk the slots in
//!   heap layout order. Use [`ArrayHeap::into_sorted_vec`] or
//!   [`ArrayHeap::into_iter_sorted`] for ascending order.
//!
//! # Example
//!
//! ```rust
//! use indexed_binary_heap::ArrayHeap;
//!
//! let heap: ArrayHeap<i32> = vec![5, 3, 7, 1].into();
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.into_sorted_vec(), vec![1, 3, 5, 7]);
//!
//! let heap: ArrayHeap<_> = [4, 2, 9].into_iter().collect();
//! let sorted: Vec<_> = heap.into_iter_sorted().collect();
//! assert_eq!(sorted, vec![2, 4, 9]);
//! ```

use std::iter::FusedIterator;
use std::slice;
use std::vec;

use crate::array_heap::ArrayHeap;
use crate::compare::Compare;

impl<T, C: Compare<T>> ArrayHeap<T, C> {
    /// Builds a heap from an unordered vector in O(n)
    ///
    /// The vector's allocation is reused as the heap buffer.
    pub fn from_vec_with_comparator(data: Vec<T>, cmp: C) -> Self {
        let mut heap = Self { data, cmp };
        heap.heapify();
        debug_assert!(heap.is_valid_heap());
        heap
    }

    /// Returns the active elements in slot order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns an iterator over the active elements in slot order
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap, returning its elements in slot order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its elements in ascending order
    ///
    /// # Time Complexity
    /// O(n log n)
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        sorted.extend(self.into_iter_sorted());
        sorted
    }

    /// Consumes the heap, returning an iterator that pops in ascending order
    pub fn into_iter_sorted(self) -> IntoIterSorted<T, C> {
        IntoIterSorted { heap: self }
    }
}

/// An owning iterator that yields elements smallest first
///
/// Created by [`ArrayHeap::into_iter_sorted`].
#[derive(Clone, Debug)]
pub struct IntoIterSorted<T, C> {
    heap: ArrayHeap<T, C>,
}

impl<T, C: Compare<T>> Iterator for IntoIterSorted<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, C: Compare<T>> ExactSizeIterator for IntoIterSorted<T, C> {}

impl<T, C: Compare<T>> FusedIterator for IntoIterSorted<T, C> {}

impl<T: Ord> From<Vec<T>> for ArrayHeap<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec_with_comparator(data, Default::default())
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for ArrayHeap<T> {
    fn from(items: [T; N]) -> Self {
        Self::from(Vec::from(items))
    }
}

impl<T, C> From<ArrayHeap<T, C>> for Vec<T> {
    /// Returns the elements in slot order
    fn from(heap: ArrayHeap<T, C>) -> Self {
        heap.data
    }
}

impl<T: Ord> FromIterator<T> for ArrayHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T, C: Compare<T>> Extend<T> for ArrayHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.ensure_capacity(self.len() + lower);
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a, C: Compare<T>> Extend<&'a T> for ArrayHeap<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, C> IntoIterator for ArrayHeap<T, C> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    /// Yields the elements in slot order, not sorted order
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a ArrayHeap<T, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
