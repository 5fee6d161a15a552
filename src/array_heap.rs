//! Array-backed binary min-heap with positional access
//!
//! [`ArrayHeap`] stores its elements in a single growable buffer laid out as
//! an implicit binary tree. On top of the usual push/peek/pop it supports
//! looking up, reading and removing the element at any slot, and bulk
//! conditional removal.
//!
//! # Time Complexity
//!
//! | Operation   | Complexity            |
//! |-------------|-----------------------|
//! | `push`      | O(log n), amortized   |
//! | `peek`      | O(1)                  |
//! | `pop`       | O(log n)              |
//! | `get`       | O(1)                  |
//! | `index_of`  | O(n)                  |
//! | `remove_at` | O(log n)              |
//! | `remove_if` | O(n)                  |
//!
//! # Removing an interior slot
//!
//! [`remove_at`](ArrayHeap::remove_at) fills the vacated slot with the last
//! element. That element came from another subtree, so it may be larger than
//! the children of its new slot or smaller than its new parent. It is sifted
//! down first; only if it did not move is it sifted up. At most one of the
//! two directions can move it.
//!
//! # Equality
//!
//! Two heaps compare equal when they hold equal elements in the same slots.
//! This is positional: heaps holding the same multiset built by different
//! insertion orders can compare unequal. `Hash` and `Display` follow the same
//! slot sequence.
//!
//! # Example
//!
//! ```rust
//! use indexed_binary_heap::ArrayHeap;
//!
//! let mut heap = ArrayHeap::new();
//! for x in [5, 3, 8, 1, 9] {
//!     heap.push(x);
//! }
//!
//! let at = heap.index_of(&8).unwrap();
//! assert_eq!(heap.remove_at(at), 8);
//!
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), Some(5));
//! assert_eq!(heap.pop(), Some(9));
//! assert_eq!(heap.pop(), None);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::compare::{Compare, Natural};
use crate::index::{left, parent, right};
use crate::traits::{HeapError, IndexedHeap};

/// Below this many elements, growth doubles the requested capacity
const SMALL_HEAP_THRESHOLD: usize = 64;

/// A binary min-heap ordered by a comparator, with slot-level access
///
/// The element in slot 0 is always the minimum under `C`. The comparator is
/// fixed at construction; elements are otherwise treated as opaque.
///
/// Closures passed to [`remove_if`](Self::remove_if) and
/// [`for_each`](Self::for_each) only receive shared references, so the heap
/// cannot be mutated while one of them is running.
pub struct ArrayHeap<T, C = Natural> {
    /// Active elements in heap order; spare capacity lives past `len()`
    pub(crate) data: Vec<T>,
    pub(crate) cmp: C,
}

impl<T: Ord> ArrayHeap<T> {
    /// Creates an empty heap ordered by `T`'s `Ord` implementation
    ///
    /// No buffer is allocated until the first push.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Natural)
    }
}

impl<T, C: Compare<T>> ArrayHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    ///
    /// ```rust
    /// use indexed_binary_heap::ArrayHeap;
    ///
    /// let mut heap = ArrayHeap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// heap.push(1);
    /// heap.push(7);
    /// assert_eq!(heap.peek(), Some(&7));
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            data: Vec::new(),
            cmp,
        }
    }

    /// Creates an empty heap ordered by `cmp` with room for `capacity` elements
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Returns the comparator ordering this heap
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the number of active elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the buffer can hold without growing
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Grows the buffer so it can hold at least `min_capacity` elements
    ///
    /// When growth is needed, small requests (below 64) are doubled and
    /// larger ones get half again on top, so repeated pushes stay amortized
    /// O(1) without over-allocating large heaps.
    pub fn ensure_capacity(&mut self, min_capacity: usize) {
        if min_capacity <= self.data.capacity() {
            return;
        }
        let new_capacity = if min_capacity < SMALL_HEAP_THRESHOLD {
            min_capacity * 2
        } else {
            min_capacity.saturating_add(min_capacity / 2)
        };
        self.data.reserve_exact(new_capacity - self.data.len());
    }

    /// Shrinks the buffer to hold exactly the active elements
    pub fn trim_to_size(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Inserts an element
    pub fn push(&mut self, item: T) {
        let index = self.data.len();
        self.ensure_capacity(index + 1);
        self.data.push(item);
        self.sift_up(index);
    }

    /// Returns the minimum element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes and returns the minimum element
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let result = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(result)
    }

    /// Returns a reference to the element in slot `index`
    ///
    /// # Panics
    /// Panics if `index >= len()`. Use [`try_get`](Self::try_get) to get an
    /// error instead.
    pub fn get(&self, index: usize) -> &T {
        match self.try_get(index) {
            Ok(item) => item,
            Err(err) => panic!("{}", err),
        }
    }

    /// Returns a reference to the element in slot `index`, or an error if the
    /// slot is not active
    pub fn try_get(&self, index: usize) -> Result<&T, HeapError> {
        self.data.get(index).ok_or(HeapError::IndexOutOfBounds {
            index,
            len: self.data.len(),
        })
    }

    /// Removes and returns the element in slot `index`
    ///
    /// # Panics
    /// Panics if `index >= len()`. Use [`try_remove_at`](Self::try_remove_at)
    /// to get an error instead.
    pub fn remove_at(&mut self, index: usize) -> T {
        match self.try_remove_at(index) {
            Ok(item) => item,
            Err(err) => panic!("{}", err),
        }
    }

    /// Removes and returns the element in slot `index`, or returns an error
    /// without touching the heap if the slot is not active
    pub fn try_remove_at(&mut self, index: usize) -> Result<T, HeapError> {
        let len = self.data.len();
        if index >= len {
            return Err(HeapError::IndexOutOfBounds { index, len });
        }

        // The last element moves into `index`; when `index` was the last
        // slot there is nothing to repair.
        let removed = self.data.swap_remove(index);
        if index < self.data.len() && self.sift_down(index) == index {
            self.sift_up(index);
        }
        Ok(removed)
    }

    /// Removes every element, keeping the allocated capacity
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Removes every element for which `predicate` returns true
    ///
    /// Survivors keep their relative slot order, then the whole heap is
    /// rebuilt, since compaction can put any survivor under any other.
    /// Returns `false` if nothing matched, in which case no slot moves.
    pub fn remove_if<F>(&mut self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.data.len();
        self.data.retain(|item| !predicate(item));
        if self.data.len() == before {
            return false;
        }

        self.heapify();
        debug_assert!(self.is_valid_heap());
        true
    }

    /// Calls `visitor` once per element, in slot order
    ///
    /// Slot order is the heap layout, not sorted order.
    pub fn for_each<F>(&self, visitor: F)
    where
        F: FnMut(&T),
    {
        self.data.iter().for_each(visitor);
    }

    /// Returns true if every element is no smaller than its parent
    pub fn is_valid_heap(&self) -> bool {
        (1..self.data.len()).all(|i| !self.cmp.less(&self.data[i], &self.data[parent(i)]))
    }

    /// Restores heap order over the whole buffer
    pub(crate) fn heapify(&mut self) {
        for index in (0..self.data.len() / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Moves the element at `index` toward the root while it is smaller than
    /// its parent, returning the slot it ends up in
    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = parent(index);
            if self.cmp.less(&self.data[index], &self.data[parent]) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
        index
    }

    /// Moves the element at `index` toward the leaves while some child is
    /// smaller than it, returning the slot it ends up in
    fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.data.len();
        loop {
            let left = left(index);
            if left >= len {
                break;
            }

            let right = right(index);
            let mut smallest = left;
            if right < len && self.cmp.less(&self.data[right], &self.data[left]) {
                smallest = right;
            }

            if self.cmp.less(&self.data[smallest], &self.data[index]) {
                self.data.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
        index
    }
}

impl<T: PartialEq, C: Compare<T>> ArrayHeap<T, C> {
    /// Returns the first slot holding an element equal to `item`
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.data.iter().position(|x| x == item)
    }

    /// Returns true if some slot holds an element equal to `item`
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Removes one occurrence of `item`, if present
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let index = self.index_of(item)?;
        Some(self.remove_at(index))
    }
}

impl<T, C: Compare<T>> IndexedHeap<T> for ArrayHeap<T, C> {
    fn len(&self) -> usize {
        ArrayHeap::len(self)
    }

    fn insert(&mut self, item: T) -> bool {
        self.push(item);
        true
    }

    fn peek(&self) -> Option<&T> {
        ArrayHeap::peek(self)
    }

    fn pop(&mut self) -> Option<T> {
        ArrayHeap::pop(self)
    }

    fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.data.iter().position(|x| x == item)
    }

    fn get(&self, index: usize) -> &T {
        ArrayHeap::get(self, index)
    }

    fn remove_at(&mut self, index: usize) -> T {
        ArrayHeap::remove_at(self, index)
    }

    fn clear(&mut self) {
        ArrayHeap::clear(self)
    }

    fn remove_if<F>(&mut self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        ArrayHeap::remove_if(self, predicate)
    }

    fn for_each<F>(&self, visitor: F)
    where
        F: FnMut(&T),
    {
        ArrayHeap::for_each(self, visitor)
    }
}

impl<T: Ord> Default for ArrayHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The clone owns a fresh buffer sized to the active elements only
impl<T: Clone, C: Clone> Clone for ArrayHeap<T, C> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        data.extend_from_slice(&self.data);
        Self {
            data,
            cmp: self.cmp.clone(),
        }
    }
}

impl<T: PartialEq, C, D> PartialEq<ArrayHeap<T, D>> for ArrayHeap<T, C> {
    fn eq(&self, other: &ArrayHeap<T, D>) -> bool {
        self.data == other.data
    }
}

impl<T: Eq, C> Eq for ArrayHeap<T, C> {}

impl<T: Hash, C> Hash for ArrayHeap<T, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

impl<T: fmt::Debug, C> fmt::Debug for ArrayHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: fmt::Display, C> fmt::Display for ArrayHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}
