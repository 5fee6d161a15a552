//! Indexed Binary Heap for Rust
//!
//! This crate provides an array-backed binary min-heap that, beyond the usual
//! priority-queue operations, lets callers look up, read and remove the
//! element stored at any slot of the heap.
//!
//! # Features
//!
//! - **Comparator ordering**: any `Fn(&T, &T) -> Ordering`, or [`Natural`] for `Ord` types
//! - **Positional access**: [`get`](ArrayHeap::get) and [`index_of`](ArrayHeap::index_of)
//!   address raw slots, and [`index`] exposes the parent/child arithmetic
//! - **Arbitrary removal**: [`remove_at`](ArrayHeap::remove_at) repairs the heap in O(log n)
//! - **Bulk removal**: [`remove_if`](ArrayHeap::remove_if) compacts and re-heapifies in O(n)
//! - **Capacity control**: [`ensure_capacity`](ArrayHeap::ensure_capacity) and
//!   [`trim_to_size`](ArrayHeap::trim_to_size)
//!
//! Lookups by value are linear scans. Callers that look elements up often
//! should keep their own value-to-slot bookkeeping next to the heap.
//!
//! The heap is not synchronized; share it across threads only behind a lock.
//!
//! # Example
//!
//! ```rust
//! use indexed_binary_heap::ArrayHeap;
//! use indexed_binary_heap::index::{left, parent};
//!
//! let mut heap = ArrayHeap::new();
//! for x in [5, 3, 8, 1, 9, 6, 2, 4, 7] {
//!     heap.push(x);
//! }
//!
//! // Walk the implicit tree
//! let at = heap.index_of(&4).unwrap();
//! assert!(heap.get(parent(at)) <= heap.get(at));
//! assert!(left(at) >= heap.len() || heap.get(at) <= heap.get(left(at)));
//!
//! // Remove an interior element and everything above 7
//! heap.remove_at(at);
//! heap.remove_if(|x| *x > 7);
//!
//! assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 5, 6, 7]);
//! ```

pub mod array_heap;
pub mod compare;
pub mod index;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main types for convenience
pub use array_heap::ArrayHeap;
pub use compare::{Compare, Natural};
pub use traits::{HeapError, IndexedHeap};
