//! Edge case proofs
//!
//! - Empty heap operations
//! - Single element removal
//! - Removal of the last slot

#[cfg(kani)]
use indexed_binary_heap::ArrayHeap;

/// Proof: Empty heap operations return None instead of faulting
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(5)]
fn verify_empty_heap_operations() {
    let mut heap: ArrayHeap<u32> = ArrayHeap::new();

    assert!(heap.is_empty());
    assert!(heap.len() == 0);
    assert!(heap.peek().is_none());
    assert!(heap.pop().is_none());
    assert!(heap.try_get(0).is_err());
    assert!(heap.try_remove_at(0).is_err());
    assert!(!heap.remove_if(|_| true));
}

/// Proof: Removing slot 0 of a single-element heap empties it
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(5)]
fn verify_single_element_remove_at() {
    let mut heap: ArrayHeap<u32> = ArrayHeap::new();
    let value: u32 = kani::any();

    heap.push(value);
    assert!(heap.remove_at(0) == value);
    assert!(heap.is_empty());
}

/// Proof: Removing the last slot leaves every other slot untouched
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_last_slot_removal_is_truncation() {
    let mut heap: ArrayHeap<u32> = ArrayHeap::new();
    heap.push(kani::any());
    heap.push(kani::any());
    heap.push(kani::any());

    let before = heap.clone();
    let last = heap.len() - 1;
    let removed = heap.remove_at(last);

    assert!(removed == *before.get(last));
    assert!(heap.as_slice() == &before.as_slice()[..last]);
}
