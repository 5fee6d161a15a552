//! Heap-order proofs over bounded operation sequences

#[cfg(kani)]
use indexed_binary_heap::ArrayHeap;

/// Proof: remove_at at any slot keeps heap order and drops exactly one element
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_remove_at_keeps_heap_order() {
    let mut heap: ArrayHeap<u8> = ArrayHeap::new();
    for _ in 0..5 {
        heap.push(kani::any());
    }

    let index: usize = kani::any();
    kani::assume(index < heap.len());

    let expected = *heap.get(index);
    let removed = heap.remove_at(index);

    assert!(removed == expected);
    assert!(heap.len() == 4);
    assert!(heap.is_valid_heap());
}

/// Proof: remove_if keeps heap order and removes only matching elements
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_remove_if_keeps_heap_order() {
    let mut heap: ArrayHeap<u8> = ArrayHeap::new();
    for _ in 0..5 {
        heap.push(kani::any());
    }
    let threshold: u8 = kani::any();

    heap.remove_if(|x| *x > threshold);

    assert!(heap.is_valid_heap());
    assert!(heap.iter().all(|x| *x <= threshold));
}

/// Proof: pop returns elements in non-decreasing order
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_pop_order() {
    let mut heap: ArrayHeap<u8> = ArrayHeap::new();
    for _ in 0..4 {
        heap.push(kani::any());
    }

    let mut last = 0u8;
    while let Some(x) = heap.pop() {
        assert!(x >= last);
        last = x;
    }
}
