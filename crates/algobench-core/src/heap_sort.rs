//! In-place heap sort over a binary max-heap.

use crate::error::BenchError;
use crate::sort::{ensure_comparable, SortStrategy};

/// Restore the max-heap property below `root` within `items[..len]`.
fn sift_down<T: PartialOrd>(items: &mut [T], len: usize, mut root: usize) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < len && items[left] > items[largest] {
            largest = left;
        }
        if right < len && items[right] > items[largest] {
            largest = right;
        }
        if largest == root {
            return;
        }

        items.swap(root, largest);
        root = largest;
    }
}

/// Sort `items` in place: bottom-up heapify, then repeated root extraction.
pub fn heap_sort_in_place<T: PartialOrd>(items: &mut [T]) {
    let len = items.len();
    if len <= 1 {
        return;
    }

    for root in (0..len / 2).rev() {
        sift_down(items, len, root);
    }

    for end in (1..len).rev() {
        items.swap(0, end);
        sift_down(items, end, 0);
    }
}

/// Sort `items`, returning the same buffer.
#[must_use]
pub fn heap_sort<T: PartialOrd>(mut items: Vec<T>) -> Vec<T> {
    heap_sort_in_place(&mut items);
    items
}

/// HeapSort strategy.
pub struct HeapSort;

impl HeapSort {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for HeapSort {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialOrd + Clone + Send> SortStrategy<T> for HeapSort {
    fn sort(&self, input: Vec<T>) -> Result<Vec<T>, BenchError> {
        ensure_comparable(&input)?;
        Ok(heap_sort(input))
    }

    fn name(&self) -> &'static str {
        "HeapSort"
    }

    fn is_stable(&self) -> bool {
        false
    }

    fn is_in_place(&self) -> bool {
        true
    }
}
