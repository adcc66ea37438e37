//! Bubble sort with early exit. Stable; O(n) on already-sorted input.

use crate::error::BenchError;
use crate::sort::{ensure_comparable, SortStrategy};

/// Sort `items` in place and return the number of passes performed.
///
/// A pass that swaps nothing ends the sort, so sorted input takes one pass.
pub fn bubble_sort_in_place<T: PartialOrd>(items: &mut [T]) -> usize {
    let len = items.len();
    let mut passes = 0;

    for i in 0..len {
        passes += 1;
        let mut swapped = false;
        for j in 0..len - i - 1 {
            if items[j] > items[j + 1] {
                items.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    passes
}

/// Sort `items`, returning the same buffer.
#[must_use]
pub fn bubble_sort<T: PartialOrd>(mut items: Vec<T>) -> Vec<T> {
    bubble_sort_in_place(&mut items);
    items
}

/// BubbleSort strategy.
pub struct BubbleSort;

impl BubbleSort {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for BubbleSort {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialOrd + Clone + Send> SortStrategy<T> for BubbleSort {
    fn sort(&self, input: Vec<T>) -> Result<Vec<T>, BenchError> {
        ensure_comparable(&input)?;
        Ok(bubble_sort(input))
    }

    fn name(&self) -> &'static str {
        "BubbleSort"
    }

    fn is_stable(&self) -> bool {
        true
    }

    fn is_in_place(&self) -> bool {
        true
    }
}
