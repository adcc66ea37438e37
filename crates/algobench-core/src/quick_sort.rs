//! Three-way quicksort with the middle element as pivot.
//!
//! Not in place: each level partitions into freshly allocated
//! less / equal / greater buckets.

use crate::error::BenchError;
use crate::sort::{ensure_comparable, SortStrategy};

/// Sort `items` with three-way partitioning around the middle element.
#[must_use]
pub fn quick_sort<T: PartialOrd + Clone>(items: Vec<T>) -> Vec<T> {
    if items.len() <= 1 {
        return items;
    }

    let pivot = items[items.len() / 2].clone();
    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();

    for item in items {
        if item < pivot {
            less.push(item);
        } else if item > pivot {
            greater.push(item);
        } else {
            equal.push(item);
        }
    }

    let mut sorted = quick_sort(less);
    sorted.append(&mut equal);
    sorted.extend(quick_sort(greater));
    sorted
}

/// QuickSort strategy.
pub struct QuickSort;

impl QuickSort {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for QuickSort {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialOrd + Clone + Send> SortStrategy<T> for QuickSort {
    fn sort(&self, input: Vec<T>) -> Result<Vec<T>, BenchError> {
        ensure_comparable(&input)?;
        Ok(quick_sort(input))
    }

    fn name(&self) -> &'static str {
        "QuickSort"
    }

    fn is_stable(&self) -> bool {
        false
    }

    fn is_in_place(&self) -> bool {
        false
    }
}
