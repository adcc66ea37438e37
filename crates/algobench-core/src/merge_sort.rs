//! Top-down merge sort. Stable: on ties the left run is taken first.

use crate::error::BenchError;
use crate::sort::{ensure_comparable, SortStrategy};

/// Sort `items` by recursive halving and merging.
#[must_use]
pub fn merge_sort<T: PartialOrd>(mut items: Vec<T>) -> Vec<T> {
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    merge(merge_sort(items), merge_sort(right))
}

fn merge<T: PartialOrd>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        // Only a strictly smaller right element overtakes the left run
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => r < l,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }

    merged
}

/// MergeSort strategy.
pub struct MergeSort;

impl MergeSort {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for MergeSort {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialOrd + Clone + Send> SortStrategy<T> for MergeSort {
    fn sort(&self, input: Vec<T>) -> Result<Vec<T>, BenchError> {
        ensure_comparable(&input)?;
        Ok(merge_sort(input))
    }

    fn name(&self) -> &'static str {
        "MergeSort"
    }

    fn is_stable(&self) -> bool {
        true
    }

    fn is_in_place(&self) -> bool {
        false
    }
}
