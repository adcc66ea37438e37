//! Property-based tests for the Fibonacci and sort strategies.
//!
//! Fibonacci properties go through the `FibCalculator` decorator so the
//! recursion ceiling and negative-index handling are exercised as well.

use num_bigint::BigUint;
use proptest::prelude::*;

use algobench_core::bubble_sort::bubble_sort;
use algobench_core::heap_sort::heap_sort;
use algobench_core::merge_sort::merge_sort;
use algobench_core::quick_sort::quick_sort;
use algobench_core::registry::{FIBONACCI_LABELS, SORT_LABELS};
use algobench_core::sort::is_sorted;
use algobench_core::{fibonacci, CalculatorFactory, DefaultFactory, Options, SorterFactory};

fn compute(label: &str, n: i64) -> BigUint {
    let factory = DefaultFactory::new();
    factory
        .get(label)
        .unwrap()
        .calculate(n, &Options::default())
        .unwrap()
}

fn sorted_reference(mut items: Vec<i64>) -> Vec<i64> {
    items.sort_unstable();
    items
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Every non-recursive strategy agrees with the iterative one.
    #[test]
    fn exact_strategies_agree(n in 0i64..=300) {
        let expected = fibonacci(u64::try_from(n).unwrap());
        for label in FIBONACCI_LABELS.iter().filter(|l| **l != "recursive") {
            prop_assert_eq!(&compute(label, n), &expected, "{} disagrees at n={}", label, n);
        }
    }

    /// Naive recursion agrees within its ceiling.
    #[test]
    fn recursive_agrees_below_ceiling(n in 0i64..=22) {
        prop_assert_eq!(compute("recursive", n), fibonacci(u64::try_from(n).unwrap()));
    }

    /// F(n) + F(n+1) == F(n+2).
    #[test]
    fn fibonacci_addition_property(n in 0i64..2000) {
        let fn_val = compute("matrix", n);
        let fn1_val = compute("matrix", n + 1);
        let fn2_val = compute("matrix", n + 2);
        prop_assert_eq!(&fn_val + &fn1_val, fn2_val, "F({}) + F({}) != F({})", n, n + 1, n + 2);
    }

    /// Negative indices are degenerate, never an error.
    #[test]
    fn negative_indices_yield_zero(n in i64::MIN..0) {
        for label in FIBONACCI_LABELS {
            prop_assert_eq!(compute(label, n), BigUint::ZERO);
        }
    }

    /// Every sorter returns a sorted permutation of its input.
    #[test]
    fn sorters_return_sorted_permutation(items in prop::collection::vec(-1_000i64..1_000, 0..=2_000)) {
        let factory = DefaultFactory::new();
        let expected = sorted_reference(items.clone());
        for label in SORT_LABELS {
            let sorted = factory.get_sorter(label).unwrap().sort(items.clone()).unwrap();
            prop_assert!(is_sorted(&sorted), "{} output not sorted", label);
            prop_assert_eq!(&sorted, &expected, "{} output not a permutation", label);
        }
    }

    /// Sorting sorted input is a no-op.
    #[test]
    fn sorting_is_idempotent(items in prop::collection::vec(any::<i64>(), 0..=2_000)) {
        let once = merge_sort(items);
        prop_assert_eq!(quick_sort(once.clone()), once.clone());
        prop_assert_eq!(heap_sort(once.clone()), once.clone());
        prop_assert_eq!(bubble_sort(once.clone()), once);
    }

    /// Stable sorters keep the input order of equal keys.
    #[test]
    fn stable_sorters_keep_tie_order(keys in prop::collection::vec(0u8..5, 0..200)) {
        let tagged: Vec<Tagged> = keys
            .iter()
            .enumerate()
            .map(|(position, &key)| Tagged { key, position })
            .collect();

        for sorted in [merge_sort(tagged.clone()), bubble_sort(tagged.clone())] {
            for pair in sorted.windows(2) {
                prop_assert!(pair[0].key <= pair[1].key);
                if pair[0].key == pair[1].key {
                    prop_assert!(pair[0].position < pair[1].position);
                }
            }
        }
    }
}

#[test]
fn reversed_arrays_at_the_length_bound() {
    let factory = DefaultFactory::new();
    let items: Vec<i64> = (0..2_000).rev().collect();
    let expected: Vec<i64> = (0..2_000).collect();
    for label in SORT_LABELS {
        let sorted = factory.get_sorter(label).unwrap().sort(items.clone()).unwrap();
        assert_eq!(sorted, expected, "{label}");
    }
}

/// Element ordered by `key` only; `position` records the input index.
#[derive(Debug, Clone, Copy)]
struct Tagged {
    key: u8,
    position: usize,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.key.partial_cmp(&other.key)
    }
}

#[test]
fn nan_is_rejected_by_every_sorter() {
    use algobench_core::bubble_sort::BubbleSort;
    use algobench_core::heap_sort::HeapSort;
    use algobench_core::merge_sort::MergeSort;
    use algobench_core::quick_sort::QuickSort;
    use algobench_core::{BenchError, SortStrategy};

    let sorters: [Box<dyn SortStrategy<f64>>; 4] = [
        Box::new(QuickSort::new()),
        Box::new(MergeSort::new()),
        Box::new(HeapSort::new()),
        Box::new(BubbleSort::new()),
    ];
    for sorter in &sorters {
        assert_eq!(
            sorter.sort(vec![1.0, f64::NAN]),
            Err(BenchError::Incomparable { index: 1 })
        );
    }
}
