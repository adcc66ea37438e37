//! # algobench-core
//!
//! Strategy implementations benchmarked by AlgoBench: six ways to compute
//! F(n) (recursive, memoized, tabulated, iterative, matrix exponentiation,
//! closed form) and four comparison sorts (quick, merge, heap, bubble).

pub mod bubble_sort;
pub mod calculator;
pub mod closed_form;
pub mod constants;
pub mod error;
pub mod heap_sort;
pub mod iterative;
pub mod matrix;
pub(crate) mod matrix_ops;
pub(crate) mod matrix_types;
pub mod memoized;
pub mod merge_sort;
pub mod options;
pub mod quick_sort;
pub mod recursive;
pub mod registry;
pub mod sort;
pub mod tabulated;

// Re-exports
pub use calculator::{Calculator, CoreCalculator, FibCalculator};
pub use constants::{
    exit_codes, DEFAULT_PRECISION_BITS, DEFAULT_RECURSION_LIMIT, FIB_TABLE, MAX_PRECISION_BITS,
};
pub use error::BenchError;
pub use options::Options;
pub use registry::{CalculatorFactory, DefaultFactory, Element, SorterFactory};
pub use sort::SortStrategy;

use num_bigint::BigUint;

/// Compute F(n) with the iterative strategy.
///
/// A convenience function for simple use cases; benchmarking goes through
/// the `Calculator` trait.
///
/// # Example
/// ```
/// assert_eq!(algobench_core::fibonacci(10).to_string(), "55");
/// assert_eq!(algobench_core::fibonacci(0).to_string(), "0");
/// ```
#[must_use]
pub fn fibonacci(n: u64) -> BigUint {
    use iterative::Iterative;

    Iterative::new()
        .calculate_core(n, &Options::default())
        .unwrap_or_default()
}
