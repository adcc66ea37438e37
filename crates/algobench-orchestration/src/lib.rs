//! # algobench-orchestration
//!
//! Benchmark runner, result aggregation, input generation, suite execution
//! and cross-validation of the results.

pub mod aggregator;
pub mod inputs;
pub mod interfaces;
pub mod orchestrator;
pub mod record;
pub mod runner;
pub mod strategy_selection;

pub use aggregator::{ResultAggregator, ResultTable};
pub use inputs::{generate_sort_arrays, SortArray, BIG_SERIES, DEFAULT_SEED, SMALL_SERIES};
pub use interfaces::{NullProgressReporter, ProgressReporter, ResultPresenter};
pub use orchestrator::{
    analyze_fibonacci_results, run_fibonacci_suite, run_sort_suite, verify_sort_results, Divergence,
};
pub use record::{BenchmarkRecord, InputDescriptor, Outcome, Value};
pub use runner::BenchmarkRunner;
