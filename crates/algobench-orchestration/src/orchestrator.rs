//! Core orchestration: sequential suite execution and result analysis.

use std::collections::BTreeMap;
use std::sync::Arc;

use num_bigint::BigUint;
use tracing::{info, warn};

use algobench_core::sort::is_sorted;
use algobench_core::{BenchError, Calculator, Element, SortStrategy};

use crate::aggregator::{ResultAggregator, ResultTable};
use crate::inputs::SortArray;
use crate::interfaces::ProgressReporter;
use crate::record::{InputDescriptor, Outcome, Value};
use crate::runner::BenchmarkRunner;

/// An approximate value that differs from the exact consensus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Divergence {
    pub strategy: String,
    pub n: i64,
    pub exact: BigUint,
    pub approximate: BigUint,
    /// Largest index the strategy guarantees to be exact for.
    pub exact_limit: u64,
}

/// Strategies that consume call-stack depth only receive the small series.
fn is_stack_recursive(calc: &dyn Calculator) -> bool {
    calc.recursion_depth(0).is_some()
}

/// Run every calculator over its series, one invocation at a time.
pub fn run_fibonacci_suite(
    calculators: &[Arc<dyn Calculator>],
    small: &[i64],
    big: &[i64],
    runner: &BenchmarkRunner,
    reporter: &dyn ProgressReporter,
) -> ResultTable {
    let series_for = |calc: &dyn Calculator| -> Vec<i64> {
        if is_stack_recursive(calc) {
            small.to_vec()
        } else {
            small.iter().chain(big).copied().collect()
        }
    };

    let total: usize = calculators
        .iter()
        .map(|calc| series_for(calc.as_ref()).len())
        .sum();
    info!(strategies = calculators.len(), cells = total, "running fibonacci suite");
    reporter.start("fibonacci", total);

    let mut aggregator = ResultAggregator::new();
    for calc in calculators {
        for n in series_for(calc.as_ref()) {
            let record = runner.run_fibonacci(calc.as_ref(), n);
            reporter.advance(calc.name(), &record.input);
            aggregator.record(calc.name(), record);
        }
    }

    reporter.complete();
    aggregator.into_table()
}

/// Run every sorter over every array, one invocation at a time.
pub fn run_sort_suite(
    sorters: &[Arc<dyn SortStrategy<Element>>],
    arrays: &[SortArray],
    runner: &BenchmarkRunner,
    reporter: &dyn ProgressReporter,
) -> ResultTable {
    let total = sorters.len() * arrays.len();
    info!(strategies = sorters.len(), cells = total, "running sort suite");
    reporter.start("sort", total);

    let mut aggregator = ResultAggregator::new();
    for sorter in sorters {
        for array in arrays {
            let record = runner.run_sort(sorter.as_ref(), array);
            reporter.advance(sorter.name(), &record.input);
            aggregator.record(sorter.name(), record);
        }
    }

    reporter.complete();
    aggregator.into_table()
}

/// Cross-validate Fibonacci results.
///
/// Exact values for the same index must agree bit for bit, otherwise
/// `BenchError::Mismatch` is returned. Approximate values that differ from
/// the exact consensus are returned as divergences; they are expected, not
/// errors.
pub fn analyze_fibonacci_results(table: &ResultTable) -> Result<Vec<Divergence>, BenchError> {
    let mut consensus: BTreeMap<i64, &BigUint> = BTreeMap::new();

    for (_, records) in table.iter() {
        for record in records {
            let (InputDescriptor::Index(n), Outcome::Exact(Value::Number(value))) =
                (&record.input, &record.outcome)
            else {
                continue;
            };
            match consensus.get(n) {
                Some(expected) if *expected != value => {
                    warn!(n, strategy = %record.strategy, "exact strategies disagree");
                    return Err(BenchError::Mismatch { n: *n });
                }
                Some(_) => {}
                None => {
                    consensus.insert(*n, value);
                }
            }
        }
    }

    if consensus.is_empty() {
        return Err(BenchError::Calculation("no exact results to compare".into()));
    }

    let mut divergences = Vec::new();
    for (_, records) in table.iter() {
        for record in records {
            let (
                InputDescriptor::Index(n),
                Outcome::Approximate {
                    value: Value::Number(value),
                    exact_limit,
                },
            ) = (&record.input, &record.outcome)
            else {
                continue;
            };
            if let Some(exact) = consensus.get(n) {
                if *exact != value {
                    divergences.push(Divergence {
                        strategy: record.strategy.clone(),
                        n: *n,
                        exact: (*exact).clone(),
                        approximate: value.clone(),
                        exact_limit: *exact_limit,
                    });
                }
            }
        }
    }

    if !divergences.is_empty() {
        info!(count = divergences.len(), "approximate results diverge from exact values");
    }
    Ok(divergences)
}

/// Check every produced array is a non-decreasing permutation of its input.
pub fn verify_sort_results(table: &ResultTable, arrays: &[SortArray]) -> Result<(), BenchError> {
    for (label, records) in table.iter() {
        for record in records {
            let (InputDescriptor::Array { id, .. }, Some(Value::Sequence(sorted))) =
                (&record.input, record.outcome.value())
            else {
                continue;
            };
            let Some(array) = arrays.iter().find(|array| array.id == *id) else {
                return Err(BenchError::Calculation(format!("unknown array {id}")));
            };

            let mut expected = array.items.clone();
            expected.sort_unstable();
            if !is_sorted(sorted) || *sorted != expected {
                warn!(strategy = label, array = id, "invalid sort output");
                return Err(BenchError::Calculation(format!(
                    "{label} produced an invalid ordering for array {id}"
                )));
            }
        }
    }
    Ok(())
}
