//! Benchmark runner: times one strategy over one input.
//!
//! A failing strategy never aborts the run. Errors and panics become
//! `Outcome::Failed`, indices beyond the recursion ceiling become
//! `Outcome::Skipped` without invoking the strategy, and calls that return
//! after the timeout become `Outcome::TimedOut`. The timeout is checked after
//! the call returns; invocations are never preempted.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use algobench_core::{BenchError, Calculator, Element, Options, SortStrategy};

use crate::inputs::SortArray;
use crate::record::{BenchmarkRecord, InputDescriptor, Outcome, Value};

/// Invokes strategies and turns each call into a `BenchmarkRecord`.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkRunner {
    timeout: Option<Duration>,
    options: Options,
}

impl BenchmarkRunner {
    /// Create a runner with normalized options and an optional timeout.
    #[must_use]
    pub fn new(options: Options, timeout: Option<Duration>) -> Self {
        Self {
            timeout,
            options: options.normalize(),
        }
    }

    /// Options handed to every Fibonacci invocation.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Time `calc` computing F(n).
    pub fn run_fibonacci(&self, calc: &dyn Calculator, n: i64) -> BenchmarkRecord {
        let strategy = calc.name().to_string();
        let input = InputDescriptor::Index(n);

        if let Some(depth) = calc.recursion_depth(n) {
            if depth > self.options.recursion_limit {
                warn!(strategy = %strategy, n, depth, limit = self.options.recursion_limit, "skipping: recursion ceiling");
                return BenchmarkRecord {
                    strategy,
                    input,
                    elapsed: Duration::ZERO,
                    outcome: Outcome::Skipped(BenchError::RecursionLimit {
                        n: n.unsigned_abs(),
                        limit: self.options.recursion_limit,
                    }),
                };
            }
        }

        let start = Instant::now();
        let result = panic::catch_unwind(AssertUnwindSafe(|| calc.calculate(n, &self.options)));
        let elapsed = start.elapsed();
        debug!(strategy = %strategy, n, ?elapsed, "fibonacci invocation finished");

        let outcome = self.classify(elapsed, result, |value| {
            let value = Value::Number(value);
            match calc.exact_limit(&self.options) {
                Some(exact_limit) if n > i64::try_from(exact_limit).unwrap_or(i64::MAX) => {
                    Outcome::Approximate { value, exact_limit }
                }
                _ => Outcome::Exact(value),
            }
        });
        Self::log_outcome(&strategy, &input, &outcome);

        BenchmarkRecord {
            strategy,
            input,
            elapsed,
            outcome,
        }
    }

    /// Time `sorter` over a private copy of `array`.
    pub fn run_sort(&self, sorter: &dyn SortStrategy<Element>, array: &SortArray) -> BenchmarkRecord {
        let strategy = sorter.name().to_string();
        let input = array.descriptor();
        let items = array.items.clone();

        let start = Instant::now();
        let result = panic::catch_unwind(AssertUnwindSafe(|| sorter.sort(items)));
        let elapsed = start.elapsed();
        debug!(strategy = %strategy, array = array.id, len = array.items.len(), ?elapsed, "sort invocation finished");

        let outcome = self.classify(elapsed, result, |sorted| Outcome::Exact(Value::Sequence(sorted)));
        Self::log_outcome(&strategy, &input, &outcome);

        BenchmarkRecord {
            strategy,
            input,
            elapsed,
            outcome,
        }
    }

    fn classify<T>(
        &self,
        elapsed: Duration,
        result: std::thread::Result<Result<T, BenchError>>,
        on_success: impl FnOnce(T) -> Outcome,
    ) -> Outcome {
        if let Some(limit) = self.timeout {
            if elapsed > limit {
                return Outcome::TimedOut { limit };
            }
        }

        match result {
            Ok(Ok(value)) => on_success(value),
            Ok(Err(err)) => Outcome::Failed(err),
            Err(payload) => Outcome::Failed(BenchError::Panicked(panic_message(payload.as_ref()))),
        }
    }

    fn log_outcome(strategy: &str, input: &InputDescriptor, outcome: &Outcome) {
        match outcome {
            Outcome::Failed(err) => warn!(strategy, %input, error = %err, "strategy failed"),
            Outcome::TimedOut { limit } => warn!(strategy, %input, ?limit, "strategy timed out"),
            _ => {}
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
