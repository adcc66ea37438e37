//! Orchestration interfaces.

use crate::aggregator::ResultTable;
use crate::orchestrator::Divergence;
use crate::record::InputDescriptor;

/// Trait for reporting progress to the user.
pub trait ProgressReporter: Send + Sync {
    /// A suite of `total` cells is about to run.
    fn start(&self, suite: &str, total: usize);

    /// One (strategy, input) cell finished.
    fn advance(&self, strategy: &str, input: &InputDescriptor);

    /// Report completion.
    fn complete(&self);
}

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present the values produced by the Fibonacci suite.
    fn present_fibonacci(&self, table: &ResultTable, verbose: bool);

    /// Present the arrays produced by the sort suite.
    fn present_sorts(&self, table: &ResultTable, verbose: bool);

    /// Present per-strategy timings with a status marker per cell.
    fn present_comparison(&self, table: &ResultTable);

    /// Present approximate values that differ from the exact consensus.
    fn present_divergences(&self, divergences: &[Divergence]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Null progress reporter (does nothing).
pub struct NullProgressReporter;

impl ProgressReporter for NullProgressReporter {
    fn start(&self, _suite: &str, _total: usize) {}
    fn advance(&self, _strategy: &str, _input: &InputDescriptor) {}
    fn complete(&self) {}
}
