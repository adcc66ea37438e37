//! CLI result presenter and progress reporter.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use parking_lot::Mutex;

use algobench_orchestration::interfaces::{ProgressReporter, ResultPresenter};
use algobench_orchestration::{Divergence, InputDescriptor, Outcome, ResultTable, Value};

use crate::output::{format_duration, format_result, format_sequence};
use crate::ui::{print_error, print_header, print_warning, styled_marker};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

/// Text describing why a cell holds no value.
fn describe_failure(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Failed(err) => format!("failed: {err}"),
        Outcome::Skipped(err) => format!("skipped: {err}"),
        Outcome::TimedOut { limit } => format!("timed out (limit {})", format_duration(*limit)),
        Outcome::Exact(_) | Outcome::Approximate { .. } => String::new(),
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_fibonacci(&self, table: &ResultTable, verbose: bool) {
        if self.quiet {
            return;
        }
        let verbose = verbose || self.verbose;

        for (label, records) in table.iter() {
            print_header(label);
            for record in records {
                match &record.outcome {
                    Outcome::Exact(Value::Number(value)) => {
                        println!("{} = {}", record.input, format_result(value, verbose));
                    }
                    Outcome::Approximate {
                        value: Value::Number(value),
                        exact_limit,
                    } => println!(
                        "{} ~ {} (approximate beyond F({exact_limit}))",
                        record.input,
                        format_result(value, verbose)
                    ),
                    outcome if outcome.is_failure() => {
                        println!("{}: {}", record.input, describe_failure(outcome));
                    }
                    _ => {}
                }
            }
        }
    }

    fn present_sorts(&self, table: &ResultTable, verbose: bool) {
        if self.quiet {
            return;
        }
        let verbose = verbose || self.verbose;

        for (label, records) in table.iter() {
            print_header(label);
            for record in records {
                match &record.outcome {
                    Outcome::Exact(Value::Sequence(items)) => {
                        println!("{}: {}", record.input, format_sequence(items, verbose));
                    }
                    outcome if outcome.is_failure() => {
                        println!("{}: {}", record.input, describe_failure(outcome));
                    }
                    _ => {}
                }
            }
        }
    }

    fn present_comparison(&self, table: &ResultTable) {
        if self.quiet {
            return;
        }

        println!("\nComparison Results:");
        println!("{:-<60}", "");
        for (label, records) in table.iter() {
            let total: Duration = records.iter().map(|r| r.elapsed).sum();
            let failures = records.iter().filter(|r| r.outcome.is_failure()).count();
            println!(
                "{label:<22} total {:>10}  ({} inputs, {failures} without value)",
                format_duration(total),
                records.len(),
            );
            for record in records {
                println!(
                    "  {:<24} {:>10} {}",
                    record.input.to_string(),
                    format_duration(record.elapsed),
                    styled_marker(record.outcome.marker()),
                );
            }
        }
    }

    fn present_divergences(&self, divergences: &[Divergence]) {
        if self.quiet || divergences.is_empty() {
            return;
        }

        for divergence in divergences {
            let (hi, lo) = if divergence.approximate > divergence.exact {
                (&divergence.approximate, &divergence.exact)
            } else {
                (&divergence.exact, &divergence.approximate)
            };
            print_warning(&format!(
                "{} F({}) is approximate beyond F({}): off by {}",
                divergence.strategy,
                divergence.n,
                divergence.exact_limit,
                format_result(&(hi - lo), self.verbose),
            ));
        }
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}

/// Progress bar over the (strategy, input) cells of a suite.
pub struct CLIProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
    hidden: bool,
}

impl CLIProgressReporter {
    /// Create a reporter; a hidden one draws nothing.
    #[must_use]
    pub fn new(hidden: bool) -> Self {
        Self {
            bar: Mutex::new(None),
            hidden,
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("  {spinner:.dim} {prefix:10!} [{elapsed_precise}] [{bar:30.cyan/dim}] {pos:>4}/{len:4} {wide_msg:.dim}")
            .map(|style| style.progress_chars("━━╾─"))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
    }
}

impl ProgressReporter for CLIProgressReporter {
    fn start(&self, suite: &str, total: usize) {
        let bar = if self.hidden {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(total as u64).with_style(Self::style())
        };
        bar.set_prefix(suite.to_string());
        *self.bar.lock() = Some(bar);
    }

    fn advance(&self, strategy: &str, input: &InputDescriptor) {
        if let Some(bar) = self.bar.lock().as_ref() {
            bar.set_message(format!("{strategy} {input}"));
            bar.inc(1);
        }
    }

    fn complete(&self) {
        if let Some(bar) = self.bar.lock().take() {
            bar.finish_and_clear();
        }
    }
}
