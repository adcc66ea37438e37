//! Application entry point and dispatch.
//!
//! Both suites always run to completion and the JSON export is always
//! written. Problems found along the way (cross-validation failures,
//! timed-out cells) decide the exit status once everything is done.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, warn};

use algobench_cli::output::{export_json, format_duration, format_number, JsonReport};
use algobench_cli::presenter::{CLIProgressReporter, CLIResultPresenter};
use algobench_core::{BenchError, CalculatorFactory, DefaultFactory, SorterFactory};
use algobench_orchestration::interfaces::ResultPresenter;
use algobench_orchestration::strategy_selection::{get_calculators_to_run, get_sorters_to_run};
use algobench_orchestration::{
    analyze_fibonacci_results, generate_sort_arrays, run_fibonacci_suite, run_sort_suite,
    verify_sort_results, BenchmarkRunner, Outcome, ResultTable, BIG_SERIES, SMALL_SERIES,
};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        algobench_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let factory = DefaultFactory::new();
    run_with(config, &factory, &factory)
}

/// Run the selected suites with strategies from the given factories.
pub fn run_with(
    config: &AppConfig,
    calculators: &dyn CalculatorFactory,
    sorters: &dyn SorterFactory,
) -> Result<()> {
    let runner = BenchmarkRunner::new(config.options(), config.timeout_duration()?);
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    let reporter = CLIProgressReporter::new(config.quiet);
    let mut problems = Vec::new();

    let fibonacci = if config.suite.includes_fibonacci() {
        let (table, problem) = run_fibonacci(config, calculators, &runner, &presenter, &reporter)?;
        problems.extend(problem);
        Some(table)
    } else {
        None
    };
    let sort = if config.suite.includes_sort() {
        let (table, problem) = run_sort(config, sorters, &runner, &presenter, &reporter)?;
        problems.extend(problem);
        Some(table)
    } else {
        None
    };

    if let Some(path) = &config.output {
        let report = JsonReport {
            seed: config.seed,
            fibonacci: fibonacci.as_ref(),
            sort: sort.as_ref(),
        };
        export_json(path, &report)
            .with_context(|| format!("failed to write {}", path.display()))?;
        if !config.quiet {
            println!("\nResults written to {}", path.display());
        }
    }

    if let Some(limit) = timed_out_limit([fibonacci.as_ref(), sort.as_ref()]) {
        problems.push(BenchError::Timeout(format_duration(limit)));
    }

    match problems.into_iter().next() {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

fn run_fibonacci(
    config: &AppConfig,
    factory: &dyn CalculatorFactory,
    runner: &BenchmarkRunner,
    presenter: &CLIResultPresenter,
    reporter: &CLIProgressReporter,
) -> Result<(ResultTable, Option<BenchError>)> {
    let calculators = get_calculators_to_run(&config.fib_algo, factory)?;
    let big: &[i64] = if config.small_only { &[] } else { &BIG_SERIES };

    let table = run_fibonacci_suite(&calculators, &SMALL_SERIES, big, runner, reporter);
    info!(records = table.record_count(), "fibonacci suite finished");

    presenter.present_fibonacci(&table, config.verbose);
    presenter.present_comparison(&table);

    let problem = match analyze_fibonacci_results(&table) {
        Ok(divergences) => {
            presenter.present_divergences(&divergences);
            None
        }
        Err(err @ BenchError::Mismatch { .. }) => {
            warn!(error = %err, "fibonacci cross-validation failed");
            Some(err)
        }
        Err(err) => {
            presenter.present_error(&err.to_string());
            None
        }
    };

    Ok((table, problem))
}

fn run_sort(
    config: &AppConfig,
    factory: &dyn SorterFactory,
    runner: &BenchmarkRunner,
    presenter: &CLIResultPresenter,
    reporter: &CLIProgressReporter,
) -> Result<(ResultTable, Option<BenchError>)> {
    let sorters = get_sorters_to_run(&config.sort_algo, factory)?;
    let arrays = generate_sort_arrays(config.seed);
    if !config.quiet {
        let elements: usize = arrays.iter().map(|array| array.items.len()).sum();
        println!(
            "Sorting {} arrays ({} elements, seed {})",
            arrays.len(),
            format_number(elements as u64),
            config.seed
        );
    }

    let table = run_sort_suite(&sorters, &arrays, runner, reporter);
    info!(records = table.record_count(), "sort suite finished");

    presenter.present_sorts(&table, config.verbose);
    presenter.present_comparison(&table);

    let problem = verify_sort_results(&table, &arrays).err();
    if let Some(err) = &problem {
        warn!(error = %err, "sort verification failed");
    }

    Ok((table, problem))
}

/// Limit of the first timed-out cell, if any.
fn timed_out_limit<'a>(tables: impl IntoIterator<Item = Option<&'a ResultTable>>) -> Option<Duration> {
    tables
        .into_iter()
        .flatten()
        .flat_map(ResultTable::failures)
        .find_map(|record| match record.outcome {
            Outcome::TimedOut { limit } => Some(limit),
            _ => None,
        })
}
