//! Application configuration from CLI flags and environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use algobench_core::{BenchError, Options, DEFAULT_PRECISION_BITS, DEFAULT_RECURSION_LIMIT};
use algobench_orchestration::DEFAULT_SEED;

/// Which benchmark suites to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Suite {
    Fibonacci,
    Sort,
    All,
}

impl Suite {
    #[must_use]
    pub fn includes_fibonacci(self) -> bool {
        matches!(self, Self::Fibonacci | Self::All)
    }

    #[must_use]
    pub fn includes_sort(self) -> bool {
        matches!(self, Self::Sort | Self::All)
    }
}

/// AlgoBench: benchmark harness comparing Fibonacci and sorting strategies.
#[derive(Parser, Debug)]
#[command(name = "algobench", version, about)]
pub struct AppConfig {
    /// Suite to run.
    #[arg(value_enum, default_value_t = Suite::All)]
    pub suite: Suite,

    /// Fibonacci strategy: recursive, memoized, tabulated, iterative, matrix, closed-form, or all.
    #[arg(long, default_value = "all")]
    pub fib_algo: String,

    /// Sort strategy: quick, merge, heap, bubble, or all.
    #[arg(long, default_value = "all")]
    pub sort_algo: String,

    /// Largest index the naive recursive strategy is run for; larger ones are skipped.
    #[arg(long, default_value_t = DEFAULT_RECURSION_LIMIT, env = "ALGOBENCH_RECURSION_LIMIT")]
    pub recursion_limit: u64,

    /// Fractional bits used by the closed-form strategy (at most 2^20).
    #[arg(long, default_value_t = DEFAULT_PRECISION_BITS)]
    pub precision_bits: u32,

    /// Per-invocation timeout (e.g., "500ms", "30s", "5m"), or "none".
    #[arg(long, default_value = "5m")]
    pub timeout: String,

    /// Seed for the random sort arrays.
    #[arg(long, default_value_t = DEFAULT_SEED, env = "ALGOBENCH_SEED")]
    pub seed: u64,

    /// Run only the small Fibonacci series.
    #[arg(long)]
    pub small_only: bool,

    /// Verbose output (full values and arrays).
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (errors only).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write the result tables as JSON to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Strategy options derived from the flags.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            recursion_limit: self.recursion_limit,
            precision_bits: self.precision_bits,
        }
        .normalize()
    }

    /// Parse the timeout flag; `None` disables the check.
    pub fn timeout_duration(&self) -> Result<Option<Duration>, BenchError> {
        match self.timeout.trim() {
            "none" | "off" => Ok(None),
            s => parse_duration(s)
                .map(Some)
                .ok_or_else(|| BenchError::Config(format!("invalid timeout: {s:?}"))),
        }
    }
}

/// Parse a duration string like "500ms", "30s", "5m", "1h".
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(Duration::from_millis(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(60)?))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(3600)?))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(Duration::from_secs(n))
    }
}
