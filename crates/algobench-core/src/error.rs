//! Error type shared by every strategy and by the benchmark runner.

/// Error type for strategy invocations.
///
/// `Clone` so a failure can be stored inside a benchmark record and still be
/// handed to presenters afterwards.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BenchError {
    /// A calculation error occurred.
    #[error("calculation error: {0}")]
    Calculation(String),

    /// Configuration error (unknown strategy label, bad option value).
    #[error("configuration error: {0}")]
    Config(String),

    /// The index would need more call-stack depth than the configured ceiling.
    #[error("F({n}) exceeds the recursion limit of {limit}")]
    RecursionLimit { n: u64, limit: u64 },

    /// Two elements of a sort input could not be ordered against each other.
    #[error("element at index {index} is not comparable")]
    Incomparable { index: usize },

    /// The strategy panicked; the payload message is kept when it is a string.
    #[error("strategy panicked: {0}")]
    Panicked(String),

    /// The invocation ran past the configured ceiling.
    #[error("timed out after {0}")]
    Timeout(String),

    /// Exact strategies disagree on the same index.
    #[error("exact strategies disagree on F({n})")]
    Mismatch { n: i64 },
}
