//! Calculator traits and the `FibCalculator` decorator.
//!
//! `Calculator` is the public trait consumed by orchestration.
//! `CoreCalculator` is the internal trait implemented by the six strategies.
//! `FibCalculator` is a decorator that maps negative indices to the degenerate
//! value 0 and refuses indices beyond the recursion ceiling.

use std::sync::Arc;

use num_bigint::BigUint;

use crate::error::BenchError;
use crate::options::Options;

/// Public trait for Fibonacci strategies, consumed by orchestration.
pub trait Calculator: Send + Sync {
    /// Calculate F(n). Negative `n` yields 0.
    fn calculate(&self, n: i64, opts: &Options) -> Result<BigUint, BenchError>;

    /// Get the label of this strategy.
    fn name(&self) -> &str;

    /// Largest index for which the result is guaranteed exact, or `None`
    /// when the strategy is exact for every index.
    fn exact_limit(&self, opts: &Options) -> Option<u64>;

    /// Call-stack depth needed to compute F(n), or `None` when the strategy
    /// does not recurse.
    fn recursion_depth(&self, n: i64) -> Option<u64>;
}

/// Internal trait for strategy implementations.
/// Wrapped by `FibCalculator` which adds the degenerate case and the ceiling.
pub trait CoreCalculator: Send + Sync {
    /// Compute F(n) for a non-negative index.
    fn calculate_core(&self, n: u64, opts: &Options) -> Result<BigUint, BenchError>;

    /// Get the label of this strategy.
    fn name(&self) -> &str;

    /// See [`Calculator::exact_limit`].
    fn exact_limit(&self, _opts: &Options) -> Option<u64> {
        None
    }

    /// See [`Calculator::recursion_depth`].
    fn recursion_depth(&self, _n: u64) -> Option<u64> {
        None
    }
}

/// Decorator that wraps a `CoreCalculator`.
pub struct FibCalculator {
    inner: Arc<dyn CoreCalculator>,
}

impl FibCalculator {
    /// Create a new `FibCalculator` wrapping the given core calculator.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreCalculator>) -> Self {
        Self { inner }
    }
}

impl Calculator for FibCalculator {
    fn calculate(&self, n: i64, opts: &Options) -> Result<BigUint, BenchError> {
        // Degenerate input, not an error
        let Ok(n) = u64::try_from(n) else {
            return Ok(BigUint::ZERO);
        };

        if let Some(depth) = self.inner.recursion_depth(n) {
            if depth > opts.recursion_limit {
                return Err(BenchError::RecursionLimit {
                    n,
                    limit: opts.recursion_limit,
                });
            }
        }

        self.inner.calculate_core(n, opts)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn exact_limit(&self, opts: &Options) -> Option<u64> {
        self.inner.exact_limit(opts)
    }

    fn recursion_depth(&self, n: i64) -> Option<u64> {
        u64::try_from(n)
            .ok()
            .and_then(|n| self.inner.recursion_depth(n))
    }
}
