//! Naive two-term recursion.
//!
//! O(2^n) time and O(n) call-stack depth. Only safe behind the recursion
//! ceiling enforced by `FibCalculator` and the benchmark runner.

use num_bigint::BigUint;
use num_traits::One;

use crate::calculator::CoreCalculator;
use crate::error::BenchError;
use crate::options::Options;

/// Direct self-recurrence with no caching.
pub struct Recursive;

impl Recursive {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Recursive {
    fn default() -> Self {
        Self::new()
    }
}

fn fib_recursive(n: u64) -> BigUint {
    match n {
        0 => BigUint::ZERO,
        1 => BigUint::one(),
        _ => fib_recursive(n - 1) + fib_recursive(n - 2),
    }
}

impl CoreCalculator for Recursive {
    fn calculate_core(&self, n: u64, _opts: &Options) -> Result<BigUint, BenchError> {
        Ok(fib_recursive(n))
    }

    fn name(&self) -> &'static str {
        "Recursive"
    }

    fn recursion_depth(&self, n: u64) -> Option<u64> {
        Some(n)
    }
}
