//! Constant-space rolling update, the exact baseline for large n.

use num_bigint::BigUint;
use num_traits::One;

use crate::calculator::CoreCalculator;
use crate::error::BenchError;
use crate::options::Options;

/// Iterative strategy: two rolling values, O(n) additions.
pub struct Iterative;

impl Iterative {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Iterative {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for Iterative {
    fn calculate_core(&self, n: u64, _opts: &Options) -> Result<BigUint, BenchError> {
        let mut a = BigUint::ZERO;
        let mut b = BigUint::one();
        for _ in 0..n {
            let next = &a + &b;
            a = std::mem::replace(&mut b, next);
        }
        Ok(a)
    }

    fn name(&self) -> &'static str {
        "Iterative"
    }
}
