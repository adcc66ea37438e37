//! Top-down memoized evaluation.
//!
//! The recurrence is unwound with an explicit work stack instead of the call
//! stack, and the cache is created fresh for every top-level invocation.

use std::collections::HashMap;

use num_bigint::BigUint;
use num_traits::One;

use crate::calculator::CoreCalculator;
use crate::error::BenchError;
use crate::options::Options;

/// Cache of solved indices, owned by exactly one top-level computation.
#[derive(Debug)]
pub struct MemoCache {
    solved: HashMap<u64, BigUint>,
}

impl MemoCache {
    /// Create a cache seeded with F(0) and F(1).
    #[must_use]
    pub fn new() -> Self {
        let mut solved = HashMap::new();
        solved.insert(0, BigUint::ZERO);
        solved.insert(1, BigUint::one());
        Self { solved }
    }

    /// Number of cached indices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.solved.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solved.is_empty()
    }

    /// Look up a solved index.
    #[must_use]
    pub fn get(&self, n: u64) -> Option<&BigUint> {
        self.solved.get(&n)
    }

    /// Solve F(n), filling the cache with every index it depends on.
    pub fn solve(&mut self, n: u64) -> BigUint {
        let mut pending = vec![n];

        while let Some(&k) = pending.last() {
            if self.solved.contains_key(&k) {
                pending.pop();
                continue;
            }

            // k >= 2 here: 0 and 1 are seeded
            let sum = match (self.solved.get(&(k - 1)), self.solved.get(&(k - 2))) {
                (Some(a), Some(b)) => Some(a + b),
                (a, b) => {
                    if b.is_none() {
                        pending.push(k - 2);
                    }
                    if a.is_none() {
                        pending.push(k - 1);
                    }
                    None
                }
            };

            if let Some(sum) = sum {
                self.solved.insert(k, sum);
                pending.pop();
            }
        }

        self.solved.get(&n).cloned().unwrap_or_default()
    }
}

impl Default for MemoCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Memoized strategy.
pub struct Memoized;

impl Memoized {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Memoized {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for Memoized {
    fn calculate_core(&self, n: u64, _opts: &Options) -> Result<BigUint, BenchError> {
        let mut cache = MemoCache::new();
        Ok(cache.solve(n))
    }

    fn name(&self) -> &'static str {
        "Memoized"
    }
}
