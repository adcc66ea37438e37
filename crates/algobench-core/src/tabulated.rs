//! Bottom-up dynamic programming over a dense table of n + 1 entries.

use num_bigint::BigUint;
use num_traits::One;

use crate::calculator::CoreCalculator;
use crate::error::BenchError;
use crate::options::Options;

/// Tabulated strategy.
pub struct Tabulated;

impl Tabulated {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Tabulated {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for Tabulated {
    fn calculate_core(&self, n: u64, _opts: &Options) -> Result<BigUint, BenchError> {
        let n = usize::try_from(n)
            .map_err(|_| BenchError::Calculation(format!("table for F({n}) does not fit")))?;
        if n == 0 {
            return Ok(BigUint::ZERO);
        }

        let mut table = vec![BigUint::ZERO; n + 1];
        table[1] = BigUint::one();
        for i in 2..=n {
            table[i] = &table[i - 1] + &table[i - 2];
        }

        Ok(table.swap_remove(n))
    }

    fn name(&self) -> &'static str {
        "Tabulated"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FIB_TABLE;

    #[test]
    fn tabulated_matches_table() {
        let algo = Tabulated::new();
        let opts = Options::default();
        for n in 0..=93u64 {
            assert_eq!(
                algo.calculate_core(n, &opts).unwrap(),
                BigUint::from(FIB_TABLE[n as usize]),
                "F({n})"
            );
        }
    }

    #[test]
    fn tabulated_f200() {
        let f200 = Tabulated::new()
            .calculate_core(200, &Options::default())
            .unwrap();
        assert_eq!(
            f200.to_string(),
            "280571172992510140037611932413038677189525"
        );
    }
}
