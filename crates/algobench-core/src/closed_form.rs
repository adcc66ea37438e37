//! Closed-form (Binet) strategy over fixed-point arbitrary precision.
//!
//! F(n) = round((φⁿ − ψⁿ) / √5) with ψ = 1 − φ = −1/φ.
//!
//! Every quantity is a `BigInt` scaled by 2^p, where p is
//! [`Options::precision_bits`]. √5 comes from the integer square root of
//! 5·2^(2p) and the powers from a loop of truncating fixed-point products.
//! The integer part is never truncated; only the fractional precision is
//! bounded, so the absolute error of φⁿ grows like n·φⁿ·2^(−p).
//!
//! [`closed_form_exact_limit`] turns that bound into the largest index whose
//! rounded result is guaranteed exact. Past it the value is an
//! approximation with relative error on the order of n·2^(−p).

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;

use crate::calculator::CoreCalculator;
use crate::constants::{CLOSED_FORM_GUARD_BITS, LOG2_PHI};
use crate::error::BenchError;
use crate::options::Options;

/// Largest n for which the closed form is exact at `precision_bits`.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn closed_form_exact_limit(precision_bits: u32) -> u64 {
    let budget = f64::from(precision_bits) - CLOSED_FORM_GUARD_BITS;
    if budget <= 0.0 {
        return 0;
    }

    let error_bits = |n: u64| {
        let nf = n as f64;
        nf * LOG2_PHI + (nf + 2.0 * nf.max(1.0).log2() + 4.0).log2()
    };

    let mut n = (budget / LOG2_PHI).floor() as u64;
    while n > 0 && error_bits(n) > budget {
        n -= 1;
    }
    n
}

/// Fixed-point product: (x * y) / 2^p, rounded toward negative infinity.
fn mul_fixed(x: &BigInt, y: &BigInt, precision: usize) -> BigInt {
    (x * y) >> precision
}

/// Fixed-point power by square-and-multiply over the exponent bits.
fn pow_fixed(base: &BigInt, exponent: u64, precision: usize) -> BigInt {
    let mut result = BigInt::from(1u32) << precision;
    let num_bits = 64 - exponent.leading_zeros();

    for i in (0..num_bits).rev() {
        result = mul_fixed(&result, &result, precision);
        if (exponent >> i) & 1 == 1 {
            result = mul_fixed(&result, base, precision);
        }
    }

    result
}

/// Closed-form calculator.
pub struct ClosedForm;

impl ClosedForm {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ClosedForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for ClosedForm {
    fn calculate_core(&self, n: u64, opts: &Options) -> Result<BigUint, BenchError> {
        let precision = opts.precision_bits as usize;
        let one = BigInt::from(1u32) << precision;

        let sqrt5 = BigInt::from((BigUint::from(5u32) << (2 * precision)).sqrt());
        let phi = (&one + &sqrt5) >> 1u32;
        let psi = (&one - &sqrt5) >> 1u32;

        let diff = pow_fixed(&phi, n, precision) - pow_fixed(&psi, n, precision);

        // round(diff / sqrt5) == floor((2 * diff + sqrt5) / (2 * sqrt5))
        let rounded = ((diff << 1u32) + &sqrt5).div_floor(&(&sqrt5 << 1u32));

        rounded.to_biguint().ok_or_else(|| {
            BenchError::Calculation(format!(
                "closed form produced a negative value for F({n}) at {precision} bits"
            ))
        })
    }

    fn name(&self) -> &'static str {
        "ClosedForm"
    }

    fn exact_limit(&self, opts: &Options) -> Option<u64> {
        Some(closed_form_exact_limit(opts.precision_bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_PRECISION_BITS, FIB_TABLE};
    use crate::iterative::Iterative;
    use num_traits::ToPrimitive;

    fn with_precision(bits: u32) -> Options {
        Options {
            precision_bits: bits,
            ..Default::default()
        }
    }

    fn exact(n: u64) -> BigUint {
        Iterative::new()
            .calculate_core(n, &Options::default())
            .unwrap()
    }

    #[test]
    fn closed_form_seeds() {
        let algo = ClosedForm::new();
        let opts = Options::default();
        assert_eq!(algo.calculate_core(0, &opts).unwrap(), BigUint::ZERO);
        assert_eq!(algo.calculate_core(1, &opts).unwrap(), BigUint::from(1u32));
        assert_eq!(algo.calculate_core(2, &opts).unwrap(), BigUint::from(1u32));
    }

    #[test]
    fn closed_form_exact_up_to_93_at_default_precision() {
        let algo = ClosedForm::new();
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
    fn closed_form_exact_within_documented_limit() {
        let algo = ClosedForm::new();
        let opts = Options::default();
        let limit = closed_form_exact_limit(opts.precision_bits);
        assert!(limit >= 400, "limit {limit} unexpectedly low");
        for n in (0..=limit).step_by(7) {
            assert_eq!(algo.calculate_core(n, &opts).unwrap(), exact(n), "F({n})");
        }
        assert_eq!(algo.calculate_core(limit, &opts).unwrap(), exact(limit));
    }

    #[test]
    fn double_like_precision_holds_to_its_limit() {
        let algo = ClosedForm::new();
        let opts = with_precision(53);
        let limit = closed_form_exact_limit(53);
        assert!((50..=70).contains(&limit), "limit {limit}");
        for n in 0..=limit {
            assert_eq!(
                algo.calculate_core(n, &opts).unwrap(),
                BigUint::from(FIB_TABLE[n as usize]),
                "F({n})"
            );
        }
    }

    #[test]
    fn divergence_beyond_limit_is_bounded() {
        let algo = ClosedForm::new();
        let opts = with_precision(53);
        for n in [100u64, 500, 1_000] {
            let approx = algo.calculate_core(n, &opts).unwrap().to_f64().unwrap();
            let truth = exact(n).to_f64().unwrap();
            let relative = ((approx - truth) / truth).abs();
            assert!(relative < 1e-9, "F({n}) relative error {relative}");
        }
    }

    #[test]
    fn exact_limit_values() {
        assert_eq!(closed_form_exact_limit(16), 8);
        assert_eq!(closed_form_exact_limit(53), 58);
        assert_eq!(closed_form_exact_limit(DEFAULT_PRECISION_BITS), 456);
    }

    #[test]
    fn exact_across_precisions() {
        let algo = ClosedForm::new();
        for bits in [16, 24, 40, 64, 100, 128] {
            let opts = with_precision(bits);
            for n in 0..=closed_form_exact_limit(bits) {
                assert_eq!(
                    algo.calculate_core(n, &opts).unwrap(),
                    exact(n),
                    "F({n}) at {bits} bits"
                );
            }
        }
    }

    #[test]
    fn exact_limit_grows_with_precision() {
        assert_eq!(closed_form_exact_limit(0), 0);
        assert!(closed_form_exact_limit(64) < closed_form_exact_limit(128));
        assert!(closed_form_exact_limit(128) < closed_form_exact_limit(1024));
    }

    #[test]
    fn reports_exact_limit() {
        let algo = ClosedForm::new();
        assert_eq!(
            algo.exact_limit(&with_precision(200)),
            Some(closed_form_exact_limit(200))
        );
    }
}
