//! Matrix Exponentiation strategy.
//!
//! F(n) is the top-left entry of Q^(n-1) where Q = [[1,1],[1,0]].
//! The power is computed with a loop over the exponent bits
//! (square, then multiply by Q when the bit is set), so the depth does not
//! grow with n.

use num_bigint::BigUint;

use crate::calculator::CoreCalculator;
use crate::error::BenchError;
use crate::matrix_ops::{matrix_multiply, matrix_square};
use crate::matrix_types::Matrix;
use crate::options::Options;

/// Raise Q to the given power with binary exponentiation.
#[must_use]
pub fn fibonacci_q_power(exponent: u64) -> Matrix {
    let base = Matrix::fibonacci_q();
    let mut result = Matrix::identity();
    let num_bits = 64 - exponent.leading_zeros();

    for i in (0..num_bits).rev() {
        result = matrix_square(&result);
        if (exponent >> i) & 1 == 1 {
            result = matrix_multiply(&result, &base);
        }
    }

    result
}

/// Matrix Exponentiation calculator.
pub struct MatrixExponentiation;

impl MatrixExponentiation {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for MatrixExponentiation {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for MatrixExponentiation {
    fn calculate_core(&self, n: u64, _opts: &Options) -> Result<BigUint, BenchError> {
        if n == 0 {
            return Ok(BigUint::ZERO);
        }
        Ok(fibonacci_q_power(n - 1).a)
    }

    fn name(&self) -> &'static str {
        "MatrixExponentiation"
    }
}
