//! Matrix type for the Matrix Exponentiation strategy.

use num_bigint::BigUint;
use num_traits::One;

/// 2x2 matrix of `BigUint` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    pub a: BigUint, // [0][0]
    pub b: BigUint, // [0][1]
    pub c: BigUint, // [1][0]
    pub d: BigUint, // [1][1]
}

impl Matrix {
    /// Create the identity matrix.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            a: BigUint::one(),
            b: BigUint::ZERO,
            c: BigUint::ZERO,
            d: BigUint::one(),
        }
    }

    /// Create the Fibonacci Q matrix [[1,1],[1,0]].
    #[must_use]
    pub fn fibonacci_q() -> Self {
        Self {
            a: BigUint::one(),
            b: BigUint::one(),
            c: BigUint::one(),
            d: BigUint::ZERO,
        }
    }

    /// Check if this is the identity matrix.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Every power of Q satisfies b == c.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.b == self.c
    }
}
