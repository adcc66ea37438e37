//! 2x2 matrix products specialised for powers of the Fibonacci Q matrix.

use crate::matrix_types::Matrix;

/// Multiply two symmetric 2x2 matrices (b == c).
///
/// Powers of Q commute, so their product is symmetric as well and the
/// off-diagonal entry is computed once: 5 multiplications instead of 8.
#[must_use]
pub fn matrix_multiply(x: &Matrix, y: &Matrix) -> Matrix {
    let shared = &x.b * &y.b;
    let a = &x.a * &y.a + &shared;
    let d = &shared + &x.d * &y.d;
    let b = &x.a * &y.b + &x.b * &y.d;
    Matrix {
        a,
        c: b.clone(),
        b,
        d,
    }
}

/// Square a symmetric 2x2 matrix: 4 multiplications.
#[must_use]
pub fn matrix_square(m: &Matrix) -> Matrix {
    let b_sq = &m.b * &m.b;
    let a = &m.a * &m.a + &b_sq;
    let d = &b_sq + &m.d * &m.d;
    let b = &m.b * (&m.a + &m.d);
    Matrix {
        a,
        c: b.clone(),
        b,
        d,
    }
}
