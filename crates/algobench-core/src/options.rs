//! Strategy options.

use crate::constants::{
    DEFAULT_PRECISION_BITS, DEFAULT_RECURSION_LIMIT, MAX_PRECISION_BITS, MIN_PRECISION_BITS,
};

/// Options passed to every Fibonacci strategy invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Largest index a stack-recursive strategy is allowed to compute.
    pub recursion_limit: u64,
    /// Fractional bits used by the closed-form fixed-point arithmetic.
    pub precision_bits: u32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            precision_bits: DEFAULT_PRECISION_BITS,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero and
    /// clamping the precision to the supported range.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.recursion_limit == 0 {
            self.recursion_limit = DEFAULT_RECURSION_LIMIT;
        }
        if self.precision_bits == 0 {
            self.precision_bits = DEFAULT_PRECISION_BITS;
        }
        self.precision_bits = self
            .precision_bits
            .clamp(MIN_PRECISION_BITS, MAX_PRECISION_BITS);
        self
    }
}
