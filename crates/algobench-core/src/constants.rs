//! Constants for strategy ceilings, numeric precision, and exit codes.

/// Default ceiling on the index a stack-recursive strategy may be asked for.
///
/// Naive recursion is O(2^n) in time and O(n) in call-stack depth; at 35 a
/// single call stays around a second.
pub const DEFAULT_RECURSION_LIMIT: u64 = 35;

/// Default fractional precision (in bits) of the closed-form fixed-point
/// arithmetic. 332 bits is roughly 100 decimal digits.
pub const DEFAULT_PRECISION_BITS: u32 = 332;

/// Smallest precision accepted for the closed-form strategy.
pub const MIN_PRECISION_BITS: u32 = 16;

/// Largest precision accepted for the closed-form strategy.
///
/// 2^20 fractional bits keep F(n) exact well past n = 1,000,000 while
/// bounding the size of the fixed-point operands.
pub const MAX_PRECISION_BITS: u32 = 1 << 20;

/// log2 of the golden ratio.
pub const LOG2_PHI: f64 = 0.694_241_913_630_617_4;

/// Guard bits subtracted from the precision when deriving the exactness limit.
pub const CLOSED_FORM_GUARD_BITS: f64 = 6.0;

/// Precomputed Fibonacci values for n = 0..=93.
///
/// F(93) = 12,200,160,415,121,876,738 is the largest Fibonacci number
/// that fits in `u64`. F(94) = 19,740,274,219,868,223,167 overflows
/// `u64::MAX` (18,446,744,073,709,551,615).
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// An invocation timed out.
    pub const ERROR_TIMEOUT: i32 = 2;
    /// Exact strategies disagreed during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
