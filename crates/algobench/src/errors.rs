//! Error handling and exit codes.

use algobench_core::constants::exit_codes;
use algobench_core::BenchError;

/// Map a benchmark error to the process exit code.
pub fn handle_error(err: &BenchError) -> i32 {
    match err {
        BenchError::Calculation(_)
        | BenchError::RecursionLimit { .. }
        | BenchError::Incomparable { .. }
        | BenchError::Panicked(_) => exit_codes::ERROR_GENERIC,
        BenchError::Config(_) => exit_codes::ERROR_CONFIG,
        BenchError::Timeout(_) => exit_codes::ERROR_TIMEOUT,
        BenchError::Mismatch { .. } => exit_codes::ERROR_MISMATCH,
    }
}

/// Exit code for an application error; errors that are not a
/// `BenchError` (I/O while exporting, for instance) are generic.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<BenchError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
