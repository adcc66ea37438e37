//! Benchmark records: one timed invocation of one strategy over one input.

use std::fmt;
use std::time::Duration;

use num_bigint::BigUint;
use serde::{Serialize, Serializer};

use algobench_core::{BenchError, Element};

/// What a strategy was run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputDescriptor {
    /// A Fibonacci index.
    Index(i64),
    /// A generated sort array.
    Array { id: usize, len: usize },
}

impl fmt::Display for InputDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(n) => write!(f, "F({n})"),
            Self::Array { id, len } => write!(f, "Array {id} (len {len})"),
        }
    }
}

/// Value produced by a successful invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Fibonacci term, serialized as a decimal string.
    Number(#[serde(serialize_with = "serialize_decimal")] BigUint),
    /// Sorted array.
    Sequence(Vec<Element>),
}

/// Classification of a single invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum Outcome {
    /// Exact result.
    Exact(Value),
    /// Result of a strategy queried beyond the index it is exact for.
    Approximate { value: Value, exact_limit: u64 },
    /// The strategy returned an error or panicked.
    Failed(#[serde(serialize_with = "serialize_error")] BenchError),
    /// The runner refused to invoke the strategy.
    Skipped(#[serde(serialize_with = "serialize_error")] BenchError),
    /// The invocation returned after the configured ceiling.
    TimedOut {
        #[serde(serialize_with = "serialize_nanos")]
        limit: Duration,
    },
}

impl Outcome {
    /// Whether this cell holds no usable value.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::Failed(_) | Self::Skipped(_) | Self::TimedOut { .. }
        )
    }

    /// The produced value, exact or not.
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Exact(value) | Self::Approximate { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Short status marker used in reports.
    #[must_use]
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Exact(_) => "OK",
            Self::Approximate { .. } => "APPROX",
            Self::Failed(_) => "FAIL",
            Self::Skipped(_) => "SKIP",
            Self::TimedOut { .. } => "TIMEOUT",
        }
    }
}

/// One cell of the result table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchmarkRecord {
    /// Strategy label.
    pub strategy: String,
    /// Input the strategy was run against.
    pub input: InputDescriptor,
    /// Wall-clock time of the invocation; zero when skipped.
    #[serde(rename = "elapsed_ns", serialize_with = "serialize_nanos")]
    pub elapsed: Duration,
    /// Result classification.
    pub outcome: Outcome,
}

fn serialize_decimal<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

fn serialize_error<S: Serializer>(error: &BenchError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

fn serialize_nanos<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_classification() {
        let limit = Duration::from_secs(1);
        assert!(!Outcome::Exact(Value::Number(BigUint::from(5u32))).is_failure());
        assert!(!Outcome::Approximate {
            value: Value::Number(BigUint::from(5u32)),
            exact_limit: 3
        }
        .is_failure());
        assert!(Outcome::Failed(BenchError::Panicked("boom".into())).is_failure());
        assert!(Outcome::Skipped(BenchError::RecursionLimit { n: 40, limit: 35 }).is_failure());
        assert!(Outcome::TimedOut { limit }.is_failure());
    }

    #[test]
    fn value_of_produced_cells_only() {
        let value = Value::Number(BigUint::from(55u32));
        assert_eq!(Outcome::Exact(value.clone()).value(), Some(&value));
        assert_eq!(
            Outcome::Approximate {
                value: value.clone(),
                exact_limit: 8
            }
            .value(),
            Some(&value)
        );
        assert_eq!(
            Outcome::Skipped(BenchError::RecursionLimit { n: 40, limit: 35 }).value(),
            None
        );
    }

    #[test]
    fn markers() {
        assert_eq!(Outcome::Exact(Value::Sequence(vec![])).marker(), "OK");
        assert_eq!(
            Outcome::TimedOut {
                limit: Duration::ZERO
            }
            .marker(),
            "TIMEOUT"
        );
    }

    #[test]
    fn input_display() {
        assert_eq!(InputDescriptor::Index(10).to_string(), "F(10)");
        assert_eq!(
            InputDescriptor::Array { id: 3, len: 10 }.to_string(),
            "Array 3 (len 10)"
        );
    }

    #[test]
    fn record_serializes_decimal_value_and_nanos() {
        let record = BenchmarkRecord {
            strategy: "Iterative".into(),
            input: InputDescriptor::Index(94),
            elapsed: Duration::from_micros(3),
            outcome: Outcome::Exact(Value::Number(
                BigUint::parse_bytes(b"19740274219868223167", 10).unwrap(),
            )),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["strategy"], "Iterative");
        assert_eq!(json["input"]["index"], 94);
        assert_eq!(json["elapsed_ns"], 3000);
        assert_eq!(json["outcome"]["status"], "exact");
        assert_eq!(json["outcome"]["detail"], "19740274219868223167");
    }

    #[test]
    fn failure_serializes_message() {
        let outcome = Outcome::Skipped(BenchError::RecursionLimit { n: 40, limit: 35 });
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "skipped");
        assert_eq!(json["detail"], "F(40) exceeds the recursion limit of 35");
    }
}
