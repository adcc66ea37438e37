//! CLI output formatting and JSON export.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use num_bigint::BigUint;
use serde::Serialize;

use algobench_core::Element;
use algobench_orchestration::ResultTable;

/// Format a `BigUint` for display, potentially truncating.
#[must_use]
pub fn format_result(value: &BigUint, verbose: bool) -> String {
    let s = value.to_string();
    if !verbose && s.len() > 100 {
        format!("{}...{} ({} digits)", &s[..50], &s[s.len() - 50..], s.len())
    } else {
        s
    }
}

/// Format a sorted array for display, keeping both ends of long arrays.
#[must_use]
pub fn format_sequence(items: &[Element], verbose: bool) -> String {
    let join = |items: &[Element]| {
        items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };

    if !verbose && items.len() > 20 {
        format!(
            "[{}, ..., {}] ({} elements)",
            join(&items[..10]),
            join(&items[items.len() - 5..]),
            items.len()
        )
    } else {
        format!("[{}]", join(items))
    }
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Everything a run hands to an external charting tool.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    /// Seed the random sort arrays were drawn from.
    pub seed: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fibonacci: Option<&'a ResultTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<&'a ResultTable>,
}

/// Write `report` as pretty-printed JSON.
///
/// Fibonacci values are decimal strings and durations are nanoseconds.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn export_json(path: &Path, report: &JsonReport<'_>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    writer.flush()?;
    tracing::debug!(path = %path.display(), "exported results");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use algobench_orchestration::{BenchmarkRecord, InputDescriptor, Outcome, ResultAggregator, Value};

    #[test]
    fn format_duration_micro() {
        let s = format_duration(Duration::from_nanos(500));
        assert!(s.contains("µs"));
    }

    #[test]
    fn format_duration_milli() {
        assert_eq!(format_duration(Duration::from_millis(42)), "42.00ms");
    }

    #[test]
    fn format_duration_minutes() {
        assert_eq!(format_duration(Duration::from_secs(90)), "1m30.0s");
    }

    #[test]
    fn format_number_thousands() {
        assert_eq!(format_number(1_000_000), "1,000,000");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(15_849), "15,849");
    }

    #[test]
    fn format_result_short() {
        assert_eq!(format_result(&BigUint::from(6765u32), false), "6765");
    }

    #[test]
    fn format_result_truncates_long_values() {
        let value = BigUint::from(10u32).pow(150);
        let s = format_result(&value, false);
        assert!(s.starts_with("1000"));
        assert!(s.ends_with("(151 digits)"));
        assert_eq!(format_result(&value, true).len(), 151);
    }

    #[test]
    fn format_sequence_short_and_long() {
        assert_eq!(format_sequence(&[1, 2, 3], false), "[1, 2, 3]");
        assert_eq!(format_sequence(&[], false), "[]");

        let long: Vec<Element> = (1..=30).collect();
        assert_eq!(
            format_sequence(&long, false),
            "[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, ..., 26, 27, 28, 29, 30] (30 elements)"
        );
        assert!(format_sequence(&long, true).contains("15, 16"));
    }

    #[test]
    fn export_json_writes_table() {
        let mut agg = ResultAggregator::new();
        agg.record(
            "Iterative",
            BenchmarkRecord {
                strategy: "Iterative".into(),
                input: InputDescriptor::Index(100),
                elapsed: Duration::from_nanos(1500),
                outcome: Outcome::Exact(Value::Number(
                    BigUint::parse_bytes(b"354224848179261915075", 10).unwrap(),
                )),
            },
        );
        let table = agg.into_table();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        export_json(
            &path,
            &JsonReport {
                seed: 42,
                fibonacci: Some(&table),
                sort: None,
            },
        )
        .unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["seed"], 42);
        assert!(json.get("sort").is_none());
        let cell = &json["fibonacci"]["Iterative"][0];
        assert_eq!(cell["elapsed_ns"], 1500);
        assert_eq!(cell["outcome"]["detail"], "354224848179261915075");
    }
}
