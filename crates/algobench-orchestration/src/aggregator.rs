//! Result aggregation.

use indexmap::IndexMap;
use serde::Serialize;

use crate::record::BenchmarkRecord;

/// Records grouped by strategy label.
///
/// Labels keep the order in which they were first recorded and each label's
/// records keep call order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultTable {
    rows: IndexMap<String, Vec<BenchmarkRecord>>,
}

impl ResultTable {
    /// Strategy labels in first-recorded order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    /// Records of one label, empty when the label is unknown.
    #[must_use]
    pub fn records(&self, label: &str) -> &[BenchmarkRecord] {
        self.rows.get(label).map(Vec::as_slice).unwrap_or_default()
    }

    /// Iterate over (label, records) rows.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[BenchmarkRecord])> {
        self.rows
            .iter()
            .map(|(label, records)| (label.as_str(), records.as_slice()))
    }

    /// Number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of records across labels.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.rows.values().map(Vec::len).sum()
    }

    /// Records whose outcome carries no value.
    pub fn failures(&self) -> impl Iterator<Item = &BenchmarkRecord> {
        self.rows
            .values()
            .flatten()
            .filter(|record| record.outcome.is_failure())
    }
}

/// Collects benchmark records during a run.
#[derive(Debug, Default)]
pub struct ResultAggregator {
    table: ResultTable,
}

impl ResultAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `record` to the sequence for `label`.
    pub fn record(&mut self, label: &str, record: BenchmarkRecord) {
        self.table
            .rows
            .entry(label.to_string())
            .or_default()
            .push(record);
    }

    /// Copy of the table built so far.
    #[must_use]
    pub fn snapshot(&self) -> ResultTable {
        self.table.clone()
    }

    /// Finish the run and hand over the table.
    #[must_use]
    pub fn into_table(self) -> ResultTable {
        self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use algobench_core::BenchError;
    use num_bigint::BigUint;

    use crate::record::{InputDescriptor, Outcome, Value};

    fn record(strategy: &str, n: i64, outcome: Outcome) -> BenchmarkRecord {
        BenchmarkRecord {
            strategy: strategy.into(),
            input: InputDescriptor::Index(n),
            elapsed: Duration::from_nanos(10),
            outcome,
        }
    }

    fn exact(v: u32) -> Outcome {
        Outcome::Exact(Value::Number(BigUint::from(v)))
    }

    #[test]
    fn labels_keep_first_recorded_order() {
        let mut agg = ResultAggregator::new();
        agg.record("Tabulated", record("Tabulated", 5, exact(5)));
        agg.record("Iterative", record("Iterative", 5, exact(5)));
        agg.record("Tabulated", record("Tabulated", 7, exact(13)));

        let table = agg.snapshot();
        assert_eq!(table.labels().collect::<Vec<_>>(), ["Tabulated", "Iterative"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.record_count(), 3);
    }

    #[test]
    fn records_keep_call_order_without_dedup() {
        let mut agg = ResultAggregator::new();
        agg.record("Iterative", record("Iterative", 7, exact(13)));
        agg.record("Iterative", record("Iterative", 5, exact(5)));
        agg.record("Iterative", record("Iterative", 5, exact(5)));

        let inputs: Vec<InputDescriptor> = agg
            .snapshot()
            .records("Iterative")
            .iter()
            .map(|r| r.input)
            .collect();
        assert_eq!(
            inputs,
            [
                InputDescriptor::Index(7),
                InputDescriptor::Index(5),
                InputDescriptor::Index(5)
            ]
        );
    }

    #[test]
    fn snapshot_is_detached() {
        let mut agg = ResultAggregator::new();
        agg.record("Iterative", record("Iterative", 5, exact(5)));
        let before = agg.snapshot();
        agg.record("Iterative", record("Iterative", 7, exact(13)));
        assert_eq!(before.record_count(), 1);
        assert_eq!(agg.into_table().record_count(), 2);
    }

    #[test]
    fn failures_are_listed() {
        let mut agg = ResultAggregator::new();
        agg.record("Recursive", record("Recursive", 5, exact(5)));
        agg.record(
            "Recursive",
            record(
                "Recursive",
                40,
                Outcome::Skipped(BenchError::RecursionLimit { n: 40, limit: 35 }),
            ),
        );
        let table = agg.snapshot();
        let failures: Vec<_> = table.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].input, InputDescriptor::Index(40));
    }

    #[test]
    fn unknown_label_is_empty() {
        let table = ResultTable::default();
        assert!(table.records("Nope").is_empty());
        assert!(table.is_empty());
    }
}
