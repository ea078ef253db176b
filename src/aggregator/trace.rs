//! The trace aggregate: every call record from one capture.
//!
//! Records are never merged; the profiler already aggregates by PC, so two
//! entries with the same module and method are distinct offsets.

use super::ranking::sort_records;
use crate::parser::schema::CallRecord;
use log::debug;

/// Ordered collection of call records with derived statistics
///
/// Statistics are computed on demand rather than cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    records: Vec<CallRecord>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. No validation or deduplication.
    pub fn add(&mut self, record: CallRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[CallRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Longest method name, in characters
    pub fn longest_method_name_length(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.method.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Longest module name, in characters
    pub fn longest_module_name_length(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.module.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Maximum number of calls for any record in the trace
    pub fn maximum_calls(&self) -> u64 {
        self.records.iter().map(|r| r.calls).max().unwrap_or(0)
    }

    /// Total number of calls in the trace, wrapping on u64 overflow
    pub fn total_calls(&self) -> u64 {
        self.records
            .iter()
            .fold(0u64, |total, r| total.wrapping_add(r.calls))
    }

    /// Sort into display order (hottest first)
    pub fn sort(&mut self) {
        debug!("Ranking {} call records", self.records.len());
        sort_records(&mut self.records);
    }

    /// Human-readable one-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Records: {} | Total: {} calls | Max: {} calls",
            self.records.len(),
            self.total_calls(),
            self.maximum_calls()
        )
    }
}

impl FromIterator<CallRecord> for Trace {
    fn from_iter<I: IntoIterator<Item = CallRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<CallRecord>> for Trace {
    fn from(records: Vec<CallRecord>) -> Self {
        Self { records }
    }
}

/// Percentage of `total` represented by `calls`, 0.0 when `total` is zero
pub fn share_of(calls: u64, total: u64) -> f64 {
    if total > 0 {
        (calls as f64 * 100.0) / total as f64
    } else {
        0.0
    }
}
