//! Record and report schema definitions.
//!
//! `CallRecord` is the unit the whole pipeline works on. `Report` is the
//! structure of the JSON document written by `--format json`.
//! Schema is versioned to allow future evolution.

use serde::{Deserialize, Serialize};

/// One aggregated profiler measurement: a symbol and how many samples hit it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallRecord {
    /// Binary or kernel module owning the symbol (may be empty)
    pub module: String,

    /// Sampled symbol, including any `+0x..` offset the profiler printed
    pub method: String,

    /// Samples attributed to this symbol during the capture window
    pub calls: u64,
}

impl CallRecord {
    pub fn new(module: impl Into<String>, method: impl Into<String>, calls: u64) -> Self {
        Self {
            module: module.into(),
            method: method.into(),
            calls,
        }
    }
}

/// Top-level report structure written as JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Sum of calls over every record
    pub total_calls: u64,

    /// Largest single call count
    pub maximum_calls: u64,

    /// Records in display order
    pub records: Vec<ReportRecord>,

    /// Timestamp when report was generated
    pub generated_at: String,
}

/// A ranked record with its share of the total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRecord {
    pub module: String,
    pub method: String,
    pub calls: u64,

    /// Percentage of total calls
    pub share: f64,
}
