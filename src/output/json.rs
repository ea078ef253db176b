//! JSON report output.
//!
//! Serializes a ranked trace into the versioned `Report` schema.

use super::text::write_text;
use crate::aggregator::{share_of, Trace};
use crate::parser::schema::{Report, ReportRecord};
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use chrono::Utc;
use log::debug;
use std::fs::File;
use std::path::Path;

/// Build a report from a sorted trace
///
/// **Public** - used by commands before serializing
///
/// `limit` caps the number of records; totals always cover the whole trace.
pub fn build_report(trace: &Trace, limit: Option<usize>) -> Report {
    let total_calls = trace.total_calls();

    let records = trace
        .records()
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(|r| ReportRecord {
            module: r.module.clone(),
            method: r.method.clone(),
            calls: r.calls,
            share: share_of(r.calls, total_calls),
        })
        .collect();

    Report {
        version: SCHEMA_VERSION.to_string(),
        total_calls,
        maximum_calls: trace.maximum_calls(),
        records,
        generated_at: Utc::now().to_rfc3339(),
    }
}

/// Serialize a report as pretty JSON
pub fn report_to_string(report: &Report) -> Result<String, OutputError> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

/// Write a report to a JSON file
///
/// **Public** - main entry point for JSON file output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report(report: &Report, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let json = report_to_string(report)?;
    write_text(&json, output_path)
}

/// Read a report back from a JSON file
///
/// **Public** - useful for tooling and tests
pub fn read_report(input_path: impl AsRef<Path>) -> Result<Report, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path)?;
    let report: Report = serde_json::from_reader(file)?;

    debug!(
        "Report loaded: version {}, {} records",
        report.version,
        report.records.len()
    );

    Ok(report)
}
