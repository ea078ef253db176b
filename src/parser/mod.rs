//! Profiler output parsing and schema definitions.
//!
//! This module handles:
//! - Turning raw DTrace text into call records
//! - Defining the JSON report schema

pub mod record;
pub mod schema;

// Re-export main types
pub use record::{parse_line, parse_output};
pub use schema::{CallRecord, Report, ReportRecord};
