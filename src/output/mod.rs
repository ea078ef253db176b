//! Report writers.
//!
//! This module handles rendering a ranked trace:
//! - Aligned text table (the default)
//! - JSON reports
//! - Writing either (or raw captures) to disk

pub mod json;
pub mod table;
pub mod text;

// Re-export main functions
pub use json::{build_report, read_report, report_to_string, write_report};
pub use table::{format_share, render_table, TableLayout};
pub use text::write_text;
