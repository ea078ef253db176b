//! Fixed-column text table for a ranked trace.
//!
//! ```text
//! Module  | Method    | Calls |      Share
//! --------+-----------+-------+-----------
//! unix    | i86_mwait |   900 |  90.0000 %
//! genunix | fsflush   |   100 |  10.0000 %
//! ```
//!
//! Module and method are left-aligned, calls and share right-aligned. Widths
//! grow to fit the data but never shrink below the column titles.

use crate::aggregator::{share_of, Trace};
use crate::utils::config::{
    CALLS_TITLE, COLUMN_SEPARATOR, METHOD_TITLE, MODULE_TITLE, RULE_SEPARATOR, SHARE_TITLE,
    SHARE_WIDTH,
};
use std::fmt::Write;

/// Column widths computed from a trace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    pub module_width: usize,
    pub method_width: usize,
    pub calls_width: usize,
    pub share_width: usize,
}

impl TableLayout {
    /// Size every column to the larger of its title and its widest value
    pub fn for_trace(trace: &Trace) -> Self {
        let module_width = trace.longest_module_name_length().max(MODULE_TITLE.len());
        let method_width = trace.longest_method_name_length().max(METHOD_TITLE.len());
        let calls_width = trace
            .maximum_calls()
            .to_string()
            .len()
            .max(CALLS_TITLE.len());

        Self {
            module_width,
            method_width,
            calls_width,
            share_width: SHARE_WIDTH,
        }
    }

    /// Format one row
    pub fn row(&self, module: &str, method: &str, calls: &str, share: &str) -> String {
        format!(
            "{:<mw$}{sep}{:<nw$}{sep}{:>cw$}{sep}{:>sw$}",
            module,
            method,
            calls,
            share,
            sep = COLUMN_SEPARATOR,
            mw = self.module_width,
            nw = self.method_width,
            cw = self.calls_width,
            sw = self.share_width,
        )
    }

    pub fn header(&self) -> String {
        self.row(MODULE_TITLE, METHOD_TITLE, CALLS_TITLE, SHARE_TITLE)
    }

    /// Dashes under each column, joined by `-+-`
    pub fn rule(&self) -> String {
        [
            self.module_width,
            self.method_width,
            self.calls_width,
            self.share_width,
        ]
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join(RULE_SEPARATOR)
    }
}

/// Format a percentage the way the Share column shows it, e.g. `12.3400 %`
pub fn format_share(share: f64) -> String {
    format!("{:.4} %", share)
}

/// Render a trace as a table, one line per record, each line newline-terminated
///
/// **Public** - main entry point for text output
///
/// The trace should already be sorted. `limit` caps the number of data rows;
/// layout and shares still cover the whole trace.
pub fn render_table(trace: &Trace, limit: Option<usize>) -> String {
    let layout = TableLayout::for_trace(trace);
    let total = trace.total_calls();

    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(out, "{}", layout.header());
    let _ = writeln!(out, "{}", layout.rule());

    for record in trace.records().iter().take(limit.unwrap_or(usize::MAX)) {
        let share = share_of(record.calls, total);
        let _ = writeln!(
            out,
            "{}",
            layout.row(
                &record.module,
                &record.method,
                &record.calls.to_string(),
                &format_share(share),
            )
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::CallRecord;

    #[test]
    fn test_layout_never_narrower_than_titles() {
        let layout = TableLayout::for_trace(&Trace::new());
        assert_eq!(
            layout,
            TableLayout {
                module_width: 6,
                method_width: 6,
                calls_width: 5,
                share_width: 10,
            }
        );
    }

    #[test]
    fn test_layout_grows_with_data() {
        let trace: Trace = vec![CallRecord::new("genunix", "fsflush_do_pages", 1234567)].into();
        let layout = TableLayout::for_trace(&trace);
        assert_eq!(layout.module_width, 7);
        assert_eq!(layout.method_width, 16);
        assert_eq!(layout.calls_width, 7);
    }

    #[test]
    fn test_format_share() {
        assert_eq!(format_share(12.34), "12.3400 %");
        assert_eq!(format_share(100.0), "100.0000 %");
        assert_eq!(format_share(0.0), "0.0000 %");
    }

    #[test]
    fn test_rule() {
        let layout = TableLayout::for_trace(&Trace::new());
        assert_eq!(layout.rule(), "-------+--------+-------+-----------");
    }
}
