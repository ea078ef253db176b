//! Display ordering for call records.
//!
//! Hottest symbols first. Equal counts fall back to module name, then
//! method name, both ascending, so the table is stable across runs.

use crate::parser::schema::CallRecord;
use std::cmp::Ordering;

/// Compare two records for display
///
/// **Public** - usable with `sort_by` on any slice of records
pub fn rank(a: &CallRecord, b: &CallRecord) -> Ordering {
    b.calls
        .cmp(&a.calls)
        .then_with(|| a.module.cmp(&b.module))
        .then_with(|| a.method.cmp(&b.method))
}

/// Sort records in place into display order
pub fn sort_records(records: &mut [CallRecord]) {
    records.sort_unstable_by(rank);
}
