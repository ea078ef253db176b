//! Aggregation and ranking of parsed call records.
//!
//! This module turns parsed records into:
//! - A trace aggregate with derived statistics (totals, maxima, name widths)
//! - A deterministic hottest-first display order

pub mod ranking;
pub mod trace;

// Re-export main types and functions
pub use ranking::{rank, sort_records};
pub use trace::{share_of, Trace};
