//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod capture;
pub mod models;
pub mod report;
pub mod utils;

// Re-export main command functions
pub use capture::{execute_capture, validate_args};
pub use models::{CaptureArgs, OutputFormat, RenderOptions, ReportArgs};
pub use report::{execute_report, validate_report_args};
pub use utils::{build_trace, emit, render};
