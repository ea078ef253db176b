//! Report command implementation.
//!
//! Renders profiler text captured earlier (for example with
//! `capture --save-raw`) without running the profiler again.

use super::models::ReportArgs;
use super::utils::{build_trace, emit};
use anyhow::{Context, Result};
use log::info;
use std::io::Read;

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
pub fn execute_report(args: ReportArgs) -> Result<()> {
    let raw = match &args.input {
        Some(path) => {
            info!("Reading capture from: {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read capture {}", path.display()))?
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read capture from stdin")?;
            buffer
        }
    };

    let trace = build_trace(&raw);
    emit(&trace, &args.render)
}

/// Validate report arguments
pub fn validate_report_args(args: &ReportArgs) -> Result<()> {
    if args.render.top == Some(0) {
        anyhow::bail!("--top must be greater than 0");
    }

    Ok(())
}
