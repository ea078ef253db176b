//! Capture command implementation.
//!
//! The capture command:
//! 1. Runs the profiler for the capture window
//! 2. Optionally saves the raw output
//! 3. Parses and ranks the call records
//! 4. Prints the report

use super::models::CaptureArgs;
use super::utils::{build_trace, emit};
use crate::capture::{run_capture, CaptureConfig};
use crate::output::write_text;
use anyhow::{Context, Result};
use log::info;
use std::time::Instant;

/// Execute the capture command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Profiler could not be started, exited early or failed after SIGINT
/// * Raw capture or report could not be written
///
/// Nothing is printed to standard output when the capture fails.
pub fn execute_capture(args: CaptureArgs) -> Result<()> {
    let start_time = Instant::now();

    let config = CaptureConfig::dtrace(&args.dtrace, args.duration);
    let raw = run_capture(&config).context("Kernel trace failed")?;

    if let Some(path) = &args.save_raw {
        write_text(&raw, path)
            .with_context(|| format!("Failed to save raw capture to {}", path.display()))?;
    }

    let trace = build_trace(&raw);
    info!("Captured {} call records ({} samples)", trace.len(), trace.total_calls());

    emit(&trace, &args.render)?;

    info!("Capture completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(())
}

/// Validate capture arguments
///
/// **Public** - can be called before execute_capture for early validation
pub fn validate_args(args: &CaptureArgs) -> Result<()> {
    if args.duration.is_zero() {
        anyhow::bail!("Capture duration must be greater than zero");
    }

    if args.dtrace.as_os_str().is_empty() {
        anyhow::bail!("Profiler path cannot be empty");
    }

    if args.render.top == Some(0) {
        anyhow::bail!("--top must be greater than 0");
    }

    Ok(())
}
