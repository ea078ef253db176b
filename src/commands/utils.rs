use super::models::{OutputFormat, RenderOptions};
use crate::aggregator::Trace;
use crate::output::{build_report, render_table, report_to_string, write_text};
use crate::parser::parse_output;
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;

/// Parse captured profiler text into a trace sorted for display
pub fn build_trace(raw: &str) -> Trace {
    let mut trace: Trace = parse_output(raw).into_iter().collect();
    trace.sort();
    debug!("{}", trace.summary());
    trace
}

/// Render a sorted trace in the requested format
pub fn render(trace: &Trace, options: &RenderOptions) -> Result<String> {
    match options.format {
        OutputFormat::Table => Ok(render_table(trace, options.top)),
        OutputFormat::Json => {
            let report = build_report(trace, options.top);
            report_to_string(&report).context("Failed to serialize report")
        }
    }
}

/// Render a trace and send it to the configured destination
pub fn emit(trace: &Trace, options: &RenderOptions) -> Result<()> {
    let rendered = render(trace, options)?;

    match &options.output {
        Some(path) => {
            write_text(&rendered, path)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!("✓ Report written to: {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|_| stdout.flush())
                .context("Failed to write report to stdout")?;
        }
    }

    Ok(())
}
