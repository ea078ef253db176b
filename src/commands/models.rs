use crate::utils::config::{DEFAULT_DURATION, DTRACE_PATH};
use clap::ValueEnum;
use std::path::PathBuf;
use std::time::Duration;

/// How a ranked trace is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    Table,
    /// Pretty-printed JSON report
    Json,
}

/// Options shared by every command that renders a trace
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub format: OutputFormat,

    /// Maximum number of rows to print (None = all)
    pub top: Option<usize>,

    /// Write to this file instead of standard output
    pub output: Option<PathBuf>,
}

/// Arguments for the capture command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct CaptureArgs {
    /// Profiler executable
    pub dtrace: PathBuf,

    /// Capture window
    pub duration: Duration,

    /// Keep the raw profiler output here for later `report` runs
    pub save_raw: Option<PathBuf>,

    pub render: RenderOptions,
}

impl Default for CaptureArgs {
    fn default() -> Self {
        Self {
            dtrace: PathBuf::from(DTRACE_PATH),
            duration: DEFAULT_DURATION,
            save_raw: None,
            render: RenderOptions::default(),
        }
    }
}

/// Arguments for the report command
#[derive(Debug, Clone, Default)]
pub struct ReportArgs {
    /// Captured profiler text (None = standard input)
    pub input: Option<PathBuf>,

    pub render: RenderOptions,
}
