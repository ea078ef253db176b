//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while running the external profiler
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Failed to start kernel trace ({}): {source}", .program.display())]
    StartFailed {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Kernel trace failed: profiler exited with {0}")]
    RunFailed(ExitStatus),

    #[error("Kernel trace failed: profiler exited with {status} before the {window:?} capture window elapsed")]
    ExitedEarly { status: ExitStatus, window: Duration },

    #[error("Failed to interrupt profiler: {0}")]
    Interrupt(#[from] nix::errno::Errno),

    #[error("IO error while reading profiler output: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during report output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
