//! Running the external sampling profiler.

pub mod dtrace;

pub use dtrace::{run_capture, CaptureConfig};
