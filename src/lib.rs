//! kprof-top
//!
//! Samples the running kernel with DTrace for a fixed window and prints the
//! hottest symbols as a ranked table.
//!
//! The pipeline is: capture raw profiler text, parse it into call records,
//! collect them into a trace, rank hottest first, render.
//!
//! ```bash
//! sudo kprof-top -d 10s
//! sudo kprof-top capture -d 10s --save-raw capture.txt
//! kprof-top report -i capture.txt --format json
//! ```

pub mod aggregator;
pub mod capture;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
