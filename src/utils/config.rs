//! Configuration and constants for the CLI.

use std::time::Duration;

/// Default capture window
pub const DEFAULT_DURATION: Duration = Duration::from_secs(5);

/// Default location of the DTrace binary
pub const DTRACE_PATH: &str = "/usr/sbin/dtrace";

/// Environment variable overriding the profiler binary
pub const DTRACE_ENV: &str = "KPROF_DTRACE";

/// D program: sample on-CPU kernel PCs at 1001 Hz and print the aggregation
/// as one "module`symbol count" line per PC when the trace ends.
pub const DTRACE_SCRIPT: &str = r#"
#pragma D option quiet
profile:::profile-1001hz
/arg0/
{
    @pc[arg0] = count();
}
dtrace:::END
{
    printa("%a %@d\n", @pc);
}"#;

/// How often the capture driver checks on the profiler while waiting
pub const CAPTURE_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Current JSON report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Table layout
pub const MODULE_TITLE: &str = "Module";
pub const METHOD_TITLE: &str = "Method";
pub const CALLS_TITLE: &str = "Calls";
pub const SHARE_TITLE: &str = "Share";
pub const SHARE_WIDTH: usize = 10;
pub const COLUMN_SEPARATOR: &str = " | ";
pub const RULE_SEPARATOR: &str = "-+-";

/// Parse a capture duration such as `5s`, `250ms`, `1.5m`, `1h` or a bare
/// number of seconds.
///
/// Used as a clap `value_parser`, hence the `String` error.
pub fn parse_duration(input: &str) -> Result<Duration, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("duration cannot be empty".to_string());
    }

    let split = input
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(input.len());
    let (number, unit) = input.split_at(split);

    let value: f64 = number
        .parse()
        .map_err(|_| format!("invalid duration '{}'", input))?;

    let seconds = match unit {
        "" | "s" => value,
        "ms" => value / 1_000.0,
        "m" => value * 60.0,
        "h" => value * 3_600.0,
        other => return Err(format!("unknown duration unit '{}' (use ms, s, m or h)", other)),
    };

    if seconds <= 0.0 {
        return Err("duration must be greater than zero".to_string());
    }

    Duration::try_from_secs_f64(seconds).map_err(|e| format!("invalid duration '{}': {}", input, e))
}
