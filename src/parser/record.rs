//! Line parser for DTrace `printa("%a %@d\n")` output.
//!
//! Each interesting line looks like `` module`symbol+0x1c 42 ``: the module,
//! a backtick, the symbol and a trailing decimal sample count. DTrace also
//! prints blank lines and the occasional notice; anything that does not fit
//! the grammar is dropped without complaint.

use super::schema::CallRecord;
use log::{debug, trace};
use regex::Regex;
use std::sync::LazyLock;

/// module = shortest prefix before the first backtick,
/// method = shortest text followed by a space and an ASCII digit run ending the line.
/// Padding between method and count stays in the method.
static CALLS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*?)`(.*?) ([0-9]+)$").expect("Invalid call record regex pattern")
});

/// Parse a single profiler line into a call record
///
/// **Public** - used by `parse_output` and by tests
///
/// Returns `None` for blank lines and lines that do not match
/// ``<module>`<method> <digits>``. Only ASCII digits count.
pub fn parse_line(line: &str) -> Option<CallRecord> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let Some(captures) = CALLS_RE.captures(line) else {
        trace!("Skipping unrecognised line: {:?}", line);
        return None;
    };

    // A digit run too long for u64 counts as zero samples.
    let calls = captures[3].parse::<u64>().unwrap_or_default();

    Some(CallRecord {
        module: captures[1].to_string(),
        method: captures[2].to_string(),
        calls,
    })
}

/// Parse the full captured output into records, in input order
///
/// **Public** - main entry point for parsing
pub fn parse_output(output: &str) -> Vec<CallRecord> {
    let records: Vec<CallRecord> = output.lines().filter_map(parse_line).collect();

    debug!(
        "Parsed {} call records from {} lines",
        records.len(),
        output.lines().count()
    );

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_basic() {
        let record = parse_line("libc.so.6`malloc 42").unwrap();
        assert_eq!(record, CallRecord::new("libc.so.6", "malloc", 42));
    }

    #[test]
    fn test_parse_line_trims_whitespace() {
        let record = parse_line("   unix`i86_mwait+0xd 1234  ").unwrap();
        assert_eq!(record, CallRecord::new("unix", "i86_mwait+0xd", 1234));
    }

    #[test]
    fn test_parse_line_keeps_inner_padding_in_method() {
        // Only the last space before the count separates it from the method
        let record = parse_line("unix`i86_mwait+0xd    1234").unwrap();
        assert_eq!(record, CallRecord::new("unix", "i86_mwait+0xd   ", 1234));
    }

    #[test]
    fn test_parse_line_rejects_non_ascii_digits() {
        assert!(parse_line("k`f \u{0663}").is_none());
        assert!(parse_line("k`f 1\u{0663}").is_none());
    }

    #[test]
    fn test_parse_line_splits_on_first_separator() {
        let record = parse_line("a`b`c 7").unwrap();
        assert_eq!(record.module, "a");
        assert_eq!(record.method, "b`c");
    }

    #[test]
    fn test_parse_line_method_with_spaces() {
        // Only the final digit run is the count
        let record = parse_line("mod`operator new 12 34").unwrap();
        assert_eq!(record.method, "operator new 12");
        assert_eq!(record.calls, 34);
    }

    #[test]
    fn test_parse_line_empty_module() {
        let record = parse_line("`lonely 3").unwrap();
        assert_eq!(record.module, "");
        assert_eq!(record.method, "lonely");
    }

    #[test]
    fn test_parse_line_overflowing_count_is_zero() {
        let record = parse_line("k`f 99999999999999999999999").unwrap();
        assert_eq!(record.calls, 0);
    }

    #[test]
    fn test_parse_line_rejects_noise() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   ").is_none());
        assert!(parse_line("garbage").is_none());
        assert!(parse_line("libc`malloc").is_none());
        assert!(parse_line("libc`malloc 12a").is_none());
        assert!(parse_line("no separator 12").is_none());
        assert!(parse_line("dtrace: description 'profile-1001hz' matched 2 probes").is_none());
    }

    #[test]
    fn test_parse_output_keeps_duplicates_in_order() {
        let output = "\n\nunix`a 1\nheader\nunix`a 2\n";
        let records = parse_output(output);
        assert_eq!(
            records,
            vec![CallRecord::new("unix", "a", 1), CallRecord::new("unix", "a", 2)]
        );
    }
}
