use kprof_top::aggregator::Trace;
use kprof_top::output::{build_report, render_table, TableLayout};
use kprof_top::parser::CallRecord;
use pretty_assertions::assert_eq;

fn sorted(records: Vec<CallRecord>) -> Trace {
    let mut trace: Trace = records.into();
    trace.sort();
    trace
}

#[test]
fn test_render_table_exact() {
    let trace = sorted(vec![
        CallRecord::new("genunix", "fsflush", 100),
        CallRecord::new("unix", "i86_mwait", 900),
    ]);

    let expected = "\
Module  | Method    | Calls |      Share
--------+-----------+-------+-----------
unix    | i86_mwait |   900 |  90.0000 %
genunix | fsflush   |   100 |  10.0000 %
";

    assert_eq!(render_table(&trace, None), expected);
}

#[test]
fn test_render_table_empty_trace() {
    let expected = "\
Module | Method | Calls |      Share
-------+--------+-------+-----------
";

    assert_eq!(render_table(&Trace::new(), None), expected);
}

#[test]
fn test_render_table_zero_total() {
    let trace = sorted(vec![CallRecord::new("unix", "idle", 0)]);
    let table = render_table(&trace, None);

    assert!(table.lines().nth(2).unwrap().ends_with("|   0.0000 %"));
}

#[test]
fn test_render_table_wide_calls_column() {
    let trace = sorted(vec![CallRecord::new("m", "f", 12345678)]);
    let table = render_table(&trace, None);
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines[0], "Module | Method |    Calls |      Share");
    assert_eq!(lines[2], "m      | f      | 12345678 | 100.0000 %");
}

#[test]
fn test_render_table_top_limit() {
    let trace = sorted(vec![
        CallRecord::new("a", "x", 1),
        CallRecord::new("b", "y", 2),
        CallRecord::new("c", "z", 3),
    ]);

    let table = render_table(&trace, Some(2));
    assert_eq!(table.lines().count(), 4);
    assert!(table.contains("c      | z"));
    assert!(!table.contains("a      | x"));
}

#[test]
fn test_layout_minimums() {
    let layout = TableLayout::for_trace(&Trace::new());
    assert!(layout.module_width >= "Module".len());
    assert!(layout.method_width >= "Method".len());
    assert!(layout.calls_width >= "Calls".len());
    assert_eq!(layout.share_width, 10);
}

#[test]
fn test_shares_sum_to_one_hundred() {
    let trace = sorted(vec![
        CallRecord::new("a", "x", 7),
        CallRecord::new("b", "y", 13),
        CallRecord::new("c", "z", 1),
        CallRecord::new("d", "w", 29),
    ]);

    let report = build_report(&trace, None);
    let sum: f64 = report.records.iter().map(|r| r.share).sum();
    assert!((sum - 100.0).abs() < 1e-9);
}

#[test]
fn test_render_table_total_overflow_wraps() {
    let trace = sorted(vec![
        CallRecord::new("k", "a", u64::MAX),
        CallRecord::new("k", "b", 1),
    ]);

    let table = render_table(&trace, None);
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(trace.total_calls(), 0);
    assert_eq!(lines[2], "k      | a      | 18446744073709551615 |   0.0000 %");
    assert_eq!(lines[3], "k      | b      |                    1 |   0.0000 %");

    let report = build_report(&trace, None);
    assert_eq!(report.total_calls, 0);
}

#[test]
fn test_render_table_non_ascii_names_align_by_char() {
    let trace = sorted(vec![
        CallRecord::new("módulo", "función", 3),
        CallRecord::new("unix", "idle", 1),
    ]);

    let table = render_table(&trace, None);
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines[0], "Module | Method  | Calls |      Share");
    assert_eq!(lines[2], "módulo | función |     3 |  75.0000 %");
    assert_eq!(lines[3], "unix   | idle    |     1 |  25.0000 %");
}
