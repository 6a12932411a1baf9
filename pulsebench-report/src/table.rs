//! Console Table Rendering
//!
//! One header, one row per completed run. Formatting is exposed as pure
//! functions so the sink itself stays trivial and the format is testable
//! without capturing stdout.
//!
//! Row outcomes:
//! - success with samples: the percentile and divergence columns
//! - success without samples: the literal marker `SKIP`
//! - failure: the literal marker `FAIL:` followed by the error text

use pulsebench_core::{BenchmarkRecord, Reporter};

/// Width of the horizontal rules around the header.
const TABLE_WIDTH: usize = 132;

/// The table header: rule, column names, rule.
pub fn format_header() -> String {
    let rule = "-".repeat(TABLE_WIDTH);
    format!(
        "{rule}\n{:>10} | {:>10} | {:>8} | {:>10} | {:>10} | {:>14} | {:>14} | {:>14} | {:>15} |\n{rule}\n",
        "Group",
        "Benchmark",
        "Threads",
        "Samples",
        "Iterations",
        "ns/Iter P90",
        "P95",
        "P99",
        "P95 Div% Min/Max"
    )
}

/// One table row for a completed record, without a trailing newline.
pub fn format_row(record: &BenchmarkRecord) -> String {
    let threads = record
        .threads
        .map(|t| t.to_string())
        .unwrap_or_else(|| "-".to_string());

    let mut row = format!(
        "{:>10} | {:>10} | {:>8} | {:>10} | {:>10} |",
        record.group, record.name, threads, record.samples, record.iterations
    );

    match (&record.summary, &record.error) {
        (Some(s), _) => {
            row.push_str(&format!(
                " {:>14} | {:>14} | {:>14} | ",
                s.p90, s.p95, s.p99
            ));
            // Minus prefix marks the min lying below the p95
            let sign = if s.div_min == 0.0 { "" } else { "-" };
            row.push_str(&format!("{}{:.2}/{:<10.2} |", sign, s.div_min, s.div_max));
        }
        (None, None) => row.push_str(" SKIP"),
        (None, Some(err)) => row.push_str(&format!(" FAIL: {}", err)),
    }
    row
}

/// Console table sink.
///
/// The header is emitted once, at construction, as instance state: there
/// is no process-wide one-shot flag, so two independent reporters print
/// two headers.
pub struct StdoutReporter {
    _private: (),
}

impl StdoutReporter {
    /// Create the sink and emit the table header.
    pub fn new() -> Self {
        print!("{}", format_header());
        Self { _private: () }
    }
}

impl Reporter for StdoutReporter {
    fn report(&self, record: &BenchmarkRecord) {
        println!("{}", format_row(record));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulsebench_stats::SummaryStatistics;

    fn record() -> BenchmarkRecord {
        BenchmarkRecord {
            group: "Sort".to_string(),
            name: "std_sort".to_string(),
            threads: None,
            samples: 10,
            iterations: 10,
            success: true,
            error: None,
            durations: vec![100; 10],
            summary: Some(SummaryStatistics {
                min: 100,
                max: 100,
                p50: 100,
                p90: 100,
                p95: 100,
                p99: 100,
                div_min: 0.0,
                div_max: 0.0,
            }),
        }
    }

    #[test]
    fn test_header_columns() {
        let header = format_header();
        for column in [
            "Group",
            "Benchmark",
            "Threads",
            "Samples",
            "Iterations",
            "ns/Iter P90",
            "P95",
            "P99",
            "P95 Div% Min/Max",
        ] {
            assert!(header.contains(column), "missing column {column:?}");
        }
        assert!(header.starts_with(&"-".repeat(TABLE_WIDTH)));
    }

    #[test]
    fn test_success_row_renders_percentiles() {
        let row = format_row(&record());
        assert!(row.contains("Sort"));
        assert!(row.contains("std_sort"));
        assert!(row.contains("100"));
        assert!(row.contains("0.00/0.00"));
        assert!(!row.contains("FAIL"));
        assert!(!row.contains("SKIP"));
    }

    #[test]
    fn test_unset_threads_renders_dash() {
        let row = format_row(&record());
        assert!(row.contains(" - |") || row.contains("- |"));
    }

    #[test]
    fn test_set_threads_renders_count() {
        let mut r = record();
        r.threads = Some(4);
        let row = format_row(&r);
        assert!(row.contains(" 4 |"));
    }

    #[test]
    fn test_nonzero_div_min_gets_minus_prefix() {
        let mut r = record();
        if let Some(s) = r.summary.as_mut() {
            s.div_min = 12.5;
            s.div_max = 3.0;
        }
        let row = format_row(&r);
        assert!(row.contains("-12.50/3.00"));
    }

    #[test]
    fn test_skip_row() {
        let mut r = record();
        r.durations.clear();
        r.summary = None;
        let row = format_row(&r);
        assert!(row.ends_with(" SKIP"));
    }

    #[test]
    fn test_fail_row_carries_error_text() {
        let mut r = record();
        r.success = false;
        r.error = Some("result mismatch".to_string());
        r.summary = None;
        let row = format_row(&r);
        assert!(row.ends_with(" FAIL: result mismatch"));
    }
}
