//! Ranked-report rendering and output.
//!
//! One rendering serves both sinks: the report is echoed to stdout and
//! written verbatim to the configured result file.

use std::fs;
use std::io;
use std::path::Path;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::RankedEntry;

const RULE_WIDTH: usize = 50;

/// Report output errors
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report file: {0}")]
    Io(#[from] io::Error),
}

/// Render the ranking, stamped with the current time.
pub fn render(entries: &[RankedEntry], distinct_symbols: usize) -> String {
    render_at(entries, distinct_symbols, Utc::now())
}

/// Render the ranking with an explicit timestamp.
pub fn render_at(
    entries: &[RankedEntry],
    distinct_symbols: usize,
    generated_at: DateTime<Utc>,
) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&rule);
    out.push('\n');
    out.push_str("TOP MOST MENTIONED STOCK SYMBOLS ON REDDIT\n");
    out.push_str(&format!(
        "Generated: {}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str(&rule);
    out.push('\n');

    for (rank, entry) in entries.iter().enumerate() {
        out.push_str(&format!(
            "{:2}. ${:<6} - {:4} mentions\n",
            rank + 1,
            entry.symbol,
            entry.count
        ));
    }

    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!("Total unique symbols found: {distinct_symbols}\n"));
    out
}

/// Echo the report to stdout and persist it to `path`.
pub fn emit(path: impl AsRef<Path>, report: &str) -> Result<(), ReportError> {
    print!("{report}");
    fs::write(path.as_ref(), report)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Symbol;
    use chrono::TimeZone;

    fn entry(symbol: &str, count: u64) -> RankedEntry {
        RankedEntry {
            symbol: Symbol::parse(symbol).unwrap(),
            count,
        }
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_render_line_format() {
        let report = render_at(&[entry("GME", 42), entry("TSLA", 7)], 2, fixed_time());
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "=".repeat(RULE_WIDTH));
        assert_eq!(lines[1], "TOP MOST MENTIONED STOCK SYMBOLS ON REDDIT");
        assert_eq!(lines[2], "Generated: 2026-08-06 12:00:00 UTC");
        assert_eq!(lines[4], " 1. $GME    -   42 mentions");
        assert_eq!(lines[5], " 2. $TSLA   -    7 mentions");
        assert_eq!(lines[7], "Total unique symbols found: 2");
    }

    #[test]
    fn test_render_empty_ranking() {
        let report = render_at(&[], 0, fixed_time());
        assert!(report.contains("Total unique symbols found: 0"));
        assert!(!report.contains("mentions"));
    }

    #[test]
    fn test_emit_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("top_stocks.txt");
        let report = render_at(&[entry("AAPL", 3)], 1, fixed_time());

        emit(&path, &report).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, report);
    }

    #[test]
    fn test_emit_fails_on_bad_path() {
        let result = emit("/nonexistent/dir/top_stocks.txt", "report");
        assert!(matches!(result, Err(ReportError::Io(_))));
    }
}
