//! Text digest of a run

use std::fmt::Write;

use crate::features::error_collection::domain::{ErrorRecord, ErrorType, RunStatistics};

const EXAMPLES_PER_TYPE: usize = 5;

pub(super) fn format_summary(stats: &RunStatistics, records: &[ErrorRecord]) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Analysis summary: {} files, {} successful, {} failed ({} success) in {}ms",
        stats.total_files,
        stats.successful,
        stats.failed,
        stats.success_rate,
        stats.processing_duration_ms
    );

    if records.is_empty() {
        let _ = writeln!(out, "No errors recorded");
        return out;
    }

    // Most frequent first; ties keep taxonomy order
    let mut by_frequency: Vec<(ErrorType, usize)> =
        stats.errors_by_type.iter().map(|(t, n)| (*t, *n)).collect();
    by_frequency.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    for (error_type, count) in by_frequency {
        let retry = if error_type.can_retry() {
            "retryable"
        } else {
            "not retryable"
        };
        let _ = writeln!(out, "  {error_type}: {count} ({retry})");

        let files: Vec<&str> = records
            .iter()
            .filter(|r| r.error_type == error_type)
            .map(|r| r.file.as_str())
            .collect();
        for file in files.iter().take(EXAMPLES_PER_TYPE) {
            let _ = writeln!(out, "    - {file}");
        }
        if files.len() > EXAMPLES_PER_TYPE {
            let _ = writeln!(out, "    ... and {} more", files.len() - EXAMPLES_PER_TYPE);
        }
    }

    out
}
