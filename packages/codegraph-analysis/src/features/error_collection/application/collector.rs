//! Error collector
//!
//! Append-only store of error records plus success counters for one run.

use chrono::Utc;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::features::error_collection::domain::{
    ErrorContext, ErrorRecord, ErrorType, RunStatistics,
};
use crate::features::error_collection::infrastructure::{write_report, ErrorReport};
use crate::shared::models::Result;

use super::summary::format_summary;

/// Collects failures and successes for one run
#[derive(Debug)]
pub struct ErrorCollector {
    project_root: PathBuf,
    debug: bool,
    records: Vec<ErrorRecord>,
    successful: usize,
    total_files: usize,
    started: Instant,
}

impl ErrorCollector {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            debug: false,
            records: Vec::new(),
            successful: 0,
            total_files: 0,
            started: Instant::now(),
        }
    }

    /// Capture a stack trace on every logged error
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Classify and store a failure
    pub fn log_error(
        &mut self,
        file_path: impl AsRef<Path>,
        error: impl Display,
        context: Option<ErrorContext>,
    ) -> &ErrorRecord {
        let message = error.to_string();
        let error_type = ErrorType::classify(&message);
        let file = self.relative_path(file_path.as_ref());

        tracing::warn!(
            file = %file,
            error_type = %error_type,
            "{}",
            message
        );

        let stack_trace = self
            .debug
            .then(|| std::backtrace::Backtrace::force_capture().to_string());

        let index = self.records.len();
        self.records.push(ErrorRecord {
            file,
            error_type,
            message,
            context: context.unwrap_or_default(),
            can_retry: error_type.can_retry(),
            timestamp: Utc::now(),
            stack_trace,
        });
        &self.records[index]
    }

    pub fn record_success(&mut self) {
        self.successful += 1;
    }

    pub fn set_total_files(&mut self, total_files: usize) {
        self.total_files = total_files;
    }

    pub fn get_statistics(&self) -> RunStatistics {
        let mut errors_by_type = BTreeMap::new();
        for record in &self.records {
            *errors_by_type.entry(record.error_type).or_insert(0) += 1;
        }

        RunStatistics {
            total_files: self.total_files,
            successful: self.successful,
            failed: self.records.len(),
            success_rate: RunStatistics::format_success_rate(self.successful, self.total_files),
            errors_by_type,
            processing_duration_ms: u64::try_from(self.started.elapsed().as_millis())
                .unwrap_or(u64::MAX),
        }
    }

    pub fn records(&self) -> &[ErrorRecord] {
        &self.records
    }

    pub fn errors_for_type(&self, error_type: ErrorType) -> Vec<&ErrorRecord> {
        self.records
            .iter()
            .filter(|r| r.error_type == error_type)
            .collect()
    }

    pub fn retryable_records(&self) -> Vec<&ErrorRecord> {
        self.records.iter().filter(|r| r.can_retry).collect()
    }

    pub fn has_errors(&self) -> bool {
        !self.records.is_empty()
    }

    /// Snapshot of the run as an exportable report
    pub fn build_report(&self, project_root: impl AsRef<Path>) -> ErrorReport {
        ErrorReport {
            timestamp: Utc::now(),
            project: project_root.as_ref().display().to_string(),
            summary: self.get_statistics(),
            errors: self.records.clone(),
        }
    }

    /// Write the report as JSON, creating parent directories
    pub fn export_to_file(
        &self,
        output_path: impl AsRef<Path>,
        project_root: impl AsRef<Path>,
    ) -> Result<()> {
        write_report(output_path.as_ref(), &self.build_report(project_root))
    }

    /// Human-readable digest, categories by descending frequency
    pub fn format_summary(&self) -> String {
        format_summary(&self.get_statistics(), &self.records)
    }

    pub fn print_summary(&self) {
        for line in self.format_summary().lines() {
            tracing::info!("{}", line);
        }
    }

    fn relative_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.project_root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}
