//! Error records and run statistics
//!
//! Field names serialize in camelCase to match the exported report, except
//! `processing_duration_ms` which keeps its snake_case key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::error_type::ErrorType;

/// Optional facts about the file at the time of failure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
}

impl ErrorContext {
    pub fn with_file_size(mut self, file_size: u64) -> Self {
        self.file_size = Some(file_size);
        self
    }

    pub fn with_line_count(mut self, line_count: usize) -> Self {
        self.line_count = Some(line_count);
        self
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }
}

/// One recorded failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRecord {
    /// Path relative to the project root when it lies inside it
    pub file: String,
    pub error_type: ErrorType,
    pub message: String,
    #[serde(default)]
    pub context: ErrorContext,
    pub can_retry: bool,
    pub timestamp: DateTime<Utc>,
    /// Captured in debug mode only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<String>,
}

/// Counters for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunStatistics {
    pub total_files: usize,
    pub successful: usize,
    pub failed: usize,
    /// Rounded percentage with a trailing `%` ("60%")
    pub success_rate: String,
    pub errors_by_type: BTreeMap<ErrorType, usize>,
    #[serde(rename = "processing_duration_ms")]
    pub processing_duration_ms: u64,
}

impl RunStatistics {
    /// `round(successful / total * 100)`; "0%" for an empty run
    pub fn format_success_rate(successful: usize, total_files: usize) -> String {
        if total_files == 0 {
            return "0%".to_string();
        }
        let rate = (successful as f64 / total_files as f64 * 100.0).round();
        format!("{}%", rate as u64)
    }
}
