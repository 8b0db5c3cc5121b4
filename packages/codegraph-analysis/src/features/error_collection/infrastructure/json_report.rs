//! JSON error report
//!
//! Written only on explicit request. I/O failures propagate to the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::features::error_collection::domain::{ErrorRecord, RunStatistics};
use crate::shared::models::{AnalysisError, Result};

/// Exported report layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub timestamp: DateTime<Utc>,
    pub project: String,
    pub summary: RunStatistics,
    pub errors: Vec<ErrorRecord>,
}

/// Write a report as pretty-printed JSON, creating parent directories
pub fn write_report(path: &Path, report: &ErrorReport) -> Result<()> {
    let export_err = |source| AnalysisError::Export {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(export_err)?;
    }

    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json).map_err(export_err)?;

    tracing::info!(
        path = %path.display(),
        errors = report.errors.len(),
        "error report exported"
    );
    Ok(())
}

/// Load a previously exported report
pub fn read_report(path: &Path) -> Result<ErrorReport> {
    let content = std::fs::read_to_string(path).map_err(|source| AnalysisError::Read {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}
