//! Size limit and parse timeout enforcement

use std::time::{Duration, Instant};

use crate::config::AnalysisConfig;
use crate::shared::models::{AnalysisError, FileRecord, Result};

/// Enforces the configured resource limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceGuard {
    max_file_size_bytes: u64,
    parse_timeout: Duration,
}

impl ResourceGuard {
    pub fn new(max_file_size_bytes: u64, parse_timeout: Duration) -> Self {
        Self {
            max_file_size_bytes,
            parse_timeout,
        }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(
            config.max_file_size_bytes,
            Duration::from_millis(config.parse_timeout_ms),
        )
    }

    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_bytes
    }

    pub fn parse_timeout(&self) -> Duration {
        self.parse_timeout
    }

    /// Reject records at or above the size limit.
    ///
    /// Uses the size recorded upstream; the file itself is never touched.
    pub fn enforce_size_limit(&self, record: &FileRecord) -> Result<()> {
        if record.size >= self.max_file_size_bytes {
            tracing::debug!(
                path = %record.path.display(),
                size = record.size,
                max = self.max_file_size_bytes,
                "size limit exceeded"
            );
            return Err(AnalysisError::file_too_large(
                record.size,
                self.max_file_size_bytes,
            ));
        }
        Ok(())
    }

    /// Run a parse under the wall-clock budget.
    ///
    /// `parse` receives the budget and returns `Ok(None)` when it gave up.
    /// A value produced after the budget ran out is dropped, never returned.
    pub fn enforce_parse_timeout<T, F>(&self, parse: F) -> Result<T>
    where
        F: FnOnce(Duration) -> Result<Option<T>>,
    {
        let started = Instant::now();
        let outcome = parse(self.parse_timeout)?;
        let elapsed = started.elapsed();

        match outcome {
            Some(value) if elapsed <= self.parse_timeout => Ok(value),
            _ => {
                tracing::warn!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    budget_ms = self.timeout_ms(),
                    "parse abandoned after exceeding its budget"
                );
                Err(AnalysisError::parse_timeout(self.timeout_ms()))
            }
        }
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.parse_timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

impl Default for ResourceGuard {
    fn default() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }
}
