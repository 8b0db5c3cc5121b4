//! File record supplied by the upstream scanner
//!
//! Records are immutable once built; the analyzer only reads them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::error::{AnalysisError, Result};

/// A discovered source file, described before its content is read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub path: PathBuf,
    /// Size in bytes as reported by the filesystem
    pub size: u64,
    /// SHA-256 of the content (hex)
    pub hash: String,
    /// Declared language, validated by the analyzer (not here)
    pub language: String,
    pub last_modified: DateTime<Utc>,
}

impl FileRecord {
    pub fn new(
        path: impl Into<PathBuf>,
        size: u64,
        hash: impl Into<String>,
        language: impl Into<String>,
        last_modified: DateTime<Utc>,
    ) -> Self {
        Self {
            path: path.into(),
            size,
            hash: hash.into(),
            language: language.into(),
            last_modified,
        }
    }

    /// Build a record from filesystem metadata and content hash
    ///
    /// For hosts that have no scanner of their own.
    pub fn from_path(path: impl AsRef<Path>, language: impl Into<String>) -> Result<Self> {
        let path = path.as_ref();
        let read_err = |source| AnalysisError::Read {
            path: path.display().to_string(),
            source,
        };

        let metadata = std::fs::metadata(path).map_err(read_err)?;
        let bytes = std::fs::read(path).map_err(read_err)?;
        let last_modified = metadata
            .modified()
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(|_| Utc::now());

        Ok(Self {
            path: path.to_path_buf(),
            size: metadata.len(),
            hash: compute_content_hash(&bytes),
            language: language.into(),
            last_modified,
        })
    }
}

/// Compute SHA256 hash of content
pub fn compute_content_hash(content: &[u8]) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}
