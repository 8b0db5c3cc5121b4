//! Error types for the codegraph-analysis crate
//!
//! Display strings are part of the public contract: downstream consumers
//! pattern-match "Unsupported language: ..." and "File too large: ...", and
//! the error classifier keys off the wording of every message.

use thiserror::Error;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Analysis errors
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Declared language has no bundled grammar
    #[error("Unsupported language: {language}")]
    UnsupportedLanguage { language: String },

    /// Size limit hit before the content was read
    #[error(
        "File too large: {}MB (max: {}MB)",
        size_in_mb(size_bytes),
        limit_in_mb(max_bytes)
    )]
    FileTooLarge { size_bytes: u64, max_bytes: u64 },

    /// Content could not be read
    ///
    /// The path stays out of the message: classification matches on message text.
    #[error("Failed to read file: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Parse exceeded its wall-clock budget; any tree it produced was discarded
    #[error("Parsing timeout ({})", timeout_label(timeout_ms))]
    ParseTimeout { timeout_ms: u64 },

    /// Tree-sitter language initialization failed
    #[error("Failed to initialize tree-sitter language: {0}")]
    ParserSetup(String),

    /// Writing the exported error report failed
    #[error("Failed to write error report {path}: {source}")]
    Export {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization failed
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AnalysisError {
    pub fn unsupported_language(language: impl Into<String>) -> Self {
        Self::UnsupportedLanguage {
            language: language.into(),
        }
    }

    pub fn file_too_large(size_bytes: u64, max_bytes: u64) -> Self {
        Self::FileTooLarge {
            size_bytes,
            max_bytes,
        }
    }

    pub fn read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn parse_timeout(timeout_ms: u64) -> Self {
        Self::ParseTimeout { timeout_ms }
    }

    /// Failures that leave nothing to extract.
    ///
    /// Only these escalate to the caller in stop-on-error mode.
    pub fn is_hard_failure(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedLanguage { .. }
                | Self::FileTooLarge { .. }
                | Self::Read { .. }
                | Self::ParseTimeout { .. }
                | Self::ParserSetup(_)
        )
    }

    /// Get error category for logs
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnsupportedLanguage { .. } => "language",
            Self::FileTooLarge { .. } => "size",
            Self::Read { .. } => "read",
            Self::ParseTimeout { .. } => "timeout",
            Self::ParserSetup(_) => "parse",
            Self::Export { .. } => "export",
            Self::Serialization(_) => "serialization",
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Observed size, rounded to one decimal ("10.5")
fn size_in_mb(bytes: &u64) -> String {
    format!("{:.1}", *bytes as f64 / BYTES_PER_MB)
}

/// Configured limit, without trailing zeros ("10", "0.5")
fn limit_in_mb(bytes: &u64) -> String {
    format!("{}", *bytes as f64 / BYTES_PER_MB)
}

fn timeout_label(timeout_ms: &u64) -> String {
    if *timeout_ms % 1000 == 0 {
        format!("{}s", timeout_ms / 1000)
    } else {
        format!("{}s", *timeout_ms as f64 / 1000.0)
    }
}
