//! Failure taxonomy and message classifier
//!
//! Classification is a case-insensitive substring match over an ordered rule
//! list; the first rule that matches wins. The order is part of the contract:
//! "Parsing timeout (30s)" mentions both parsing and a timeout and must come
//! out as a timeout.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    SyntaxError,
    EncodingError,
    TimeoutError,
    MemoryError,
    FileAccessError,
    ParsingError,
    UnknownError,
}

/// Ordered classification rules (`UnknownError` is the fallback)
const RULES: &[(ErrorType, &[&str])] = &[
    (ErrorType::SyntaxError, &["syntax", "unexpected token"]),
    (ErrorType::EncodingError, &["encoding", "decode"]),
    (ErrorType::TimeoutError, &["timeout", "timed out"]),
    (ErrorType::MemoryError, &["memory", "heap"]),
    (
        ErrorType::FileAccessError,
        &[
            "enoent",
            "permission",
            "access denied",
            "ebusy",
            "enetunreach",
            "etimedout",
            "no such file",
            "file not found",
            "failed to read",
            "cannot read",
            "is a directory",
        ],
    ),
    (ErrorType::ParsingError, &["parse", "parsing", "tree-sitter", "tree_sitter"]),
];

impl ErrorType {
    pub const ALL: [ErrorType; 7] = [
        ErrorType::SyntaxError,
        ErrorType::EncodingError,
        ErrorType::TimeoutError,
        ErrorType::MemoryError,
        ErrorType::FileAccessError,
        ErrorType::ParsingError,
        ErrorType::UnknownError,
    ];

    /// Classify a raw error message
    pub fn classify(message: &str) -> Self {
        let message = message.to_lowercase();
        RULES
            .iter()
            .find(|(_, needles)| needles.iter().any(|needle| message.contains(needle)))
            .map(|(error_type, _)| *error_type)
            .unwrap_or(ErrorType::UnknownError)
    }

    /// Advisory retry hint; invalid source text stays invalid
    pub fn can_retry(&self) -> bool {
        !matches!(self, ErrorType::SyntaxError)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::SyntaxError => "syntax_error",
            ErrorType::EncodingError => "encoding_error",
            ErrorType::TimeoutError => "timeout_error",
            ErrorType::MemoryError => "memory_error",
            ErrorType::FileAccessError => "file_access_error",
            ErrorType::ParsingError => "parsing_error",
            ErrorType::UnknownError => "unknown_error",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
