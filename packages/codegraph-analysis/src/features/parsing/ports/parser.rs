//! Parser port (interface)
//!
//! Defines the contract for building a concrete syntax tree. The tree type is
//! tree-sitter's: extractors walk it directly instead of converting to a
//! neutral node model first.

use std::time::Duration;

use tree_sitter::Tree;

use crate::shared::models::{Language, Result};

/// Parser trait - abstraction over the grammar implementation
pub trait Parser: Send + Sync {
    /// Parse source code, giving up once `budget` is spent.
    ///
    /// `Ok(None)` means the parse was abandoned; callers must not look for a
    /// partial tree in that case.
    fn parse(&self, source: &str, budget: Duration) -> Result<Option<Tree>>;

    /// Language this parser handles
    fn language(&self) -> Language;

    /// Check if this parser supports the given file extension
    fn supports_extension(&self, ext: &str) -> bool {
        self.language()
            .extensions()
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(ext))
    }
}
