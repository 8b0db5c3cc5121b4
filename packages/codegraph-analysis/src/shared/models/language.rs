//! Language identification
//!
//! Declared languages arrive as free-form strings on `FileRecord`s. Only the
//! ones with a bundled grammar resolve to a `Language`.

use serde::{Deserialize, Serialize};

/// Languages with a bundled grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
}

impl Language {
    /// Get language name as string
    pub fn name(&self) -> &'static str {
        match self {
            Language::Python => "python",
        }
    }

    /// Resolve a declared language name (case-insensitive)
    pub fn from_declared(declared: &str) -> Option<Self> {
        match declared.trim().to_lowercase().as_str() {
            "python" | "py" | "python3" => Some(Language::Python),
            _ => None,
        }
    }

    /// Get language from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "py" | "pyi" => Some(Language::Python),
            _ => None,
        }
    }

    /// Get supported file extensions
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Language::Python => &["py", "pyi"],
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
