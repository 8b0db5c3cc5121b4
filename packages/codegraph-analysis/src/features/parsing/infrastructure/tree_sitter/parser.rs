//! Tree-sitter parser implementation
//!
//! This is where the grammar dependency lives.

use std::time::Duration;

use tree_sitter::{Parser as TSParser, Tree};

use crate::features::parsing::ports::Parser;
use crate::shared::models::{AnalysisError, Language, Result};

/// Tree-sitter based parser
#[derive(Debug, Clone, Copy)]
pub struct TreeSitterParser {
    language: Language,
}

impl TreeSitterParser {
    /// Create a Python parser
    pub fn python() -> Self {
        Self {
            language: Language::Python,
        }
    }

    /// Get the tree-sitter language
    fn ts_language(&self) -> tree_sitter::Language {
        match self.language {
            Language::Python => tree_sitter_python::language(),
        }
    }
}

impl Parser for TreeSitterParser {
    fn parse(&self, source: &str, budget: Duration) -> Result<Option<Tree>> {
        let mut parser = TSParser::new();
        parser
            .set_language(&self.ts_language())
            .map_err(|e| AnalysisError::ParserSetup(e.to_string()))?;

        // Cooperative cancellation: tree-sitter checks the clock while parsing
        // and returns None once the budget is gone. Zero would mean "no limit".
        let micros = u64::try_from(budget.as_micros()).unwrap_or(u64::MAX).max(1);
        parser.set_timeout_micros(micros);

        Ok(parser.parse(source, None))
    }

    fn language(&self) -> Language {
        self.language
    }
}
