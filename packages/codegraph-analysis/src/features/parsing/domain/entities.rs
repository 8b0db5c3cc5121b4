//! Structural entities extracted from a parsed file
//!
//! Serialized in camelCase for the documentation/LLM consumers downstream.

use crate::shared::models::Span;
use serde::{Deserialize, Serialize};

/// Parameter information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    pub type_annotation: Option<String>,
    pub default_value: Option<String>,
    pub kind: ParameterKind,
    pub span: Span,
}

/// Parameter kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    Positional,     // x
    PositionalOnly, // x, / (Python 3.8+)
    KeywordOnly,    // *, x
    VarArgs,        // *args
    VarKeyword,     // **kwargs
}

/// Function or method definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEntity {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<String>,
    /// Decorator expressions without the leading `@`
    pub decorators: Vec<String>,
    pub is_async: bool,
    pub docstring: Option<String>,
    pub span: Span,
}

impl FunctionEntity {
    pub fn parameter_names(&self) -> Vec<&str> {
        self.parameters.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn has_decorator(&self, name: &str) -> bool {
        self.decorators.iter().any(|d| d == name)
    }
}

/// Class definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassEntity {
    pub name: String,
    pub base_classes: Vec<String>,
    /// Class-body assignments and `self.<attr>` writes, first-seen order
    pub attributes: Vec<String>,
    pub methods: Vec<FunctionEntity>,
    pub docstring: Option<String>,
    pub span: Span,
}

impl ClassEntity {
    pub fn method(&self, name: &str) -> Option<&FunctionEntity> {
        self.methods.iter().find(|m| m.name == name)
    }
}

/// Import statement (one entity per imported module)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportEntity {
    /// Module path as written ("os.path", "..models", ".")
    pub module: String,
    /// Names pulled in by `from ... import`; empty for plain `import`
    pub imported_names: Vec<String>,
    pub is_relative: bool,
    pub span: Span,
}

/// Everything the walk extracted from one tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralEntities {
    pub functions: Vec<FunctionEntity>,
    pub classes: Vec<ClassEntity>,
    pub imports: Vec<ImportEntity>,
    pub globals: Vec<String>,
}

impl StructuralEntities {
    /// Total number of extracted entities (methods count through their class)
    pub fn entity_count(&self) -> usize {
        self.functions.len() + self.classes.len() + self.imports.len() + self.globals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entity_count() == 0
    }
}
