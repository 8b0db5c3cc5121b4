//! Pipeline result types

use serde::{Deserialize, Serialize};

use crate::features::parsing::{ClassEntity, FunctionEntity, ImportEntity, StructuralEntities};

/// Outcome of analyzing one file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    /// Tree built with zero parse-error nodes
    Success,
    /// Something was extracted, and at least one error string is present
    Partial,
    /// Nothing extracted; `error_message` says why
    Failed,
}

impl AnalysisStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisStatus::Success => "success",
            AnalysisStatus::Partial => "partial",
            AnalysisStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-file analysis output, immutable once returned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub file_path: String,
    pub language: String,
    pub line_count: usize,
    pub functions: Vec<FunctionEntity>,
    pub classes: Vec<ClassEntity>,
    pub imports: Vec<ImportEntity>,
    pub globals: Vec<String>,
    pub complexity: u32,
    /// Human-readable problems found along the way
    pub errors: Vec<String>,
    pub analysis_status: AnalysisStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl AnalysisResult {
    /// Result for a file that produced a usable tree
    pub(crate) fn extracted(
        file_path: String,
        language: String,
        entities: StructuralEntities,
        line_count: usize,
        complexity: u32,
        errors: Vec<String>,
    ) -> Self {
        let analysis_status = if errors.is_empty() {
            AnalysisStatus::Success
        } else {
            AnalysisStatus::Partial
        };

        Self {
            file_path,
            language,
            line_count,
            functions: entities.functions,
            classes: entities.classes,
            imports: entities.imports,
            globals: entities.globals,
            complexity,
            errors,
            analysis_status,
            error_message: None,
        }
    }

    /// Result for a file where nothing could be extracted
    pub(crate) fn failed(file_path: String, language: String, message: String) -> Self {
        Self {
            file_path,
            language,
            line_count: 0,
            functions: Vec::new(),
            classes: Vec::new(),
            imports: Vec::new(),
            globals: Vec::new(),
            complexity: 1,
            errors: vec![message.clone()],
            analysis_status: AnalysisStatus::Failed,
            error_message: Some(message),
        }
    }

    /// Functions, classes, imports and globals found
    pub fn entity_count(&self) -> usize {
        self.functions.len() + self.classes.len() + self.imports.len() + self.globals.len()
    }

    pub fn is_success(&self) -> bool {
        self.analysis_status == AnalysisStatus::Success
    }

    pub fn is_partial(&self) -> bool {
        self.analysis_status == AnalysisStatus::Partial
    }

    pub fn is_failed(&self) -> bool {
        self.analysis_status == AnalysisStatus::Failed
    }
}
