//! Analysis orchestrator
//!
//! Stage order for one file:
//! 1. validate the declared language
//! 2. enforce the size limit (before any read)
//! 3. read the content (invalid UTF-8 is replaced, not fatal)
//! 4. parse under the wall-clock budget
//! 5. walk the tree, count parse errors, complexity and lines
//!
//! Stages 1-4 are hard failures: nothing can be extracted. Stage 5 never
//! fails; parse errors only downgrade the result to `partial`.

use std::time::Instant;

use tree_sitter::Tree;

use super::result::{AnalysisResult, AnalysisStatus};
use crate::config::AnalysisConfig;
use crate::features::error_collection::{ErrorCollector, ErrorContext};
use crate::features::parsing::{Extraction, Parser, StructureExtractor, TreeSitterParser};
use crate::features::resource_guard::ResourceGuard;
use crate::shared::models::{AnalysisError, FileRecord, Language, Result};

pub const PARSE_ERRORS_DETECTED: &str = "Parse errors detected";
pub const ENCODING_ISSUES: &str =
    "Encoding issues: invalid UTF-8 sequences were replaced during decode";

/// Decoded content plus what the extractor made of it
struct Analyzed {
    extraction: Extraction,
    errors: Vec<String>,
    lossy: bool,
}

/// Single entry point for per-file analysis
pub struct AnalysisOrchestrator {
    config: AnalysisConfig,
    guard: ResourceGuard,
    extractor: StructureExtractor,
    parsers: Vec<Box<dyn Parser>>,
}

impl AnalysisOrchestrator {
    /// Orchestrator with the bundled tree-sitter grammars registered
    pub fn new(config: AnalysisConfig) -> Self {
        let guard = ResourceGuard::from_config(&config);
        Self {
            config,
            guard,
            extractor: StructureExtractor::new(),
            parsers: vec![Box::new(TreeSitterParser::python())],
        }
    }

    /// Register a parser, replacing any existing one for the same language
    pub fn register_parser(&mut self, parser: Box<dyn Parser>) {
        let language = parser.language();
        self.parsers.retain(|p| p.language() != language);
        self.parsers.push(parser);
    }

    pub fn with_parser(mut self, parser: Box<dyn Parser>) -> Self {
        self.register_parser(parser);
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn guard(&self) -> &ResourceGuard {
        &self.guard
    }

    /// Fresh collector for a run, honoring the configured debug flag
    pub fn collector(&self, project_root: impl Into<std::path::PathBuf>) -> ErrorCollector {
        ErrorCollector::new(project_root).with_debug(self.config.debug)
    }

    /// Analyze with the configured failure policy
    pub fn analyze(&self, record: &FileRecord, collector: &mut ErrorCollector) -> Result<AnalysisResult> {
        self.analyze_file(record, collector, self.config.continue_on_error)
    }

    /// Analyze one file.
    ///
    /// With `continue_on_error` every failure comes back as a `failed`
    /// result. Without it, hard failures are returned as `Err` (after being
    /// recorded). Parse errors in a usable tree never escalate.
    pub fn analyze_file(
        &self,
        record: &FileRecord,
        collector: &mut ErrorCollector,
        continue_on_error: bool,
    ) -> Result<AnalysisResult> {
        let started = Instant::now();
        let file_path = record.path.display().to_string();

        let analyzed = match self.run_stages(record) {
            Ok(analyzed) => analyzed,
            Err(err) => {
                let message = err.to_string();
                collector.log_error(
                    &record.path,
                    &message,
                    Some(ErrorContext::default().with_file_size(record.size)),
                );

                if !continue_on_error {
                    tracing::error!(
                        path = %file_path,
                        category = err.category(),
                        "stopping on error: {}",
                        message
                    );
                    return Err(err);
                }

                tracing::info!(
                    path = %file_path,
                    status = %AnalysisStatus::Failed,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "file analyzed"
                );
                return Ok(AnalysisResult::failed(
                    file_path,
                    record.language.clone(),
                    message,
                ));
            }
        };

        let Analyzed {
            extraction,
            errors,
            lossy,
        } = analyzed;

        let result = AnalysisResult::extracted(
            file_path,
            record.language.clone(),
            extraction.entities,
            extraction.line_count,
            extraction.complexity,
            errors,
        );

        match result.errors.first() {
            None => collector.record_success(),
            Some(first) => {
                let mut context = ErrorContext::default()
                    .with_file_size(record.size)
                    .with_line_count(result.line_count);
                if lossy {
                    context = context.with_encoding("utf-8 (lossy)");
                }
                collector.log_error(&record.path, first, Some(context));
            }
        }

        tracing::info!(
            path = %result.file_path,
            status = %result.analysis_status,
            entities = result.entity_count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "file analyzed"
        );
        Ok(result)
    }

    /// Analyze records in order, setting the run's file total first.
    ///
    /// In stop-on-error mode the first hard failure ends the batch.
    pub fn analyze_files(
        &self,
        records: &[FileRecord],
        collector: &mut ErrorCollector,
        continue_on_error: bool,
    ) -> Result<Vec<AnalysisResult>> {
        collector.set_total_files(records.len());
        records
            .iter()
            .map(|record| self.analyze_file(record, collector, continue_on_error))
            .collect()
    }

    fn run_stages(&self, record: &FileRecord) -> Result<Analyzed> {
        let language = self.extractor.validate_language(&record.language)?;
        self.guard.enforce_size_limit(record)?;

        let bytes = std::fs::read(&record.path)
            .map_err(|e| AnalysisError::read(record.path.display().to_string(), e))?;

        let mut errors = Vec::new();
        let (source, lossy) = match String::from_utf8(bytes) {
            Ok(text) => (text, false),
            Err(err) => (String::from_utf8_lossy(err.as_bytes()).into_owned(), true),
        };
        if lossy {
            errors.push(ENCODING_ISSUES.to_string());
        }

        let tree = self.parse(language, &source, record)?;
        let extraction = self.extractor.extract(&tree, &source);
        if extraction.has_parse_errors() {
            errors.push(PARSE_ERRORS_DETECTED.to_string());
        }

        Ok(Analyzed {
            extraction,
            errors,
            lossy,
        })
    }

    fn parse(&self, language: Language, source: &str, record: &FileRecord) -> Result<Tree> {
        let parser = self
            .parsers
            .iter()
            .find(|p| p.language() == language)
            .ok_or_else(|| AnalysisError::unsupported_language(record.language.as_str()))?;

        tracing::debug!(
            path = %record.path.display(),
            bytes = source.len(),
            language = %language,
            "parse started"
        );
        let started = Instant::now();
        let tree = self
            .guard
            .enforce_parse_timeout(|budget| parser.parse(source, budget))?;
        tracing::debug!(
            path = %record.path.display(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "parse finished"
        );

        Ok(tree)
    }
}

impl Default for AnalysisOrchestrator {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}
