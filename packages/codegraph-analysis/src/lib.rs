/*
 * Codegraph Analysis - Resilient Structural Analysis
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Span, FileRecord, Language, AnalysisError)
 * - features/    : Vertical slices (resource_guard, parsing, error_collection)
 * - pipeline/    : Orchestration (analyze_file)
 * - config/      : Limits and policies (YAML / env)
 *
 * Resilience:
 * - Oversized files are rejected before their content is read
 * - Parsing runs under a wall-clock budget
 * - Broken syntax yields partial results instead of aborting the batch
 */

#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed

/// Shared models and utilities
pub mod shared;

/// Feature modules (guard, parsing, error collection)
pub mod features;

/// Pipeline orchestration
pub mod pipeline;

/// Configuration system
pub mod config;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{AnalysisConfig, ConfigError};
pub use features::error_collection::{
    ErrorCollector, ErrorContext, ErrorRecord, ErrorReport, ErrorType, RunStatistics,
};
pub use features::parsing::{
    ClassEntity, FunctionEntity, ImportEntity, Parameter, ParameterKind, StructuralEntities,
};
pub use features::resource_guard::ResourceGuard;
pub use pipeline::{AnalysisOrchestrator, AnalysisResult, AnalysisStatus};
pub use shared::models::{AnalysisError, FileRecord, Language, Result, Span};
