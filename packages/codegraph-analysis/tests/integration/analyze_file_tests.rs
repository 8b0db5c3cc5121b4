//! End-to-end tests for `AnalysisOrchestrator::analyze_file`
//!
//! Covers the status derivation and the continue/stop failure policy for
//! every stage.

#[path = "../common/mod.rs"]
mod common;
use common::*;

use codegraph_analysis::{
    AnalysisConfig, AnalysisError, AnalysisOrchestrator, AnalysisStatus, ErrorCollector,
    ErrorType, FileRecord, ParameterKind,
};
use pretty_assertions::assert_eq;

fn orchestrator() -> AnalysisOrchestrator {
    AnalysisOrchestrator::default()
}

// ═══════════════════════════════════════════════════════════════════════════
// Success
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_single_function_is_success() {
    let ws = Workspace::new();
    let record = ws.python_file("one.py", fixture_simple_function("compute_total"));
    let mut collector = ErrorCollector::new(ws.root());

    let result = orchestrator()
        .analyze_file(&record, &mut collector, true)
        .unwrap();

    assert_eq!(result.analysis_status, AnalysisStatus::Success);
    assert_eq!(result.functions.len(), 1);
    assert_eq!(result.functions[0].name, "compute_total");
    assert!(result.errors.is_empty());
    assert!(result.error_message.is_none());
    assert_eq!(result.language, "python");
}

#[test]
fn test_well_formed_module_entities() {
    let ws = Workspace::new();
    let record = ws.python_file("service.py", WELL_FORMED_MODULE);
    let mut collector = ErrorCollector::new(ws.root());

    let result = orchestrator()
        .analyze_file(&record, &mut collector, true)
        .unwrap();
    assert!(result.is_success());

    let fetch = &result.functions[0];
    assert_eq!(fetch.name, "fetch_user");
    assert!(fetch.is_async);
    assert_eq!(fetch.decorators, vec!["cache"]);
    assert_eq!(fetch.return_type.as_deref(), Some("User"));
    assert_eq!(fetch.docstring.as_deref(), Some("Fetch one user."));
    assert_eq!(fetch.parameter_names(), vec!["user_id", "timeout"]);
    assert_eq!(fetch.parameters[1].kind, ParameterKind::KeywordOnly);
    assert_eq!(fetch.parameters[1].default_value.as_deref(), Some("1.0"));

    let service = &result.classes[0];
    assert_eq!(service.name, "UserService");
    assert_eq!(service.base_classes, vec!["BaseService"]);
    assert_eq!(service.attributes, vec!["default_limit", "repo"]);
    assert_eq!(service.docstring.as_deref(), Some("Manages users."));
    assert!(service.method("validate").unwrap().has_decorator("staticmethod"));

    let modules: Vec<_> = result.imports.iter().map(|i| i.module.as_str()).collect();
    assert_eq!(modules, vec!["logging", ".models", "..utils"]);
    assert_eq!(result.imports[1].imported_names, vec!["User", "Group"]);
    assert!(result.imports[1].is_relative);
    assert_eq!(result.imports[2].imported_names, vec!["*"]);

    assert_eq!(result.globals, vec!["logger", "MAX_USERS"]);
    // if + `or`
    assert_eq!(result.complexity, 3);
}

#[test]
fn test_success_is_counted_not_logged() {
    let ws = Workspace::new();
    let record = ws.python_file("ok.py", "x = 1\n");
    let mut collector = ErrorCollector::new(ws.root());

    orchestrator()
        .analyze_file(&record, &mut collector, true)
        .unwrap();

    let stats = collector.get_statistics();
    assert_eq!(stats.successful, 1);
    assert_eq!(stats.failed, 0);
    assert!(collector.records().is_empty());
}

// ═══════════════════════════════════════════════════════════════════════════
// Partial
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_mixed_file_is_partial_with_valid_constructs() {
    let ws = Workspace::new();
    let record = ws.python_file("mixed.py", MIXED_VALID_INVALID);
    let mut collector = ErrorCollector::new(ws.root());

    let result = orchestrator()
        .analyze_file(&record, &mut collector, true)
        .unwrap();

    assert_eq!(result.analysis_status, AnalysisStatus::Partial);
    assert!(!result.errors.is_empty());
    assert_eq!(result.errors[0], "Parse errors detected");
    assert!(result.error_message.is_none());
    assert!(result
        .functions
        .iter()
        .any(|f| f.name == "initialize_system"));
    assert!(result.imports.iter().any(|i| i.module == "os"));
    assert!(result.line_count > 1);
}

#[test]
fn test_partial_never_escalates_in_stop_mode() {
    let ws = Workspace::new();
    let record = ws.python_file("broken_first.py", MISSING_COLON_FIRST);
    let mut collector = ErrorCollector::new(ws.root());

    let result = orchestrator()
        .analyze_file(&record, &mut collector, false)
        .unwrap();

    assert!(result.is_partial());
    assert_eq!(result.errors, vec!["Parse errors detected"]);
    assert!(result.functions.iter().any(|f| f.name == "still_valid"));
    assert!(result.imports.iter().any(|i| i.module == "os"));
    assert_eq!(collector.records().len(), 1);
    assert_eq!(collector.records()[0].error_type, ErrorType::ParsingError);
}

#[test]
fn test_partial_is_logged_once_as_parsing_error() {
    let ws = Workspace::new();
    let record = ws.python_file("src/broken.py", "def ok():\n    pass\n\nif True\n    pass\n");
    let mut collector = ErrorCollector::new(ws.root());

    orchestrator()
        .analyze_file(&record, &mut collector, true)
        .unwrap();

    assert_eq!(collector.records().len(), 1);
    let logged = &collector.records()[0];
    assert_eq!(logged.error_type, ErrorType::ParsingError);
    assert!(logged.can_retry);
    assert_eq!(logged.context.line_count, Some(6));
    assert_eq!(
        logged.file,
        std::path::Path::new("src/broken.py").display().to_string()
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// Failed / escalated
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_oversize_file_continue_mode() {
    let ws = Workspace::new();
    let record = ws.python_file("big.py", "x = 1\n".repeat(400));
    let orchestrator = AnalysisOrchestrator::new(AnalysisConfig::default().max_file_size_bytes(1024 * 1024 / 2));
    let mut collector = ErrorCollector::new(ws.root());

    // 2400 bytes is under the half-MiB limit
    assert!(orchestrator
        .analyze_file(&record, &mut collector, true)
        .unwrap()
        .is_success());

    let huge = FileRecord {
        size: 1024 * 1024,
        ..record
    };
    let result = orchestrator.analyze_file(&huge, &mut collector, true).unwrap();

    assert_eq!(result.analysis_status, AnalysisStatus::Failed);
    assert_eq!(
        result.error_message.as_deref(),
        Some("File too large: 1.0MB (max: 0.5MB)")
    );
    assert_eq!(result.entity_count(), 0);
}

#[test]
fn test_oversize_file_stop_mode_raises() {
    let ws = Workspace::new();
    let record = FileRecord {
        size: 10 * 1024 * 1024,
        ..ws.python_file("big.py", "x = 1\n")
    };
    let mut collector = ErrorCollector::new(ws.root());

    let err = orchestrator()
        .analyze_file(&record, &mut collector, false)
        .unwrap_err();

    assert!(matches!(err, AnalysisError::FileTooLarge { .. }));
    assert!(err.to_string().contains("File too large"));
    // Recorded before escalating
    assert_eq!(collector.records().len(), 1);
}

#[test]
fn test_unsupported_language_message_is_exact() {
    let ws = Workspace::new();
    let record = ws.file("main.go", "package main\n", "go");
    let mut collector = ErrorCollector::new(ws.root());

    let result = orchestrator()
        .analyze_file(&record, &mut collector, true)
        .unwrap();
    assert_eq!(result.error_message.as_deref(), Some("Unsupported language: go"));
    assert!(result.is_failed());

    let err = orchestrator()
        .analyze_file(&record, &mut collector, false)
        .unwrap_err();
    assert_eq!(err.to_string(), "Unsupported language: go");
}

#[test]
fn test_unsupported_language_ignores_content() {
    let ws = Workspace::new();
    let mut collector = ErrorCollector::new(ws.root());

    for (name, content) in [("a.js", "function f() {}"), ("b.js", "def f():\n    pass\n"), ("c.js", "")] {
        let record = ws.file(name, content, "javascript");
        let result = orchestrator()
            .analyze_file(&record, &mut collector, true)
            .unwrap();
        assert_eq!(
            result.error_message.as_deref(),
            Some("Unsupported language: javascript")
        );
    }
}

#[test]
fn test_read_failure_is_file_access_error() {
    let ws = Workspace::new();
    let record = ws.python_file("gone.py", "x = 1\n");
    std::fs::remove_file(&record.path).unwrap();
    let mut collector = ErrorCollector::new(ws.root());

    let result = orchestrator()
        .analyze_file(&record, &mut collector, true)
        .unwrap();

    assert!(result.is_failed());
    assert_eq!(collector.records()[0].error_type, ErrorType::FileAccessError);
    assert!(collector.records()[0].can_retry);

    let err = orchestrator()
        .analyze_file(&record, &mut collector, false)
        .unwrap_err();
    assert!(matches!(err, AnalysisError::Read { .. }));
}

#[test]
fn test_directory_path_is_file_access_error() {
    let ws = Workspace::new();
    std::fs::create_dir_all(ws.path("pkg.py")).unwrap();
    let record = FileRecord::new(ws.path("pkg.py"), 0, "", "python", chrono::Utc::now());
    let mut collector = ErrorCollector::new(ws.root());

    let result = orchestrator()
        .analyze_file(&record, &mut collector, true)
        .unwrap();

    assert!(result.is_failed());
    assert_eq!(collector.records()[0].error_type, ErrorType::FileAccessError);
}

// ═══════════════════════════════════════════════════════════════════════════
// Batch helper
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_analyze_files_continue_mode_covers_every_record() {
    let ws = Workspace::new();
    let records = vec![
        ws.python_file("a.py", fixture_n_functions(3)),
        ws.python_file("b.py", MIXED_VALID_INVALID),
        ws.file("c.rb", "puts 1", "ruby"),
        ws.python_file("d.py", ""),
    ];
    let mut collector = ErrorCollector::new(ws.root());

    let results = orchestrator()
        .analyze_files(&records, &mut collector, true)
        .unwrap();

    let statuses: Vec<_> = results.iter().map(|r| r.analysis_status).collect();
    assert_eq!(
        statuses,
        vec![
            AnalysisStatus::Success,
            AnalysisStatus::Partial,
            AnalysisStatus::Failed,
            AnalysisStatus::Success,
        ]
    );

    let stats = collector.get_statistics();
    assert_eq!(stats.total_files, 4);
    assert_eq!(stats.successful, 2);
    assert_eq!(stats.failed, 2);
    assert_eq!(stats.success_rate, "50%");
}

#[test]
fn test_analyze_files_stop_mode_halts_on_hard_failure() {
    let ws = Workspace::new();
    let records = vec![
        ws.python_file("a.py", "x = 1\n"),
        ws.file("b.rs", "fn main() {}", "rust"),
        ws.python_file("c.py", "y = 2\n"),
    ];
    let mut collector = ErrorCollector::new(ws.root());

    let err = orchestrator()
        .analyze_files(&records, &mut collector, false)
        .unwrap_err();

    assert_eq!(err.to_string(), "Unsupported language: rust");
    // c.py was never analyzed
    assert_eq!(collector.get_statistics().successful, 1);
}

#[test]
fn test_configured_policy_is_used_by_analyze() {
    let ws = Workspace::new();
    let record = ws.file("x.txt", "hello", "text");
    let mut collector = ErrorCollector::new(ws.root());

    let lenient = AnalysisOrchestrator::new(AnalysisConfig::default());
    assert!(lenient.analyze(&record, &mut collector).unwrap().is_failed());

    let strict = AnalysisOrchestrator::new(AnalysisConfig::default().continue_on_error(false));
    assert!(strict.analyze(&record, &mut collector).is_err());
}
