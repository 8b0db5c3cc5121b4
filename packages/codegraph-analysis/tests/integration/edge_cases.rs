//! Edge case tests for analysis robustness
//!
//! Boundary inputs, pathological parses and properties that must hold for
//! any content.

#[path = "../common/mod.rs"]
mod common;
use common::*;

use codegraph_analysis::features::parsing::{Parser, TreeSitterParser};
use codegraph_analysis::{
    AnalysisConfig, AnalysisOrchestrator, AnalysisResult, AnalysisStatus, ErrorCollector,
    ErrorType, Language, Result,
};
use proptest::prelude::*;
use std::time::Duration;
use tree_sitter::Tree;

fn analyze(ws: &Workspace, name: &str, content: &str) -> AnalysisResult {
    let record = ws.python_file(name, content);
    let mut collector = ErrorCollector::new(ws.root());
    AnalysisOrchestrator::default()
        .analyze_file(&record, &mut collector, true)
        .unwrap()
}

// ═══════════════════════════════════════════════════════════════════════════
// Empty & Minimal Cases
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_empty_file() {
    let ws = Workspace::new();
    let result = analyze(&ws, "empty.py", "");

    assert_eq!(result.analysis_status, AnalysisStatus::Success);
    assert_eq!(result.line_count, 1);
    assert!(result.functions.is_empty());
    assert!(result.classes.is_empty());
    assert_eq!(result.complexity, 1);
}

#[test]
fn test_whitespace_only_line_count() {
    let ws = Workspace::new();
    for n in [1, 2, 7, 50] {
        let result = analyze(&ws, &format!("blank_{n}.py"), &fixture_blank_lines(n));
        assert_eq!(result.line_count, n, "{n} lines");
        assert!(result.is_success());
    }
}

#[test]
fn test_comment_only_file_is_success() {
    let ws = Workspace::new();
    let result = analyze(&ws, "comments.py", "# just a comment\n# another\n");

    assert_eq!(result.analysis_status, AnalysisStatus::Success);
    assert_eq!(result.entity_count(), 0);
}

#[test]
fn test_docstring_only_file() {
    let ws = Workspace::new();
    let result = analyze(&ws, "doc.py", "\"\"\"Module docs.\"\"\"\n");

    assert!(result.is_success());
    assert_eq!(result.entity_count(), 0);
}

#[test]
fn test_unicode_identifiers() {
    let ws = Workspace::new();
    let result = analyze(&ws, "uni.py", "def función_con_acentos():\n    return \"¿cómo estás?\"\n");

    assert!(result.is_success());
    assert_eq!(result.functions[0].name, "función_con_acentos");
}

#[test]
fn test_crlf_line_endings() {
    let ws = Workspace::new();
    let result = analyze(&ws, "crlf.py", "def a():\r\n    pass\r\n\r\ndef b():\r\n    pass\r\n");

    assert!(result.is_success());
    assert_eq!(result.functions.len(), 2);
    assert_eq!(result.line_count, 6);
}

#[test]
fn test_deeply_nested_expression() {
    let ws = Workspace::new();
    let depth = 200;
    let source = format!("x = {}1{}\n", "(".repeat(depth), ")".repeat(depth));
    let result = analyze(&ws, "nested.py", &source);

    assert!(result.is_success());
    assert_eq!(result.globals, vec!["x"]);
}

#[test]
fn test_many_functions() {
    let ws = Workspace::new();
    let result = analyze(&ws, "many.py", &fixture_n_functions(500));

    assert!(result.is_success());
    assert_eq!(result.functions.len(), 500);
    assert_eq!(result.functions[499].name, "func_499");
}

#[test]
fn test_garbage_is_partial_not_fatal() {
    let ws = Workspace::new();
    let result = analyze(&ws, "garbage.py", ")))(((:::\n@@@\n");

    assert_eq!(result.analysis_status, AnalysisStatus::Partial);
    assert!(result.error_message.is_none());
    assert!(result.line_count >= 1);
}

#[test]
fn test_unclosed_bracket_hides_later_definitions() {
    let ws = Workspace::new();
    let result = analyze(&ws, "unclosed.py", UNCLOSED_BRACKET_FIRST);

    // The parser folds the rest of the file into one error node
    assert!(result.is_partial());
    assert!(result.functions.is_empty());
    assert_eq!(result.line_count, 5);
}

#[test]
fn test_missing_colon_keeps_later_definitions() {
    let ws = Workspace::new();
    let result = analyze(&ws, "colon.py", MISSING_COLON_FIRST);

    assert!(result.is_partial());
    assert!(result.functions.iter().any(|f| f.name == "still_valid"));
}

#[test]
fn test_invalid_utf8_bytes() {
    let ws = Workspace::new();
    let record = ws.python_file("latin1.py", b"# -*- coding: latin-1 -*-\ns = 'na\xefve'\n".as_slice());
    let mut collector = ErrorCollector::new(ws.root());

    let result = AnalysisOrchestrator::default()
        .analyze_file(&record, &mut collector, false)
        .unwrap();

    assert!(result.is_partial());
    assert_eq!(result.globals, vec!["s"]);
    assert_eq!(collector.records()[0].error_type, ErrorType::EncodingError);
}

// ═══════════════════════════════════════════════════════════════════════════
// Timeouts
// ═══════════════════════════════════════════════════════════════════════════

/// Parser that sleeps past any small budget before producing a real tree
struct SlowParser(Duration);

impl Parser for SlowParser {
    fn parse(&self, source: &str, _budget: Duration) -> Result<Option<Tree>> {
        std::thread::sleep(self.0);
        TreeSitterParser::python().parse(source, Duration::from_secs(10))
    }

    fn language(&self) -> Language {
        Language::Python
    }
}

#[test]
fn test_slow_parse_continue_mode_is_failed_timeout() {
    let ws = Workspace::new();
    let record = ws.python_file("slow.py", fixture_simple_function("f"));
    let orchestrator = AnalysisOrchestrator::new(AnalysisConfig::default().parse_timeout_ms(20))
        .with_parser(Box::new(SlowParser(Duration::from_millis(200))));
    let mut collector = ErrorCollector::new(ws.root());

    let result = orchestrator.analyze_file(&record, &mut collector, true).unwrap();

    // The late tree is discarded: no entities leak through
    assert_eq!(result.analysis_status, AnalysisStatus::Failed);
    assert!(result.functions.is_empty());
    assert_eq!(result.error_message.as_deref(), Some("Parsing timeout (0.02s)"));
    assert_eq!(collector.records()[0].error_type, ErrorType::TimeoutError);
}

#[test]
fn test_slow_parse_stop_mode_raises() {
    let ws = Workspace::new();
    let record = ws.python_file("slow.py", "x = 1\n");
    let orchestrator = AnalysisOrchestrator::new(AnalysisConfig::default().parse_timeout_ms(1000))
        .with_parser(Box::new(SlowParser(Duration::from_millis(1200))));
    let mut collector = ErrorCollector::new(ws.root());

    let err = orchestrator
        .analyze_file(&record, &mut collector, false)
        .unwrap_err();
    assert_eq!(err.to_string(), "Parsing timeout (1s)");
}

#[test]
fn test_tree_sitter_budget_cancels_real_parse() {
    // A large input with a microscopic budget: tree-sitter gives up on its own
    let source = fixture_n_functions(20_000);
    let outcome = TreeSitterParser::python()
        .parse(&source, Duration::from_micros(1))
        .unwrap();
    assert!(outcome.is_none());
}

// ═══════════════════════════════════════════════════════════════════════════
// Properties
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_reanalysis_is_deterministic(source in "[a-z_():=+ \n]{0,200}") {
        let ws = Workspace::new();
        let first = analyze(&ws, "a.py", &source);
        let second = analyze(&ws, "a.py", &source);

        prop_assert_eq!(&first.functions, &second.functions);
        prop_assert_eq!(&first.classes, &second.classes);
        prop_assert_eq!(&first.imports, &second.imports);
        prop_assert_eq!(first.complexity, second.complexity);
        prop_assert_eq!(first.line_count, second.line_count);
        prop_assert_eq!(first.analysis_status, second.analysis_status);
    }

    #[test]
    fn prop_line_count_is_newlines_plus_one(source in "[a-z =\n]{0,300}") {
        let ws = Workspace::new();
        let result = analyze(&ws, "lines.py", &source);

        prop_assert_eq!(result.line_count, source.matches('\n').count() + 1);
    }

    #[test]
    fn prop_complexity_grows_with_branches(branches in 0usize..30) {
        let ws = Workspace::new();
        let fewer = analyze(&ws, "fewer.py", &fixture_branches(branches));
        let more = analyze(&ws, "more.py", &fixture_branches(branches + 1));

        prop_assert!(fewer.complexity >= 1);
        prop_assert!(more.complexity > fewer.complexity);
    }

    #[test]
    fn prop_never_fails_on_python_input(source in "\\PC{0,120}") {
        let ws = Workspace::new();
        let result = analyze(&ws, "any.py", &source);

        prop_assert_ne!(result.analysis_status, AnalysisStatus::Failed);
        prop_assert!(result.complexity >= 1);
    }
}
