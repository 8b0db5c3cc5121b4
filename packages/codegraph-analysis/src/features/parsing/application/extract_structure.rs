//! Extract structure use case
//!
//! Turns a concrete syntax tree into structural entities. The walk never
//! aborts on parse errors: definitions inside valid subtrees (and inside
//! module-level `ERROR` nodes the parser recovered from) are still reported.

use tree_sitter::{Node, Tree};

use crate::features::parsing::domain::StructuralEntities;
use crate::features::parsing::infrastructure::count_error_nodes;
use crate::features::parsing::infrastructure::extractors::{
    assignment_target_names, compute_complexity, extract_class, extract_function,
    extract_import_from_statement, extract_import_statement, statement_assignments,
    unwrap_decorated,
};
use crate::shared::models::{AnalysisError, Language, Result};
use crate::shared::utils::tree_sitter::children;

const IMPORT_KINDS: &[&str] = &[
    "import_statement",
    "import_from_statement",
    "future_import_statement",
];

/// Everything derived from one parsed file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub entities: StructuralEntities,
    pub complexity: u32,
    pub line_count: usize,
    pub parse_error_count: usize,
}

impl Extraction {
    pub fn has_parse_errors(&self) -> bool {
        self.parse_error_count > 0
    }
}

/// Structural extractor (stateless)
#[derive(Debug, Default, Clone, Copy)]
pub struct StructureExtractor;

impl StructureExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a declared language, rejecting anything without a grammar
    pub fn validate_language(&self, declared: &str) -> Result<Language> {
        Language::from_declared(declared)
            .ok_or_else(|| AnalysisError::unsupported_language(declared))
    }

    /// Run every pass over a parsed tree
    pub fn extract(&self, tree: &Tree, source: &str) -> Extraction {
        Extraction {
            entities: self.walk(tree, source),
            complexity: self.compute_complexity(tree),
            line_count: Self::count_lines(source),
            parse_error_count: self.detect_parse_errors(tree),
        }
    }

    /// Walk the tree into functions, classes, imports and globals
    pub fn walk(&self, tree: &Tree, source: &str) -> StructuralEntities {
        let root = tree.root_node();
        let mut entities = StructuralEntities::default();

        for stmt in children(&root) {
            visit_module_statement(&stmt, source, &mut entities);
        }

        // Imports count wherever they appear (try/except fallbacks, TYPE_CHECKING blocks)
        for node in find_imports(&root) {
            if node.kind() == "import_statement" {
                entities.imports.extend(extract_import_statement(&node, source));
            } else if let Some(import) = extract_import_from_statement(&node, source) {
                entities.imports.push(import);
            }
        }

        entities
    }

    /// Number of parser-flagged error nodes
    pub fn detect_parse_errors(&self, tree: &Tree) -> usize {
        count_error_nodes(&tree.root_node())
    }

    pub fn compute_complexity(&self, tree: &Tree) -> u32 {
        compute_complexity(&tree.root_node())
    }

    /// Newline count plus one: an empty file has one line
    pub fn count_lines(source: &str) -> usize {
        source.matches('\n').count() + 1
    }
}

fn visit_module_statement(stmt: &Node, source: &str, entities: &mut StructuralEntities) {
    match stmt.kind() {
        "function_definition" | "class_definition" | "decorated_definition" => {
            let (def, decorators) = unwrap_decorated(stmt, source);
            match def.kind() {
                "function_definition" => {
                    if let Some(function) = extract_function(&def, source, decorators) {
                        entities.functions.push(function);
                    }
                }
                "class_definition" => {
                    if let Some(class) = extract_class(&def, source) {
                        entities.classes.push(class);
                    }
                }
                _ => {}
            }
        }
        "expression_statement" => {
            for assignment in statement_assignments(stmt) {
                for name in assignment_target_names(&assignment, source) {
                    if !entities.globals.contains(&name) {
                        entities.globals.push(name);
                    }
                }
            }
        }
        "ERROR" => {
            for child in children(stmt) {
                visit_module_statement(&child, source, entities);
            }
        }
        _ => {}
    }
}

/// Import statements anywhere below `root`, in source order
fn find_imports<'a>(root: &Node<'a>) -> Vec<Node<'a>> {
    let mut found = Vec::new();
    let mut stack = vec![*root];
    while let Some(node) = stack.pop() {
        if IMPORT_KINDS.contains(&node.kind()) {
            found.push(node);
            continue;
        }
        for i in (0..node.child_count()).rev() {
            if let Some(child) = node.child(i) {
                stack.push(child);
            }
        }
    }
    found
}
