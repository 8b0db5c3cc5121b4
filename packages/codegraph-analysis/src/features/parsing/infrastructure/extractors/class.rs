/*
 * Class Analysis Module
 *
 * Extracts class metadata from AST:
 * - Name
 * - Base classes (inheritance)
 * - Attributes (class-body assignments + `self.x` writes in methods, source order)
 * - Methods (full FunctionEntity, decorators included)
 * - Docstring
 * - Span
 */

use crate::features::parsing::domain::{ClassEntity, FunctionEntity};
use crate::shared::utils::tree_sitter::{
    children, extract_docstring, extract_node_text_owned, field_text, find_block_child,
    find_descendants_by_kind, node_to_span,
};
use tree_sitter::Node;

use super::function::{extract_function, unwrap_decorated};
use super::variable::{assignment_target_names, self_attribute_target, statement_assignments};

/// Extract class metadata from a class_definition node
pub fn extract_class(node: &Node, source: &str) -> Option<ClassEntity> {
    if node.kind() != "class_definition" {
        return None;
    }

    let name = field_text(node, "name", source).filter(|n| !n.is_empty())?;
    let base_classes = extract_base_classes(node, source);

    let mut methods = Vec::new();
    let mut attributes = Vec::new();
    let mut docstring = None;

    if let Some(block) = find_block_child(node) {
        docstring = extract_docstring(&block, source);

        for stmt in children(&block) {
            visit_class_statement(&stmt, source, &mut methods, &mut attributes);
        }
    }

    Some(ClassEntity {
        name,
        base_classes,
        attributes,
        methods,
        docstring,
        span: node_to_span(node),
    })
}

fn visit_class_statement(
    stmt: &Node,
    source: &str,
    methods: &mut Vec<FunctionEntity>,
    attributes: &mut Vec<String>,
) {
    match stmt.kind() {
        "function_definition" | "decorated_definition" => {
            let (def, decorators) = unwrap_decorated(stmt, source);
            if let Some(method) = extract_function(&def, source, decorators) {
                methods.push(method);
                for assignment in find_descendants_by_kind(&def, "assignment") {
                    if let Some(attr) = self_attribute_target(&assignment, source) {
                        push_unique(attributes, attr);
                    }
                }
            }
        }
        "expression_statement" => {
            for assignment in statement_assignments(stmt) {
                for target in assignment_target_names(&assignment, source) {
                    push_unique(attributes, target);
                }
            }
        }
        // Recovered fragments inside a broken class body
        "ERROR" => {
            for child in children(stmt) {
                visit_class_statement(&child, source, methods, attributes);
            }
        }
        _ => {}
    }
}

/// Base class expressions from the superclass argument list
///
/// Keyword arguments such as `metaclass=ABCMeta` are not bases.
fn extract_base_classes(node: &Node, source: &str) -> Vec<String> {
    let Some(args) = node.child_by_field_name("superclasses") else {
        return Vec::new();
    };

    children(&args)
        .iter()
        .filter(|arg| matches!(arg.kind(), "identifier" | "attribute" | "subscript"))
        .map(|arg| extract_node_text_owned(arg, source))
        .collect()
}

fn push_unique(items: &mut Vec<String>, item: String) {
    if !items.contains(&item) {
        items.push(item);
    }
}
