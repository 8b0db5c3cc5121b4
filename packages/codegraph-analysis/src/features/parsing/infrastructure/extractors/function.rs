/*
 * Function Analysis Module
 *
 * Extracts function metadata from AST:
 * - Name
 * - Parameters (with types/defaults)
 * - Return type
 * - Decorators
 * - Async flag
 * - Docstring
 * - Span
 */

use crate::features::parsing::domain::FunctionEntity;
use crate::shared::utils::tree_sitter::{
    extract_docstring, extract_node_text, field_text, find_block_child, find_children_by_kind,
    is_async_definition, node_to_span,
};
use tree_sitter::Node;

use super::parameter::extract_parameters;

/// Extract function metadata from a function_definition node
pub fn extract_function(node: &Node, source: &str, decorators: Vec<String>) -> Option<FunctionEntity> {
    if node.kind() != "function_definition" {
        return None;
    }

    let name = field_text(node, "name", source).filter(|n| !n.is_empty())?;

    let parameters = node
        .child_by_field_name("parameters")
        .map(|params| extract_parameters(&params, source))
        .unwrap_or_default();

    let docstring = find_block_child(node).and_then(|block| extract_docstring(&block, source));

    Some(FunctionEntity {
        name,
        parameters,
        return_type: field_text(node, "return_type", source),
        decorators,
        is_async: is_async_definition(node),
        docstring,
        span: node_to_span(node),
    })
}

/// Split a decorated_definition into its inner definition and decorator names
///
/// Non-decorated nodes come back unchanged with no decorators.
pub fn unwrap_decorated<'a>(node: &Node<'a>, source: &str) -> (Node<'a>, Vec<String>) {
    if node.kind() != "decorated_definition" {
        return (*node, Vec::new());
    }

    let decorators = find_children_by_kind(node, "decorator")
        .iter()
        .map(|d| {
            extract_node_text(d, source)
                .trim_start_matches('@')
                .trim()
                .to_string()
        })
        .collect();

    let definition = node.child_by_field_name("definition").unwrap_or(*node);
    (definition, decorators)
}
