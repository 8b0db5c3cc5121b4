//! Tree-sitter Utility Functions
//!
//! Common utilities for working with tree-sitter AST nodes, shared by the
//! function/class/import/variable extractors.
//!
//! Nothing here panics on malformed trees: text lookups fall back to `""`
//! when a byte range is out of bounds.

use crate::shared::models::Span;
use tree_sitter::Node;

// ═══════════════════════════════════════════════════════════════════════════
// Node Traversal Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Find a direct child node by kind
#[inline]
pub fn find_child_by_kind<'a>(node: &Node<'a>, kind: &str) -> Option<Node<'a>> {
    (0..node.child_count())
        .filter_map(|i| node.child(i))
        .find(|child| child.kind() == kind)
}

/// Find all direct children by kind
#[inline]
pub fn find_children_by_kind<'a>(node: &Node<'a>, kind: &str) -> Vec<Node<'a>> {
    (0..node.child_count())
        .filter_map(|i| node.child(i))
        .filter(|child| child.kind() == kind)
        .collect()
}

/// All direct children, in source order
#[inline]
pub fn children<'a>(node: &Node<'a>) -> Vec<Node<'a>> {
    (0..node.child_count()).filter_map(|i| node.child(i)).collect()
}

/// Find all descendants by kind (depth-first, source order)
pub fn find_descendants_by_kind<'a>(node: &Node<'a>, kind: &str) -> Vec<Node<'a>> {
    let mut result = Vec::new();
    let mut stack = vec![*node];
    while let Some(current) = stack.pop() {
        if current.kind() == kind {
            result.push(current);
        }
        for i in (0..current.child_count()).rev() {
            if let Some(child) = current.child(i) {
                stack.push(child);
            }
        }
    }
    result
}

// ═══════════════════════════════════════════════════════════════════════════
// Text Extraction Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Extract text content from a node
#[inline]
pub fn extract_node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    source.get(node.byte_range()).unwrap_or("")
}

/// Extract text content from a node as owned String
#[inline]
pub fn extract_node_text_owned(node: &Node, source: &str) -> String {
    extract_node_text(node, source).to_string()
}

/// Text of a named field, if present
pub fn field_text(node: &Node, field: &str, source: &str) -> Option<String> {
    node.child_by_field_name(field)
        .map(|child| extract_node_text_owned(&child, source))
}

/// Extract identifier name from a node that has an identifier child
#[inline]
pub fn extract_identifier_name(node: &Node, source: &str) -> Option<String> {
    find_child_by_kind(node, "identifier").map(|id_node| extract_node_text_owned(&id_node, source))
}

// ═══════════════════════════════════════════════════════════════════════════
// Span Conversion Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Convert tree-sitter node to Span (1-indexed lines)
#[inline]
pub fn node_to_span(node: &Node) -> Span {
    let start_pos = node.start_position();
    let end_pos = node.end_position();

    Span::new(
        start_pos.row as u32 + 1, // 1-indexed
        start_pos.column as u32,
        end_pos.row as u32 + 1, // 1-indexed
        end_pos.column as u32,
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// Python-specific Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Find the body block of a definition node (function_definition, class_definition)
pub fn find_block_child<'a>(node: &Node<'a>) -> Option<Node<'a>> {
    node.child_by_field_name("body")
        .or_else(|| find_child_by_kind(node, "block"))
}

/// Extract docstring from a block node (string literal as first statement)
pub fn extract_docstring(block_node: &Node, source: &str) -> Option<String> {
    if block_node.kind() != "block" {
        return None;
    }

    // Only the first statement counts; comments are extras and skipped
    let stmt = children(block_node).into_iter().find(|c| !c.is_extra())?;
    if stmt.kind() != "expression_statement" {
        return None;
    }
    let string_node = stmt.child(0)?;
    if string_node.kind() != "string" {
        return None;
    }

    Some(strip_string_delimiters(extract_node_text(&string_node, source)).to_string())
}

/// Strip prefix letters and quote delimiters from a Python string literal
pub fn strip_string_delimiters(raw: &str) -> &str {
    let unprefixed = raw.trim_start_matches(|c: char| matches!(c, 'r' | 'R' | 'b' | 'B' | 'u' | 'U' | 'f' | 'F'));
    for quote in ["\"\"\"", "'''", "\"", "'"] {
        if let Some(inner) = unprefixed
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner.trim();
        }
    }
    unprefixed.trim()
}

/// Check whether a function_definition carries the `async` keyword
pub fn is_async_definition(node: &Node) -> bool {
    // `async` is an anonymous token preceding `def` inside the definition itself
    children(node)
        .iter()
        .take_while(|child| child.kind() != "def")
        .any(|child| child.kind() == "async")
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
