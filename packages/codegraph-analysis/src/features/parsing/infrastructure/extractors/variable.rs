/*
 * Variable Analysis Module
 *
 * Extracts assignment targets used for:
 * - Module globals (top-level assignment targets)
 * - Class attributes (class-body assignments, `self.x = ...` in methods)
 *
 * Handles:
 * - Direct assignments: x = 10
 * - Chained assignments: x = y = 0
 * - Tuple assignments: x, y = 1, 2
 * - Annotated assignments: x: int = 10, and bare annotations (x: int)
 */

use crate::shared::utils::tree_sitter::{extract_node_text, extract_node_text_owned};
use tree_sitter::Node;

/// Assignment nodes carried by one expression_statement, chained ones included
pub fn statement_assignments<'a>(stmt: &Node<'a>) -> Vec<Node<'a>> {
    let mut assignments = Vec::new();
    if stmt.kind() != "expression_statement" {
        return assignments;
    }

    for i in 0..stmt.child_count() {
        let Some(child) = stmt.child(i) else {
            continue;
        };
        let mut current = Some(child);
        while let Some(node) = current.filter(|n| n.kind() == "assignment") {
            assignments.push(node);
            current = node.child_by_field_name("right");
        }
    }

    assignments
}

/// Plain names bound by an assignment's left-hand side
///
/// Attribute and subscript targets (`obj.x = ...`, `d[k] = ...`) bind no name.
pub fn assignment_target_names(assignment: &Node, source: &str) -> Vec<String> {
    let mut names = Vec::new();
    if let Some(left) = assignment.child_by_field_name("left") {
        collect_pattern_names(&left, source, &mut names);
    }
    names
}

fn collect_pattern_names(node: &Node, source: &str, names: &mut Vec<String>) {
    match node.kind() {
        "identifier" => names.push(extract_node_text_owned(node, source)),
        "pattern_list" | "tuple_pattern" | "list_pattern" | "list_splat_pattern" => {
            for i in 0..node.child_count() {
                if let Some(child) = node.child(i) {
                    collect_pattern_names(&child, source, names);
                }
            }
        }
        _ => {}
    }
}

/// Attribute name for `self.<name> = ...` assignments
pub fn self_attribute_target(assignment: &Node, source: &str) -> Option<String> {
    let left = assignment.child_by_field_name("left")?;
    if left.kind() != "attribute" {
        return None;
    }

    let object = left.child_by_field_name("object")?;
    if extract_node_text(&object, source) != "self" {
        return None;
    }

    left.child_by_field_name("attribute")
        .map(|attr| extract_node_text_owned(&attr, source))
}
