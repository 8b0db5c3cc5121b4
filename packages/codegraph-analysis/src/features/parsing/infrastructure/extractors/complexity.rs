//! Cyclomatic complexity estimate
//!
//! One base path plus one per decision point anywhere in the tree, including
//! nested functions and class bodies.

use tree_sitter::Node;

/// Node kinds that open an additional path through the code
const DECISION_POINTS: &[&str] = &[
    "if_statement",
    "elif_clause",
    "for_statement",
    "while_statement",
    "except_clause",
    "boolean_operator", // and / or
    "conditional_expression",
    "case_clause",
    "for_in_clause", // comprehension loops
    "if_clause",     // comprehension filters
];

/// Compute the complexity of everything below `root`
pub fn compute_complexity(root: &Node) -> u32 {
    let mut complexity = 1u32;
    let mut stack = vec![*root];

    while let Some(node) = stack.pop() {
        if DECISION_POINTS.contains(&node.kind()) {
            complexity = complexity.saturating_add(1);
        }
        for i in 0..node.child_count() {
            if let Some(child) = node.child(i) {
                stack.push(child);
            }
        }
    }

    complexity
}
