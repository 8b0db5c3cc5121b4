//! Parse-error detection

use tree_sitter::Node;

/// Count parser-flagged error nodes (`ERROR` and zero-width `MISSING` tokens)
pub fn count_error_nodes(root: &Node) -> usize {
    if !root.has_error() {
        return 0;
    }

    let mut count = 0;
    let mut stack = vec![*root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            count += 1;
        }
        // has_error() is true for any node with an error somewhere below
        if !node.has_error() {
            continue;
        }
        for i in 0..node.child_count() {
            if let Some(child) = node.child(i) {
                stack.push(child);
            }
        }
    }
    count
}
