/*
 * Import Analysis Module
 *
 * Handles Python import statements:
 * - import module                  -> one entity, no names
 * - import a.b as c, d             -> one entity per module ("a.b", "d")
 * - from module import name        -> module + imported names
 * - from module import (a, b as c) -> names keep their original spelling
 * - from module import *           -> names ["*"]
 * - from . import x / from ..m import y (relative)
 * - from __future__ import annotations
 */

use crate::features::parsing::domain::ImportEntity;
use crate::shared::utils::tree_sitter::{children, extract_node_text_owned, field_text, node_to_span};
use tree_sitter::Node;

/// Extract one entity per module named by a plain `import` statement
pub fn extract_import_statement(node: &Node, source: &str) -> Vec<ImportEntity> {
    if node.kind() != "import_statement" {
        return Vec::new();
    }

    let span = node_to_span(node);

    children(node)
        .iter()
        .filter_map(|child| imported_name(child, source))
        .map(|module| ImportEntity {
            module,
            imported_names: Vec::new(),
            is_relative: false,
            span,
        })
        .collect()
}

/// Extract a `from ... import ...` (or `from __future__ import ...`) statement
pub fn extract_import_from_statement(node: &Node, source: &str) -> Option<ImportEntity> {
    let module = match node.kind() {
        "import_from_statement" => field_text(node, "module_name", source)?,
        "future_import_statement" => "__future__".to_string(),
        _ => return None,
    };

    let mut imported_names = Vec::new();
    let mut after_import = false;

    for child in children(node) {
        if child.kind() == "import" {
            after_import = true;
            continue;
        }
        if !after_import {
            continue;
        }
        match child.kind() {
            "wildcard_import" => imported_names.push("*".to_string()),
            _ => {
                if let Some(name) = imported_name(&child, source) {
                    imported_names.push(name);
                }
            }
        }
    }

    Some(ImportEntity {
        is_relative: module.starts_with('.'),
        module,
        imported_names,
        span: node_to_span(node),
    })
}

/// Original (un-aliased) name of one import target
fn imported_name(node: &Node, source: &str) -> Option<String> {
    match node.kind() {
        "dotted_name" | "identifier" => Some(extract_node_text_owned(node, source)),
        "aliased_import" => field_text(node, "name", source),
        _ => None,
    }
}
