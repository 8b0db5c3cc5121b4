/*
 * Parameter Analysis Module
 *
 * Extracts function/method parameters from AST:
 * - Parameter names
 * - Type annotations
 * - Default values (any expression, kept as source text)
 * - Special parameters (*args, **kwargs, bare `*`, `/`)
 */

use crate::features::parsing::domain::{Parameter, ParameterKind};
use crate::shared::utils::tree_sitter::{
    extract_identifier_name, extract_node_text, extract_node_text_owned, field_text, find_child_by_kind,
    node_to_span,
};
use tree_sitter::Node;

/// Extract parameters from a `parameters` node, preserving order
pub fn extract_parameters(node: &Node, source: &str) -> Vec<Parameter> {
    let mut params = Vec::new();

    if node.kind() != "parameters" {
        return params;
    }

    let mut keyword_only = false;

    for i in 0..node.child_count() {
        let Some(child) = node.child(i) else {
            continue;
        };

        match child.kind() {
            // Bare `*` marker: everything after is keyword-only
            "keyword_separator" => keyword_only = true,

            // `/` marker: everything before was positional-only
            "positional_separator" => mark_positional_only(&mut params),

            "identifier" => params.push(Parameter {
                name: extract_node_text_owned(&child, source),
                type_annotation: None,
                default_value: None,
                kind: plain_kind(keyword_only),
                span: node_to_span(&child),
            }),

            // x: int   |   *args: int   |   **kw: Any
            "typed_parameter" => {
                if let Some(param) = extract_typed_parameter(&child, source, keyword_only) {
                    if param.kind == ParameterKind::VarArgs {
                        keyword_only = true;
                    }
                    params.push(param);
                }
            }

            // x=10   |   x: int = 10
            "default_parameter" | "typed_default_parameter" => {
                if let Some(name) = field_text(&child, "name", source) {
                    params.push(Parameter {
                        name,
                        type_annotation: field_text(&child, "type", source),
                        default_value: field_text(&child, "value", source),
                        kind: plain_kind(keyword_only),
                        span: node_to_span(&child),
                    });
                }
            }

            // *args (after which all params are keyword-only)
            "list_splat_pattern" => {
                if let Some(param) = extract_splat(&child, source, ParameterKind::VarArgs, None) {
                    params.push(param);
                }
                keyword_only = true;
            }

            // **kwargs
            "dictionary_splat_pattern" => {
                if let Some(param) =
                    extract_splat(&child, source, ParameterKind::VarKeyword, None)
                {
                    params.push(param);
                }
            }

            // Older grammars emit the markers as bare tokens
            _ => match extract_node_text(&child, source) {
                "*" => keyword_only = true,
                "/" => mark_positional_only(&mut params),
                _ => {}
            },
        }
    }

    params
}

fn mark_positional_only(params: &mut [Parameter]) {
    for param in params.iter_mut() {
        if param.kind == ParameterKind::Positional {
            param.kind = ParameterKind::PositionalOnly;
        }
    }
}

fn plain_kind(keyword_only: bool) -> ParameterKind {
    if keyword_only {
        ParameterKind::KeywordOnly
    } else {
        ParameterKind::Positional
    }
}

/// Extract typed parameter (x: int, *args: int, **kwargs: str)
fn extract_typed_parameter(node: &Node, source: &str, keyword_only: bool) -> Option<Parameter> {
    let type_annotation = field_text(node, "type", source);

    if let Some(splat) = find_child_by_kind(node, "list_splat_pattern") {
        return extract_splat(&splat, source, ParameterKind::VarArgs, type_annotation)
            .map(|p| Parameter { span: node_to_span(node), ..p });
    }
    if let Some(splat) = find_child_by_kind(node, "dictionary_splat_pattern") {
        return extract_splat(&splat, source, ParameterKind::VarKeyword, type_annotation)
            .map(|p| Parameter { span: node_to_span(node), ..p });
    }

    Some(Parameter {
        name: extract_identifier_name(node, source)?,
        type_annotation,
        default_value: None,
        kind: plain_kind(keyword_only),
        span: node_to_span(node),
    })
}

fn extract_splat(
    node: &Node,
    source: &str,
    kind: ParameterKind,
    type_annotation: Option<String>,
) -> Option<Parameter> {
    Some(Parameter {
        name: extract_identifier_name(node, source)?,
        type_annotation,
        default_value: None,
        kind,
        span: node_to_span(node),
    })
}
