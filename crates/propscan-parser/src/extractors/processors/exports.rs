use ast_grep_core::Node;

use super::functions::process_anonymous_default;
use super::variables::declared_names;
use crate::accumulator::Accumulator;
use crate::extractors::dispatcher::visit_node;
use crate::extractors::helpers::{has_child_kind, is_function_kind, name_of, unwrap_expression};
use crate::types::Alias;

/// Name recorded for `export default` of an unnamed function or expression.
pub const ANONYMOUS_DEFAULT: &str = "AnonymousDefault";

// ── export_statement ───────────────────────────────────────────────

/// Record exported names, then hand the wrapped declaration back to the
/// dispatcher as a module-level node.
pub fn process_export<D: ast_grep_core::Doc>(node: &Node<D>, acc: &mut Accumulator) {
    let is_default = has_child_kind(node, "default");

    if let Some(declaration) = node.field("declaration") {
        let names = match declaration.kind().as_ref() {
            "lexical_declaration" | "variable_declaration" => declared_names(&declaration),
            _ => name_of(&declaration).into_iter().collect(),
        };
        match (is_default, names.first()) {
            (true, Some(first)) => acc.set_default_export(first.clone()),
            (true, None) => {
                acc.set_default_export(ANONYMOUS_DEFAULT);
                if is_function_kind(declaration.kind().as_ref()) {
                    process_anonymous_default(&declaration, ANONYMOUS_DEFAULT, acc);
                    return;
                }
            }
            (false, _) => {
                for name in names {
                    acc.mark_exported(name);
                }
            }
        }
        visit_node(&declaration, acc);
        return;
    }

    if let Some(clause) = node.children().find(|c| c.kind().as_ref() == "export_clause") {
        process_export_clause(&clause, acc);
        return;
    }

    if is_default && let Some(value) = node.field("value") {
        process_default_value(&value, acc);
    }
}

/// `export { A, B as C }`.
fn process_export_clause<D: ast_grep_core::Doc>(clause: &Node<D>, acc: &mut Accumulator) {
    for specifier in clause
        .children()
        .filter(|c| c.kind().as_ref() == "export_specifier")
    {
        let Some(local) = specifier.field("name").map(|n| n.text().to_string()) else {
            continue;
        };
        match specifier.field("alias").map(|n| n.text().to_string()) {
            Some(exported) if exported == "default" => acc.set_default_export(local),
            Some(exported) if exported != local => {
                acc.push_alias(Alias {
                    name: exported.clone(),
                    target: local,
                    wrapper_fn: None,
                });
                acc.mark_exported(exported);
            }
            _ => acc.mark_exported(local),
        }
    }
}

/// `export default Name`, `export default memo(Name)` or an inline function.
fn process_default_value<D: ast_grep_core::Doc>(value: &Node<D>, acc: &mut Accumulator) {
    let value = unwrap_expression(value.clone());
    match value.kind().as_ref() {
        "identifier" => acc.set_default_export(value.text().to_string()),
        k if is_function_kind(k) => {
            let name = name_of(&value).unwrap_or_else(|| ANONYMOUS_DEFAULT.to_string());
            process_anonymous_default(&value, &name, acc);
            acc.set_default_export(name);
        }
        "call_expression" => {
            let wrapped = crate::extractors::helpers::call_arguments(&value)
                .into_iter()
                .next()
                .map(unwrap_expression);
            match wrapped {
                Some(inner) if inner.kind().as_ref() == "identifier" => {
                    acc.set_default_export(inner.text().to_string());
                }
                _ => acc.set_default_export(ANONYMOUS_DEFAULT),
            }
        }
        other => {
            tracing::debug!(target: "propscan::exports", kind = other, "unsupported default export");
            acc.set_default_export(ANONYMOUS_DEFAULT);
        }
    }
}
