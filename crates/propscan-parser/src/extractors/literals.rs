//! Constant expressions: default-value text and `defaultProps` evaluation.

use ast_grep_core::Node;
use indexmap::IndexMap;
use serde_json::Value;

use super::helpers::{property_key, unquote, unwrap_expression};
use super::prop_types::number_value;

fn elements<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> impl Iterator<Item = Node<'r, D>> {
    node.children()
        .filter(|c| !matches!(c.kind().as_ref(), "[" | "]" | "{" | "}" | "," | "comment"))
}

/// Render a destructuring default as source-like text.
///
/// Strings come back double-quoted (`"Hello"`), objects as `{ k: v }` and
/// arrays as `[a, b]`. Non-constant expressions yield `None`.
pub fn serialize_default<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<String> {
    let node = unwrap_expression(node.clone());
    let kind = node.kind();
    match kind.as_ref() {
        "string" => Some(format!("\"{}\"", unquote(&node.text()))),
        "number" | "true" | "false" | "null" | "undefined" | "template_string" => {
            Some(node.text().to_string())
        }
        "unary_expression" => Some(node.text().split_whitespace().collect()),
        "object" => {
            let entries: Vec<String> = elements(&node)
                .filter(|c| c.kind().as_ref() == "pair")
                .filter_map(|pair| {
                    let key = property_key(&pair.field("key")?)?;
                    let value = serialize_default(&pair.field("value")?)?;
                    Some(format!("{key}: {value}"))
                })
                .collect();
            if entries.is_empty() {
                Some("{}".to_string())
            } else {
                Some(format!("{{ {} }}", entries.join(", ")))
            }
        }
        "array" => {
            let items: Vec<String> = elements(&node)
                .filter_map(|item| serialize_default(&item))
                .collect();
            Some(format!("[{}]", items.join(", ")))
        }
        _ => None,
    }
}

/// Evaluate a constant expression to JSON.
pub fn evaluate<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<Value> {
    let node = unwrap_expression(node.clone());
    let kind = node.kind();
    match kind.as_ref() {
        "string" => Some(Value::String(unquote(&node.text()))),
        "number" => number_value(&node.text()),
        "unary_expression" => {
            let compact: String = node.text().split_whitespace().collect();
            number_value(&compact)
        }
        "true" => Some(Value::Bool(true)),
        "false" => Some(Value::Bool(false)),
        "null" => Some(Value::Null),
        "object" => Some(Value::Object(evaluate_object(&node).into_iter().collect())),
        "array" => Some(Value::Array(
            elements(&node)
                .map(|item| evaluate(&item).unwrap_or(Value::Null))
                .collect(),
        )),
        _ => None,
    }
}

/// Evaluate each `key: constant` pair of an object literal, in order.
pub fn evaluate_object<D: ast_grep_core::Doc>(object: &Node<D>) -> IndexMap<String, Value> {
    let mut out = IndexMap::new();
    for pair in elements(object).filter(|c| c.kind().as_ref() == "pair") {
        let Some(key) = pair.field("key").and_then(|k| property_key(&k)) else {
            continue;
        };
        match pair.field("value").and_then(|v| evaluate(&v)) {
            Some(value) => {
                out.insert(key, value);
            }
            None => {
                tracing::debug!(target: "propscan::statics", %key, "skipping non-constant default");
            }
        }
    }
    out
}
