//! Type-position nodes to [`PropType`].
//!
//! Extraction is total: any shape not listed here becomes
//! [`PropType::Unknown`] and the walk carries on.

use ast_grep_core::Node;
use serde_json::json;

use super::helpers::{child_of_kind, dotted_name, property_key, type_arguments, unquote};
use crate::types::{Literal, LiteralKind, Parameter, PropMap, PropType, ReactProp};

const ARRAY_GENERICS: &[&str] = &["Array", "ReadonlyArray"];

/// Convert a type node (or the `type_annotation` wrapping one) to a [`PropType`].
///
/// `generics` holds the type parameter names in scope; references to them
/// are flagged `isGeneric`.
pub fn extract_type<D: ast_grep_core::Doc>(node: &Node<D>, generics: &[String]) -> PropType {
    let kind = node.kind();
    match kind.as_ref() {
        "type_annotation" | "parenthesized_type" | "readonly_type" => node
            .children()
            .find(|c| is_type_node(c.kind().as_ref()))
            .map_or(PropType::Unknown, |inner| extract_type(&inner, generics)),
        "predefined_type" => predefined(node.text().as_ref()),
        "literal_type" => literal(node),
        "type_identifier" => reference(node.text().to_string(), generics),
        "nested_type_identifier" => PropType::reference(dotted_name(node)),
        "generic_type" => generic(node, generics),
        "array_type" => node
            .children()
            .find(|c| is_type_node(c.kind().as_ref()))
            .map_or(PropType::array_of(PropType::Unknown), |element| {
                PropType::array_of(extract_type(&element, generics))
            }),
        "function_type" => function(node, generics),
        "union_type" => {
            let mut types = Vec::new();
            flatten_union(node, generics, &mut types);
            PropType::Union { types }
        }
        "object_type" => PropType::object(extract_members(node, generics)),
        other => {
            tracing::debug!(target: "propscan::types", kind = other, "unrecognized type shape");
            PropType::Unknown
        }
    }
}

/// Whether a node kind can appear in type position (punctuation excluded).
fn is_type_node(kind: &str) -> bool {
    !matches!(
        kind,
        ":" | "(" | ")" | "[" | "]" | "readonly" | "|" | "&" | "=>" | "comment"
    )
}

fn predefined(keyword: &str) -> PropType {
    match keyword {
        "string" => PropType::String,
        "number" => PropType::Number,
        "boolean" => PropType::Boolean,
        "any" => PropType::Any,
        "void" => PropType::Void,
        "object" => PropType::Object {
            props: None,
            type_name: None,
        },
        _ => PropType::Unknown,
    }
}

fn literal<D: ast_grep_core::Doc>(node: &Node<D>) -> PropType {
    let Some(value) = node.children().next() else {
        return PropType::Unknown;
    };
    let text = value.text();
    let literal = match value.kind().as_ref() {
        "null" => return PropType::Null,
        "string" => Literal {
            kind: LiteralKind::String,
            value: json!(unquote(&text)),
        },
        "number" | "unary_expression" => {
            let compact: String = text.split_whitespace().collect();
            match number_value(&compact) {
                Some(number) => Literal {
                    kind: LiteralKind::Number,
                    value: number,
                },
                None => return PropType::Unknown,
            }
        }
        "true" | "false" => Literal {
            kind: LiteralKind::Boolean,
            value: json!(text.as_ref() == "true"),
        },
        _ => return PropType::Unknown,
    };
    PropType::Literal { literal }
}

/// Parse a numeric literal into a JSON number, keeping integers integral.
pub(crate) fn number_value(text: &str) -> Option<serde_json::Value> {
    let cleaned = text.replace('_', "");
    if let Ok(int) = cleaned.parse::<i64>() {
        return Some(json!(int));
    }
    cleaned
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(serde_json::Value::Number)
}

fn reference(name: String, generics: &[String]) -> PropType {
    let is_generic = generics.contains(&name);
    PropType::TypeReference {
        type_name: name,
        is_generic,
        circular: false,
    }
}

fn generic<D: ast_grep_core::Doc>(node: &Node<D>, generics: &[String]) -> PropType {
    let Some(name_node) = node.field("name") else {
        return PropType::Unknown;
    };
    let name = dotted_name(&name_node);
    if ARRAY_GENERICS.contains(&name.as_str()) {
        let element = node
            .field("type_arguments")
            .and_then(|args| type_arguments(&args).into_iter().next())
            .map_or(PropType::Unknown, |arg| extract_type(&arg, generics));
        return PropType::array_of(element);
    }
    reference(name, generics)
}

fn function<D: ast_grep_core::Doc>(node: &Node<D>, generics: &[String]) -> PropType {
    let mut scope = generics.to_vec();
    if let Some(params) = node
        .field("type_parameters")
        .or_else(|| child_of_kind(node, &["type_parameters"]))
    {
        scope.extend(generic_param_names(&params));
    }
    let parameters = node
        .field("parameters")
        .map(|params| extract_parameters(&params, &scope))
        .unwrap_or_default();
    let return_type = node
        .field("return_type")
        .map_or(PropType::Unknown, |ret| extract_type(&ret, &scope));
    PropType::Function {
        return_type: Box::new(return_type),
        parameters,
    }
}

fn flatten_union<D: ast_grep_core::Doc>(
    node: &Node<D>,
    generics: &[String],
    out: &mut Vec<PropType>,
) {
    for child in node.children() {
        let kind = child.kind();
        match kind.as_ref() {
            "union_type" => flatten_union(&child, generics, out),
            k if is_type_node(k) => out.push(extract_type(&child, generics)),
            _ => {}
        }
    }
}

/// Parameters of a function type or method signature.
///
/// Untyped parameters degrade to `unknown`; destructured parameters get the
/// placeholder names `objectParam` / `arrayParam`.
pub fn extract_parameters<D: ast_grep_core::Doc>(
    params: &Node<D>,
    generics: &[String],
) -> Vec<Parameter> {
    params
        .children()
        .filter(|c| matches!(c.kind().as_ref(), "required_parameter" | "optional_parameter"))
        .map(|param| {
            let name = param.field("pattern").map(|pattern| match pattern.kind().as_ref() {
                "object_pattern" => "objectParam".to_string(),
                "array_pattern" => "arrayParam".to_string(),
                "rest_pattern" => pattern
                    .children()
                    .find(|c| c.kind().as_ref() == "identifier")
                    .map_or_else(|| "rest".to_string(), |id| id.text().to_string()),
                _ => pattern.text().to_string(),
            });
            let prop_type = param
                .field("type")
                .map_or(PropType::Unknown, |ty| extract_type(&ty, generics));
            Parameter { prop_type, name }
        })
        .collect()
}

/// Members of an object type or interface body, in declaration order.
pub fn extract_members<D: ast_grep_core::Doc>(body: &Node<D>, generics: &[String]) -> PropMap {
    let mut props = PropMap::new();
    for member in body.children() {
        let kind = member.kind();
        let (name, prop) = match kind.as_ref() {
            "property_signature" => {
                let Some(name) = member.field("name").and_then(|n| property_key(&n)) else {
                    continue;
                };
                let prop_type = member
                    .field("type")
                    .map_or(PropType::Unknown, |ty| extract_type(&ty, generics));
                (name, ReactProp::new(prop_type, is_optional_member(&member)))
            }
            "method_signature" => {
                let Some(name) = member.field("name").and_then(|n| property_key(&n)) else {
                    continue;
                };
                (name, ReactProp::new(function(&member, generics), is_optional_member(&member)))
            }
            _ => continue,
        };
        props.insert(name, prop);
    }
    props
}

fn is_optional_member<D: ast_grep_core::Doc>(member: &Node<D>) -> bool {
    member.children().any(|c| c.kind().as_ref() == "?")
}

/// Names declared by a `type_parameters` node: `<T, K extends keyof T>` gives `[T, K]`.
pub fn generic_param_names<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<String> {
    node.children()
        .filter(|c| c.kind().as_ref() == "type_parameter")
        .filter_map(|p| {
            p.field("name")
                .or_else(|| p.children().find(|c| c.kind().as_ref() == "type_identifier"))
                .map(|n| n.text().to_string())
        })
        .collect()
}
