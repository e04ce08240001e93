use ast_grep_core::Node;

use crate::accumulator::Accumulator;
use crate::extractors::helpers::{child_of_kind, dotted_name, name_of, type_arguments, unquote};
use crate::extractors::prop_types::{extract_members, generic_param_names};
use crate::types::{KeySelection, PropMap, TypeDeclaration};

fn generics_of<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<String> {
    node.field("type_parameters")
        .map(|tp| generic_param_names(&tp))
        .unwrap_or_default()
}

// ── interface_declaration ──────────────────────────────────────────

pub fn process_interface<D: ast_grep_core::Doc>(node: &Node<D>, acc: &mut Accumulator) {
    let Some(name) = name_of(node) else {
        return;
    };
    let generic_params = generics_of(node);
    let props = node
        .field("body")
        .map(|body| extract_members(&body, &generic_params))
        .unwrap_or_default();

    let extended: Vec<String> = child_of_kind(node, &["extends_type_clause"])
        .map(|clause| {
            clause
                .children()
                .filter_map(|base| base_type_name(&base))
                .collect()
        })
        .unwrap_or_default();

    acc.push_type(TypeDeclaration {
        extended: (!extended.is_empty()).then_some(extended),
        generic_params,
        ..TypeDeclaration::new(name, props)
    });
}

/// Name of a referenced type, ignoring its type arguments.
fn base_type_name<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<String> {
    match node.kind().as_ref() {
        "type_identifier" | "nested_type_identifier" => Some(dotted_name(node)),
        "generic_type" => node.field("name").map(|n| dotted_name(&n)),
        _ => None,
    }
}

// ── type_alias_declaration ─────────────────────────────────────────

pub fn process_type_alias<D: ast_grep_core::Doc>(node: &Node<D>, acc: &mut Accumulator) {
    let Some(name) = name_of(node) else {
        return;
    };
    let Some(value) = node.field("value").map(unwrap_parenthesized) else {
        return;
    };
    let generic_params = generics_of(node);
    let mut decl = TypeDeclaration {
        generic_params,
        ..TypeDeclaration::new(name, PropMap::new())
    };

    match value.kind().as_ref() {
        "object_type" => decl.props = extract_members(&value, &decl.generic_params),
        "intersection_type" => {
            let mut operands = Vec::new();
            flatten_intersection(&value, &mut operands);
            let mut names = Vec::new();
            for operand in operands {
                if operand.kind().as_ref() == "object_type" {
                    let members = extract_members(&operand, &decl.generic_params);
                    decl.props.extend(members);
                } else if let Some(base) = base_type_name(&operand) {
                    names.push(base);
                }
            }
            decl.intersection_types = Some(names);
        }
        "generic_type" => {
            if !apply_utility(&value, &mut decl) {
                tracing::debug!(target: "propscan::types", name = %decl.name, "generic alias is not an object shape");
                return;
            }
        }
        "type_identifier" | "nested_type_identifier" => {
            decl.intersection_types = Some(vec![dotted_name(&value)]);
        }
        other => {
            tracing::debug!(target: "propscan::types", name = %decl.name, kind = other, "alias is not an object shape");
            return;
        }
    }
    acc.push_type(decl);
}

fn unwrap_parenthesized<'r, D: ast_grep_core::Doc>(node: Node<'r, D>) -> Node<'r, D> {
    let mut current = node;
    while current.kind().as_ref() == "parenthesized_type" {
        let next = current
            .children()
            .find(|c| !matches!(c.kind().as_ref(), "(" | ")"));
        match next {
            Some(inner) => current = inner,
            None => break,
        }
    }
    current
}

fn flatten_intersection<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>, out: &mut Vec<Node<'r, D>>) {
    for child in node.children() {
        match child.kind().as_ref() {
            "intersection_type" => flatten_intersection(&child, out),
            "&" | "comment" => {}
            _ => out.push(unwrap_parenthesized(child)),
        }
    }
}

/// Built-in generics whose instances are not object shapes with known members.
const NON_OBJECT_GENERICS: &[&str] = &[
    "Array",
    "ReadonlyArray",
    "Record",
    "Map",
    "ReadonlyMap",
    "Set",
    "ReadonlySet",
    "WeakMap",
    "WeakSet",
    "Promise",
];

/// `Partial<T>`, `Pick<T, K>` and `Omit<T, K>` become operator fields; a
/// user generic alias is an intersection with its base. Returns `false` when
/// the alias does not describe an object shape.
fn apply_utility<D: ast_grep_core::Doc>(value: &Node<D>, decl: &mut TypeDeclaration) -> bool {
    let Some(utility) = value.field("name").map(|n| dotted_name(&n)) else {
        return false;
    };
    let args = value
        .field("type_arguments")
        .map(|a| type_arguments(&a))
        .unwrap_or_default();
    let base = args.first().and_then(base_type_name);

    match (utility.as_str(), base) {
        ("Partial", Some(base)) => decl.partial = Some(base),
        ("Pick" | "Omit", Some(base)) => {
            let keys = args.get(1).map(key_literals).unwrap_or_default();
            let selection = KeySelection {
                type_name: base,
                props: keys,
            };
            if utility == "Pick" {
                decl.pick = Some(selection);
            } else {
                decl.omit = Some(selection);
            }
        }
        ("Partial" | "Pick" | "Omit", None) => return false,
        (name, _) if NON_OBJECT_GENERICS.contains(&name) => return false,
        _ => decl.intersection_types = Some(vec![utility]),
    }
    true
}

/// String literal keys from `'a'` or `'a' | 'b'`.
fn key_literals<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<String> {
    match node.kind().as_ref() {
        "literal_type" => node
            .children()
            .filter(|c| c.kind().as_ref() == "string")
            .map(|s| unquote(&s.text()))
            .collect(),
        "union_type" | "parenthesized_type" => node.children().flat_map(|c| key_literals(&c)).collect(),
        _ => Vec::new(),
    }
}
