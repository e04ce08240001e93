use ast_grep_core::Node;
use indexmap::IndexMap;

use crate::accumulator::Accumulator;
use crate::extractors::helpers::{property_key, unwrap_expression};
use crate::extractors::literals::evaluate_object;
use crate::types::RuntimePropType;

// ── expression_statement: X.defaultProps / X.propTypes ─────────────

pub fn process_expression_statement<D: ast_grep_core::Doc>(node: &Node<D>, acc: &mut Accumulator) {
    let Some(assignment) = node
        .children()
        .find(|c| c.kind().as_ref() == "assignment_expression")
    else {
        return;
    };
    let (Some(left), Some(right)) = (assignment.field("left"), assignment.field("right")) else {
        return;
    };
    if left.kind().as_ref() != "member_expression" {
        return;
    }
    let (Some(object), Some(property)) = (left.field("object"), left.field("property")) else {
        return;
    };
    if object.kind().as_ref() != "identifier" {
        return;
    }
    let target = object.text().to_string();
    let right = unwrap_expression(right);
    if right.kind().as_ref() != "object" {
        tracing::debug!(target: "propscan::statics", %target, "static value is not an object literal");
        return;
    }

    match property.text().as_ref() {
        "defaultProps" => {
            let defaults = evaluate_object(&right);
            match acc.find_function_mut(&target) {
                Some(func) => func.default_props = Some(defaults),
                None => {
                    tracing::debug!(target: "propscan::statics", %target, "defaultProps for undeclared function");
                }
            }
        }
        "propTypes" => {
            let prop_types = runtime_prop_types(&right);
            match acc.find_function_mut(&target) {
                Some(func) => func.prop_types = Some(prop_types),
                None => {
                    tracing::debug!(target: "propscan::statics", %target, "propTypes for undeclared function");
                }
            }
        }
        _ => {}
    }
}

fn runtime_prop_types<D: ast_grep_core::Doc>(object: &Node<D>) -> IndexMap<String, RuntimePropType> {
    object
        .children()
        .filter(|c| c.kind().as_ref() == "pair")
        .filter_map(|pair| {
            let key = property_key(&pair.field("key")?)?;
            let validator = pair
                .field("value")
                .map_or_else(RuntimePropType::unknown, |v| runtime_prop_type(&v));
            Some((key, validator))
        })
        .collect()
}

/// `PropTypes.string`, `PropTypes.string.isRequired`, `PropTypes.arrayOf(...)`
/// and `PropTypes.shape({...}).isRequired`.
fn runtime_prop_type<D: ast_grep_core::Doc>(value: &Node<D>) -> RuntimePropType {
    let mut node = unwrap_expression(value.clone());
    let mut is_required = false;
    if node.kind().as_ref() == "member_expression"
        && node.field("property").is_some_and(|p| p.text().as_ref() == "isRequired")
        && let Some(inner) = node.field("object")
    {
        is_required = true;
        node = inner;
    }
    if node.kind().as_ref() == "call_expression"
        && let Some(callee) = node.field("function")
    {
        node = callee;
    }
    if node.kind().as_ref() != "member_expression" {
        return RuntimePropType::unknown();
    }
    match node.field("property") {
        Some(kind) => RuntimePropType {
            kind: kind.text().to_lowercase(),
            is_required,
        },
        None => RuntimePropType::unknown(),
    }
}
