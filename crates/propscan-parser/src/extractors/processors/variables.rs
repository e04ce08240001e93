use ast_grep_core::Node;

use crate::accumulator::Accumulator;
use crate::extractors::helpers::{
    call_arguments, dotted_name, is_function_kind, last_segment, type_arguments,
    unwrap_expression,
};
use crate::extractors::prop_types::extract_type;
use crate::extractors::signatures::SignatureBuilder;
use crate::types::{Alias, PropType};

/// Component annotations whose first type argument is the props type.
const COMPONENT_ANNOTATIONS: &[&str] = &[
    "FC",
    "React.FC",
    "FunctionComponent",
    "React.FunctionComponent",
    "VFC",
    "React.VFC",
];

/// One call layer around the wrapped value: callee name plus type arguments.
struct WrapperCall {
    callee: String,
    type_args: Vec<PropType>,
}

// ── lexical_declaration / variable_declaration ─────────────────────

/// Every declarator of a `const` / `let` / `var` statement.
pub fn process_variable_statement<D: ast_grep_core::Doc>(node: &Node<D>, acc: &mut Accumulator) {
    for declarator in node
        .children()
        .filter(|c| c.kind().as_ref() == "variable_declarator")
    {
        process_declarator(&declarator, acc);
    }
}

/// Names bound by a `const` / `let` / `var` statement.
pub fn declared_names<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<String> {
    node.children()
        .filter(|c| c.kind().as_ref() == "variable_declarator")
        .filter_map(|d| d.field("name"))
        .filter(|n| n.kind().as_ref() == "identifier")
        .map(|n| n.text().to_string())
        .collect()
}

fn process_declarator<D: ast_grep_core::Doc>(declarator: &Node<D>, acc: &mut Accumulator) {
    let Some(name_node) = declarator.field("name") else {
        return;
    };
    if name_node.kind().as_ref() != "identifier" {
        return;
    }
    let name = name_node.text().to_string();
    let Some(value) = declarator.field("value").map(unwrap_expression) else {
        return;
    };
    let annotated_props = declarator.field("type").and_then(|ty| component_props(&ty));

    let mut layers = Vec::new();
    let mut inner = value;
    while inner.kind().as_ref() == "call_expression" {
        let Some(callee) = inner.field("function") else {
            return;
        };
        let type_args = inner
            .field("type_arguments")
            .map(|args| {
                type_arguments(&args)
                    .iter()
                    .map(|arg| extract_type(arg, &[]))
                    .collect()
            })
            .unwrap_or_default();
        layers.push(WrapperCall {
            callee: dotted_name(&callee),
            type_args,
        });
        let Some(first) = call_arguments(&inner).into_iter().next() else {
            tracing::debug!(target: "propscan::variables", %name, "call without arguments");
            return;
        };
        inner = unwrap_expression(first);
    }
    let wrapper_fn = layers.first().map(|layer| layer.callee.clone());

    match inner.kind().as_ref() {
        k if is_function_kind(k) => {
            let mut builder = SignatureBuilder::new(inner.clone());
            if let Some(props) = annotated_props {
                builder.override_props(props);
            }
            for layer in layers.iter().rev() {
                apply_wrapper_types(&mut builder, layer);
            }
            acc.push_function(builder.finish(name, wrapper_fn));
        }
        "identifier" => acc.push_alias(Alias {
            name,
            target: inner.text().to_string(),
            wrapper_fn,
        }),
        other => {
            tracing::debug!(target: "propscan::variables", %name, kind = other, "initializer is not a component");
        }
    }
}

/// Props type from `const X: React.FC<Props> = ...`.
fn component_props<D: ast_grep_core::Doc>(annotation: &Node<D>) -> Option<PropType> {
    let ty = annotation
        .children()
        .find(|c| c.kind().as_ref() == "generic_type")?;
    let name = dotted_name(&ty.field("name")?);
    if !COMPONENT_ANNOTATIONS.contains(&name.as_str()) {
        return None;
    }
    let first = type_arguments(&ty.field("type_arguments")?).into_iter().next()?;
    Some(extract_type(&first, &[]))
}

/// `forwardRef<Ref, Props>` types the second parameter with the ref and the
/// first with the props; other wrappers take the props type first.
fn apply_wrapper_types<D: ast_grep_core::Doc>(builder: &mut SignatureBuilder<'_, D>, layer: &WrapperCall) {
    let mut args = layer.type_args.iter().cloned();
    if last_segment(&layer.callee) == "forwardRef" {
        if let Some(ref_type) = args.next() {
            builder.override_param(1, ref_type);
        }
        if let Some(props) = args.next() {
            builder.override_props(props);
        }
    } else if let Some(props) = args.next() {
        builder.override_props(props);
    }
}
