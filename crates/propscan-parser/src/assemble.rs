//! Component classification and output assembly.

use std::collections::HashSet;

use crate::accumulator::Accumulator;
use crate::types::{
    Component, FunctionDeclaration, Parameter, PropMap, PropType, ReactProp, RuntimePropType,
};

/// Functions with this many parameters or more are not components.
pub const MAX_COMPONENT_PARAMS: usize = 3;

/// Append a copy of the aliased function for every alias that names one.
///
/// Chains through other aliases are followed; each alias is visited at most
/// once per chain. The copy takes the alias's name, and its wrapper falls
/// back to the alias's wrapper when the target has none.
pub fn expand_aliases(acc: &mut Accumulator) {
    let mut expanded = Vec::new();
    for alias in &acc.aliases {
        if acc.find_function(&alias.name).is_some() {
            continue;
        }
        let mut seen = HashSet::from([alias.name.as_str()]);
        let mut target = alias.target.as_str();
        let resolved = loop {
            if let Some(func) = acc.find_function(target) {
                break Some(func);
            }
            match acc.find_alias(target) {
                Some(next) if seen.insert(next.name.as_str()) => target = next.target.as_str(),
                _ => break None,
            }
        };
        match resolved {
            Some(func) => {
                tracing::debug!(target: "propscan::assemble", alias = %alias.name, function = %func.name, "alias expanded");
                expanded.push(FunctionDeclaration {
                    name: alias.name.clone(),
                    wrapper_fn: func.wrapper_fn.clone().or_else(|| alias.wrapper_fn.clone()),
                    ..func.clone()
                });
            }
            None => {
                tracing::debug!(target: "propscan::assemble", alias = %alias.name, "alias chain does not reach a function");
            }
        }
    }
    acc.functions.extend(expanded);
}

/// Capitalized, few parameters, and exported (by name or as default).
#[must_use]
pub fn is_component(func: &FunctionDeclaration, acc: &Accumulator) -> bool {
    func.name.chars().next().is_some_and(char::is_uppercase)
        && func.arguments.len() < MAX_COMPONENT_PARAMS
        && acc.is_exported(&func.name)
}

/// Build the output list in function declaration order.
#[must_use]
pub fn assemble(acc: &Accumulator) -> Vec<Component> {
    let mut seen = HashSet::new();
    acc.functions
        .iter()
        .filter(|func| is_component(func, acc))
        .filter(|func| seen.insert(func.name.as_str()))
        .map(build_component)
        .collect()
}

fn build_component(func: &FunctionDeclaration) -> Component {
    let mut props = func
        .arguments
        .first()
        .and_then(|arg| arg.prop_type.props())
        .cloned()
        .unwrap_or_default();
    if let Some(prop_types) = &func.prop_types {
        overlay_prop_types(&mut props, prop_types);
    }
    Component {
        name: func.name.clone(),
        props,
        wrapper_fn: func.wrapper_fn.clone(),
        default_props: func.default_props.clone(),
    }
}

/// Runtime `propTypes` decide each listed prop's type and optionality.
///
/// A static type of the same variant is kept since it carries more detail;
/// default values always survive.
fn overlay_prop_types(
    props: &mut PropMap,
    prop_types: &indexmap::IndexMap<String, RuntimePropType>,
) {
    for (name, runtime) in prop_types {
        let legacy = legacy_type(&runtime.kind);
        let optional = !runtime.is_required;
        match props.get_mut(name) {
            Some(existing) => {
                if std::mem::discriminant(&existing.prop_type) != std::mem::discriminant(&legacy) {
                    existing.prop_type = legacy;
                }
                existing.optional = optional;
            }
            None => {
                props.insert(name.clone(), ReactProp::new(legacy, optional));
            }
        }
    }
}

fn legacy_type(kind: &str) -> PropType {
    match kind {
        "string" => PropType::String,
        "number" => PropType::Number,
        "bool" | "boolean" => PropType::Boolean,
        "any" => PropType::Any,
        "object" | "shape" | "exact" => PropType::Object {
            props: None,
            type_name: None,
        },
        "array" | "arrayof" => PropType::array_of(PropType::Unknown),
        "func" => PropType::Function {
            return_type: Box::new(PropType::Unknown),
            parameters: Vec::<Parameter>::new(),
        },
        _ => PropType::Unknown,
    }
}
