//! Function-like nodes to [`FunctionDeclaration`].
//!
//! A [`SignatureBuilder`] reads the parameters, generics and return type of
//! one function node. Callers then layer explicit type overrides on top
//! (component annotations, wrapper type arguments) before [`finish`] runs the
//! body scan for untyped `props` parameters.
//!
//! [`finish`]: SignatureBuilder::finish

use ast_grep_core::Node;

use super::helpers::{is_function_kind, unquote, unwrap_expression};
use super::literals::serialize_default;
use super::prop_types::{extract_type, generic_param_names};
use super::usage::collect_member_access;
use crate::types::{FunctionDeclaration, Parameter, PropMap, PropType, ReactProp};

const MARKUP_KINDS: &[&str] = &["jsx_element", "jsx_self_closing_element", "jsx_fragment"];

/// How a parameter was written in source.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ParamShape {
    Identifier(String),
    Destructured,
    Other,
}

pub struct SignatureBuilder<'r, D: ast_grep_core::Doc> {
    func: Node<'r, D>,
    generics: Vec<String>,
    params: Vec<(Parameter, ParamShape)>,
    return_type: PropType,
}

impl<'r, D: ast_grep_core::Doc> SignatureBuilder<'r, D> {
    /// Read generics, parameters and return type from a function node.
    pub fn new(func: Node<'r, D>) -> Self {
        let generics = func
            .field("type_parameters")
            .map(|tp| generic_param_names(&tp))
            .unwrap_or_default();

        let params = if let Some(single) = func.field("parameter") {
            // `x => ...` has a bare identifier and no parameter list.
            let name = single.text().to_string();
            vec![(
                Parameter::named(name.clone(), PropType::Unknown),
                ParamShape::Identifier(name),
            )]
        } else {
            func.field("parameters")
                .map(|list| {
                    list.children()
                        .filter(|c| {
                            matches!(c.kind().as_ref(), "required_parameter" | "optional_parameter")
                        })
                        .filter_map(|p| convert_parameter(&p, &generics))
                        .collect()
                })
                .unwrap_or_default()
        };

        let return_type = func.field("return_type").map_or_else(
            || infer_return_type(&func),
            |annotation| extract_type(&annotation, &generics),
        );

        Self {
            func,
            generics,
            params,
            return_type,
        }
    }

    /// Override the first parameter with an explicit props type.
    pub fn override_props(&mut self, props: PropType) {
        self.override_param(0, props);
    }

    /// Override the parameter at `index` with an explicit type.
    ///
    /// A destructured parameter keeps its members: a named type becomes its
    /// `typeName` provenance and an inline object merges into it. Any other
    /// parameter is replaced. Missing parameters are padded in.
    pub fn override_param(&mut self, index: usize, ty: PropType) {
        while self.params.len() <= index {
            self.params
                .push((Parameter::anonymous(PropType::Unknown), ParamShape::Other));
        }
        let (param, shape) = &mut self.params[index];
        if *shape == ParamShape::Destructured
            && let PropType::Object {
                props: Some(members),
                type_name,
            } = &mut param.prop_type
        {
            match ty {
                PropType::TypeReference {
                    type_name: name,
                    is_generic: false,
                    ..
                } => {
                    *type_name = Some(name);
                    return;
                }
                PropType::Object {
                    props: Some(inline),
                    ..
                } => {
                    *members = merge_inline(std::mem::take(members), inline);
                    return;
                }
                _ => {}
            }
        }
        param.prop_type = ty;
        if let ParamShape::Identifier(_) = shape {
            // An explicitly typed identifier no longer needs the body scan.
            *shape = ParamShape::Other;
        }
    }

    /// Finish the declaration, inferring props from the body when the only
    /// parameter is an untyped identifier.
    pub fn finish(mut self, name: String, wrapper_fn: Option<String>) -> FunctionDeclaration {
        if let [(param, ParamShape::Identifier(ident))] = self.params.as_mut_slice()
            && param.prop_type.is_unknown()
            && let Some(body) = self.func.field("body")
        {
            let props = collect_member_access(&body, ident);
            if !props.is_empty() {
                tracing::debug!(target: "propscan::functions", %name, props = props.len(), "props inferred from usage");
                param.prop_type = PropType::object(props);
            }
        }

        FunctionDeclaration {
            name,
            arguments: self.params.into_iter().map(|(param, _)| param).collect(),
            return_type: Some(self.return_type),
            wrapper_fn,
            generic_params: (!self.generics.is_empty()).then_some(self.generics),
            default_props: None,
            prop_types: None,
        }
    }
}

fn convert_parameter<D: ast_grep_core::Doc>(
    param: &Node<D>,
    generics: &[String],
) -> Option<(Parameter, ParamShape)> {
    let pattern = param.field("pattern")?;
    let annotation = param
        .field("type")
        .map(|ty| extract_type(&ty, generics));

    let converted = match pattern.kind().as_ref() {
        "identifier" => {
            let name = pattern.text().to_string();
            (
                Parameter::named(name.clone(), annotation.unwrap_or(PropType::Unknown)),
                ParamShape::Identifier(name),
            )
        }
        // TypeScript's explicit `this` parameter is not a real argument.
        "this" => return None,
        "object_pattern" => {
            let members = destructured_members(&pattern);
            let prop_type = match annotation {
                Some(PropType::TypeReference {
                    type_name,
                    is_generic: false,
                    ..
                }) => PropType::Object {
                    props: Some(members),
                    type_name: Some(type_name),
                },
                Some(PropType::Object {
                    props: Some(inline),
                    ..
                }) => PropType::object(merge_inline(members, inline)),
                _ => PropType::object(members),
            };
            (Parameter::anonymous(prop_type), ParamShape::Destructured)
        }
        "rest_pattern" => {
            let name = pattern
                .children()
                .find(|c| c.kind().as_ref() == "identifier")
                .map(|id| id.text().to_string());
            let prop_type = match annotation {
                Some(ty @ PropType::Array { .. }) => ty,
                Some(ty) => PropType::array_of(ty),
                None => PropType::array_of(PropType::Unknown),
            };
            (
                Parameter {
                    prop_type,
                    name,
                },
                ParamShape::Other,
            )
        }
        "array_pattern" => (
            Parameter::anonymous(annotation.unwrap_or_else(|| PropType::array_of(PropType::Unknown))),
            ParamShape::Other,
        ),
        _ => (
            Parameter::anonymous(annotation.unwrap_or(PropType::Unknown)),
            ParamShape::Other,
        ),
    };
    Some(converted)
}

/// Members of an object destructuring pattern, all `unknown` until typed.
fn destructured_members<D: ast_grep_core::Doc>(pattern: &Node<D>) -> PropMap {
    let mut members = PropMap::new();
    for child in pattern.children() {
        let kind = child.kind();
        let (name, default) = match kind.as_ref() {
            "shorthand_property_identifier_pattern" => (child.text().to_string(), None),
            "object_assignment_pattern" => {
                let Some(left) = child.field("left") else {
                    continue;
                };
                let default = child.field("right").and_then(|r| serialize_default(&r));
                (left.text().to_string(), default)
            }
            "pair_pattern" => {
                let Some(key) = child.field("key") else {
                    continue;
                };
                let default = child
                    .field("value")
                    .filter(|v| v.kind().as_ref() == "assignment_pattern")
                    .and_then(|v| v.field("right"))
                    .and_then(|r| serialize_default(&r));
                (unquote(&key.text()), default)
            }
            _ => continue,
        };
        let mut prop = ReactProp::required(PropType::Unknown);
        prop.default_value = default;
        members.insert(name, prop);
    }
    members
}

/// Lay inline annotation members over destructured ones.
///
/// Types and optionality come from the annotation; defaults from the pattern.
pub fn merge_inline(mut members: PropMap, inline: PropMap) -> PropMap {
    for (name, typed) in inline {
        match members.get_mut(&name) {
            Some(existing) => {
                existing.prop_type = typed.prop_type;
                existing.optional = typed.optional;
            }
            None => {
                members.insert(name, typed);
            }
        }
    }
    members
}

/// Infer a return type from the first reachable `return` or an expression body.
fn infer_return_type<D: ast_grep_core::Doc>(func: &Node<D>) -> PropType {
    let Some(body) = func.field("body") else {
        return PropType::Void;
    };
    if body.kind().as_ref() != "statement_block" {
        return infer_expression(&body);
    }
    match first_return(&body) {
        Some(ret) => ret
            .children()
            .find(|c| !matches!(c.kind().as_ref(), "return" | ";" | "comment"))
            .map_or(PropType::Void, |value| infer_expression(&value)),
        None => PropType::Void,
    }
}

fn first_return<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Option<Node<'r, D>> {
    for child in node.children() {
        let kind = child.kind();
        if kind.as_ref() == "return_statement" {
            return Some(child);
        }
        if is_function_kind(kind.as_ref()) || kind.as_ref() == "class_declaration" {
            continue;
        }
        if let Some(found) = first_return(&child) {
            return Some(found);
        }
    }
    None
}

fn infer_expression<D: ast_grep_core::Doc>(expr: &Node<D>) -> PropType {
    let expr = unwrap_expression(expr.clone());
    match expr.kind().as_ref() {
        k if MARKUP_KINDS.contains(&k) => PropType::reference("JSX.Element"),
        "object" => PropType::Object {
            props: None,
            type_name: None,
        },
        "array" => PropType::array_of(PropType::Unknown),
        "string" | "template_string" => PropType::String,
        "number" => PropType::Number,
        "true" | "false" => PropType::Boolean,
        _ => PropType::Unknown,
    }
}
