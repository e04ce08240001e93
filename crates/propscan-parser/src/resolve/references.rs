//! Inline named type references, stopping at cycles.

use std::collections::HashMap;

use crate::types::{FunctionDeclaration, Parameter, PropMap, PropType, ReactProp, TypeDeclaration};

/// Replaces `type_reference` nodes with the props of the declared type they
/// name. Lookups go through a by-name index; the first declaration of a
/// name wins.
pub struct ReferenceResolver<'a> {
    types: HashMap<&'a str, &'a TypeDeclaration>,
}

impl<'a> ReferenceResolver<'a> {
    #[must_use]
    pub fn new(types: &'a [TypeDeclaration]) -> Self {
        let mut index = HashMap::new();
        for decl in types {
            index.entry(decl.name.as_str()).or_insert(decl);
        }
        Self { types: index }
    }

    /// Resolve a declaration's props; the declaration itself starts the path.
    #[must_use]
    pub fn resolve_declaration(&self, decl: &TypeDeclaration) -> TypeDeclaration {
        let mut path = vec![decl.name.clone()];
        TypeDeclaration {
            props: self.resolve_props(&decl.props, &mut path),
            ..decl.clone()
        }
    }

    #[must_use]
    pub fn resolve_function(&self, func: &FunctionDeclaration) -> FunctionDeclaration {
        let mut path = Vec::new();
        let arguments = func
            .arguments
            .iter()
            .map(|arg| Parameter {
                prop_type: self.resolve_type(&arg.prop_type, &mut path),
                name: arg.name.clone(),
            })
            .collect();
        let return_type = func
            .return_type
            .as_ref()
            .map(|ty| self.resolve_type(ty, &mut path));
        FunctionDeclaration {
            arguments,
            return_type,
            ..func.clone()
        }
    }

    fn resolve_props(&self, props: &PropMap, path: &mut Vec<String>) -> PropMap {
        props
            .iter()
            .map(|(name, prop)| {
                let resolved = ReactProp {
                    prop_type: self.resolve_type(&prop.prop_type, path),
                    optional: prop.optional,
                    default_value: prop.default_value.clone(),
                };
                (name.clone(), resolved)
            })
            .collect()
    }

    /// Props of the named declaration with `name` pushed onto the path.
    fn expand(&self, name: &str, path: &mut Vec<String>) -> Option<PropMap> {
        let decl = self.types.get(name)?;
        path.push(name.to_string());
        let props = self.resolve_props(&decl.props, path);
        path.pop();
        Some(props)
    }

    fn resolve_type(&self, ty: &PropType, path: &mut Vec<String>) -> PropType {
        match ty {
            PropType::TypeReference {
                type_name,
                is_generic: false,
                circular: false,
            } => {
                if path.contains(type_name) {
                    tracing::debug!(target: "propscan::resolve", name = %type_name, "circular reference");
                    return PropType::TypeReference {
                        type_name: type_name.clone(),
                        is_generic: false,
                        circular: true,
                    };
                }
                match self.expand(type_name, path) {
                    Some(props) => PropType::Object {
                        props: Some(props),
                        type_name: Some(type_name.clone()),
                    },
                    None => ty.clone(),
                }
            }
            PropType::Object {
                props: Some(members),
                type_name: Some(type_name),
            } => {
                let referenced = if path.contains(type_name) {
                    None
                } else {
                    self.expand(type_name, path)
                };
                let props = match referenced {
                    Some(referenced) => fill_members(members, &referenced, |m| {
                        self.resolve_type(&m.prop_type, path)
                    }),
                    None => self.resolve_props(members, path),
                };
                PropType::Object {
                    props: Some(props),
                    type_name: Some(type_name.clone()),
                }
            }
            PropType::Object {
                props: Some(members),
                type_name: None,
            } => PropType::object(self.resolve_props(members, path)),
            PropType::Array { element_type } => {
                PropType::array_of(self.resolve_type(element_type, path))
            }
            PropType::Function {
                return_type,
                parameters,
            } => PropType::Function {
                return_type: Box::new(self.resolve_type(return_type, path)),
                parameters: parameters
                    .iter()
                    .map(|p| Parameter {
                        prop_type: self.resolve_type(&p.prop_type, path),
                        name: p.name.clone(),
                    })
                    .collect(),
            },
            PropType::Union { types } => PropType::Union {
                types: types.iter().map(|t| self.resolve_type(t, path)).collect(),
            },
            _ => ty.clone(),
        }
    }
}

/// Destructured members typed from the referenced declaration.
///
/// Each member takes the referenced type and optionality and keeps its own
/// default; members the declaration lacks are resolved as written.
fn fill_members(
    members: &PropMap,
    referenced: &PropMap,
    mut resolve_own: impl FnMut(&ReactProp) -> PropType,
) -> PropMap {
    members
        .iter()
        .map(|(name, member)| {
            let filled = match referenced.get(name) {
                Some(typed) => ReactProp {
                    prop_type: typed.prop_type.clone(),
                    optional: typed.optional,
                    default_value: member.default_value.clone(),
                },
                None => ReactProp {
                    prop_type: resolve_own(member),
                    optional: member.optional,
                    default_value: member.default_value.clone(),
                },
            };
            (name.clone(), filled)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn single(name: &str, ty: PropType, optional: bool) -> PropMap {
        let mut props = PropMap::new();
        props.insert(name.to_string(), ReactProp::new(ty, optional));
        props
    }

    #[test]
    fn reference_free_declaration_is_identity() {
        let types = vec![TypeDeclaration::new("Props", single("label", PropType::String, false))];
        let resolver = ReferenceResolver::new(&types);
        assert_eq!(resolver.resolve_declaration(&types[0]), types[0]);
    }

    #[test]
    fn self_reference_is_marked_circular() {
        let types = vec![TypeDeclaration::new(
            "Node",
            single("next", PropType::reference("Node"), true),
        )];
        let resolver = ReferenceResolver::new(&types);
        let resolved = resolver.resolve_declaration(&types[0]);
        assert_eq!(
            resolved.props["next"],
            ReactProp::new(
                PropType::TypeReference {
                    type_name: "Node".to_string(),
                    is_generic: false,
                    circular: true,
                },
                true
            )
        );
    }

    #[test]
    fn mutual_references_terminate() {
        let types = vec![
            TypeDeclaration::new("A", single("b", PropType::reference("B"), false)),
            TypeDeclaration::new("B", single("a", PropType::reference("A"), false)),
        ];
        let resolver = ReferenceResolver::new(&types);
        let a = resolver.resolve_declaration(&types[0]);
        let PropType::Object { props: Some(b_props), type_name } = &a.props["b"].prop_type else {
            panic!("expected B to be inlined, got {:?}", a.props["b"]);
        };
        assert_eq!(type_name.as_deref(), Some("B"));
        assert!(matches!(
            b_props["a"].prop_type,
            PropType::TypeReference { circular: true, .. }
        ));
    }

    #[test]
    fn reference_keeps_outer_optionality() {
        let types = vec![
            TypeDeclaration::new("Theme", single("color", PropType::String, false)),
            TypeDeclaration::new("Props", single("theme", PropType::reference("Theme"), true)),
        ];
        let resolver = ReferenceResolver::new(&types);
        let props = resolver.resolve_declaration(&types[1]).props;
        assert!(props["theme"].optional);
        assert_eq!(
            props["theme"].prop_type,
            PropType::Object {
                props: Some(single("color", PropType::String, false)),
                type_name: Some("Theme".to_string()),
            }
        );
    }

    #[test]
    fn generic_and_unknown_references_stay() {
        let generic = PropType::TypeReference {
            type_name: "T".to_string(),
            is_generic: true,
            circular: false,
        };
        let types = vec![TypeDeclaration::new("Box", single("value", generic.clone(), false))];
        let resolver = ReferenceResolver::new(&types);
        let func = FunctionDeclaration {
            name: "Render".to_string(),
            arguments: vec![Parameter::named("node", PropType::reference("React.ReactNode"))],
            ..FunctionDeclaration::default()
        };
        assert_eq!(resolver.resolve_function(&func), func);
        assert_eq!(resolver.resolve_declaration(&types[0]).props["value"].prop_type, generic);
    }

    #[test]
    fn destructured_members_take_declared_types_and_keep_defaults() {
        let mut declared = single("name", PropType::String, true);
        declared.insert("age".to_string(), ReactProp::new(PropType::Number, true));
        let types = vec![TypeDeclaration::new("Props", declared)];
        let resolver = ReferenceResolver::new(&types);

        let mut name = ReactProp::required(PropType::Unknown);
        name.default_value = Some("\"John\"".to_string());
        let mut members = PropMap::new();
        members.insert("name".to_string(), name);
        let func = FunctionDeclaration {
            name: "Greeting".to_string(),
            arguments: vec![Parameter::anonymous(PropType::Object {
                props: Some(members),
                type_name: Some("Props".to_string()),
            })],
            ..FunctionDeclaration::default()
        };

        let resolved = resolver.resolve_function(&func);
        let props = resolved.arguments[0].prop_type.props().expect("object argument");
        let mut expected = ReactProp::new(PropType::String, true);
        expected.default_value = Some("\"John\"".to_string());
        assert_eq!(props["name"], expected);
        assert_eq!(props.len(), 1);
    }
}
