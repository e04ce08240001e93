use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn member_type(source: &str, member: &str) -> PropType {
    let acc = visit(source);
    let decl = acc.types.first().expect("one declared type");
    decl.props
        .get(member)
        .unwrap_or_else(|| panic!("member '{member}' missing"))
        .prop_type
        .clone()
}

#[test]
fn primitive_keywords() {
    let source = "interface P { a: string; b: number; c: boolean; d: any; e: unknown; f: void; g: null }";
    let acc = visit(source);
    let types: Vec<PropType> = find_type(&acc, "P")
        .props
        .values()
        .map(|p| p.prop_type.clone())
        .collect();
    assert_eq!(
        types,
        vec![
            PropType::String,
            PropType::Number,
            PropType::Boolean,
            PropType::Any,
            PropType::Unknown,
            PropType::Void,
            PropType::Null,
        ]
    );
}

#[test]
fn array_forms() {
    assert_eq!(
        member_type("interface P { items: string[] }", "items"),
        PropType::array_of(PropType::String)
    );
    assert_eq!(
        member_type("interface P { ids: Array<number> }", "ids"),
        PropType::array_of(PropType::Number)
    );
}

#[test]
fn function_type_with_untyped_parameter_degrades() {
    let ty = member_type("interface P { onChange: (value: string, extra) => void }", "onChange");
    assert_eq!(
        ty,
        PropType::Function {
            return_type: Box::new(PropType::Void),
            parameters: vec![
                Parameter::named("value", PropType::String),
                Parameter::named("extra", PropType::Unknown),
            ],
        }
    );
}

#[test]
fn union_of_literals_keeps_order() {
    let ty = member_type("interface P { size: 'sm' | 'md' | 'lg' }", "size");
    let PropType::Union { types } = ty else {
        panic!("expected union");
    };
    let values: Vec<serde_json::Value> = types
        .into_iter()
        .map(|t| match t {
            PropType::Literal { literal } => literal.value,
            other => panic!("expected literal, got {other:?}"),
        })
        .collect();
    assert_eq!(values, vec![json!("sm"), json!("md"), json!("lg")]);
}

#[test]
fn numeric_and_boolean_literals() {
    assert_eq!(
        member_type("interface P { level: 3 }", "level"),
        PropType::Literal {
            literal: Literal {
                kind: LiteralKind::Number,
                value: json!(3),
            },
        }
    );
    assert_eq!(
        member_type("interface P { on: true }", "on"),
        PropType::Literal {
            literal: Literal {
                kind: LiteralKind::Boolean,
                value: json!(true),
            },
        }
    );
}

#[test]
fn qualified_reference_is_dot_joined() {
    assert_eq!(
        member_type("interface P { children: React.ReactNode }", "children"),
        PropType::reference("React.ReactNode")
    );
}

#[test]
fn interface_type_parameters_are_generic() {
    let ty = member_type("interface ListProps<T> { items: T[]; render: Item }", "items");
    assert_eq!(
        ty,
        PropType::array_of(PropType::TypeReference {
            type_name: "T".to_string(),
            is_generic: true,
            circular: false,
        })
    );
    assert_eq!(
        member_type("interface ListProps<T> { items: T[]; render: Item }", "render"),
        PropType::reference("Item")
    );
}

#[test]
fn inline_object_members_carry_optionality() {
    let ty = member_type("interface P { style?: { color: string; width?: number } }", "style");
    let mut expected = PropMap::new();
    expected.insert("color".to_string(), prop(PropType::String, false));
    expected.insert("width".to_string(), prop(PropType::Number, true));
    assert_eq!(ty, PropType::object(expected));
}

#[test]
fn method_signature_becomes_function() {
    let ty = member_type("interface P { onSelect(id: number): void }", "onSelect");
    assert!(matches!(ty, PropType::Function { .. }));
}

#[test]
fn unsupported_shapes_are_unknown() {
    assert_eq!(
        member_type("interface P { pair: [string, number] }", "pair"),
        PropType::Unknown
    );
    assert_eq!(
        member_type("interface P { key: keyof Other }", "key"),
        PropType::Unknown
    );
}
