use super::*;
use crate::types::Alias;
use pretty_assertions::assert_eq;

#[test]
fn arrow_function_component() {
    let acc = visit("const Badge = ({ count }: { count: number }) => <span>{count}</span>;");
    let func = find_function(&acc, "Badge");
    assert_eq!(first_props(func)["count"], prop(PropType::Number, false));
    assert_eq!(func.return_type, Some(PropType::reference("JSX.Element")));
    assert_eq!(func.wrapper_fn, None);
}

#[test]
fn function_expression_component() {
    let acc = visit("var Legacy = function (props: LegacyProps) { return <div />; };");
    assert_eq!(
        find_function(&acc, "Legacy").arguments,
        vec![Parameter::named("props", PropType::reference("LegacyProps"))]
    );
}

#[test]
fn fc_annotation_types_destructured_props() {
    let acc = visit("const Greeter: React.FC<Props> = ({ name, greeting = 'Hello' }) => <div />;");
    let func = find_function(&acc, "Greeter");
    let PropType::Object { type_name, props } = &func.arguments[0].prop_type else {
        panic!("expected object argument");
    };
    assert_eq!(type_name.as_deref(), Some("Props"));
    let props = props.as_ref().expect("destructured members");
    assert_eq!(props["greeting"].default_value.as_deref(), Some("\"Hello\""));
}

#[test]
fn fc_annotation_adds_missing_parameter() {
    let acc = visit("const Empty: FC<EmptyProps> = () => null;");
    assert_eq!(
        find_function(&acc, "Empty").arguments,
        vec![Parameter::anonymous(PropType::reference("EmptyProps"))]
    );
}

#[test]
fn memo_records_wrapper_and_type_argument() {
    let acc = visit("const Row = React.memo<RowProps>((props) => <tr />);");
    let func = find_function(&acc, "Row");
    assert_eq!(func.wrapper_fn.as_deref(), Some("React.memo"));
    assert_eq!(
        func.arguments,
        vec![Parameter::named("props", PropType::reference("RowProps"))]
    );
}

#[test]
fn forward_ref_types_both_parameters() {
    let source = "const Input = forwardRef<HTMLInputElement, InputProps>((props, ref) => <input ref={ref} />);";
    let acc = visit(source);
    let func = find_function(&acc, "Input");
    assert_eq!(func.wrapper_fn.as_deref(), Some("forwardRef"));
    assert_eq!(
        func.arguments,
        vec![
            Parameter::named("props", PropType::reference("InputProps")),
            Parameter::named("ref", PropType::reference("HTMLInputElement")),
        ]
    );
}

#[test]
fn nested_wrappers_report_outermost_callee() {
    let acc = visit("const Fancy = memo(forwardRef<HTMLDivElement, FancyProps>((props, ref) => <div />));");
    let func = find_function(&acc, "Fancy");
    assert_eq!(func.wrapper_fn.as_deref(), Some("memo"));
    assert_eq!(func.arguments[0].prop_type, PropType::reference("FancyProps"));
}

#[test]
fn wrapped_identifier_is_an_alias() {
    let acc = visit("const Memoized = React.memo(Inner);");
    assert_eq!(
        acc.aliases,
        vec![Alias {
            name: "Memoized".to_string(),
            target: "Inner".to_string(),
            wrapper_fn: Some("React.memo".to_string()),
        }]
    );
    assert!(acc.functions.is_empty());
}

#[test]
fn identifier_initializer_is_an_alias() {
    let acc = visit("const Short = LongComponentName;");
    assert_eq!(acc.aliases[0].target, "LongComponentName");
    assert_eq!(acc.aliases[0].wrapper_fn, None);
}

#[test]
fn non_function_values_are_ignored() {
    let acc = visit("const total = 1 + 2; const [a, b] = pair; const state = useState(0);");
    assert!(acc.functions.is_empty());
    assert!(acc.aliases.is_empty());
}

#[test]
fn every_declarator_is_visited() {
    let acc = visit("const A = () => <a />, B = () => <b />;");
    let names: Vec<&str> = acc.functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
}
