use super::*;
use crate::types::RuntimePropType;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn default_props_attach_to_declared_function() {
    let source = r"
        function Button(props) { return <button />; }
        Button.defaultProps = { size: 'md', disabled: false, retries: 2, style: { margin: 0 } };
    ";
    let acc = visit(source);
    let defaults = find_function(&acc, "Button")
        .default_props
        .clone()
        .expect("defaultProps recorded");
    assert_eq!(
        serde_json::to_value(defaults).expect("serialize"),
        json!({ "size": "md", "disabled": false, "retries": 2, "style": { "margin": 0 } })
    );
}

#[test]
fn prop_types_read_validators() {
    let source = r"
        function Card(props) { return <div />; }
        Card.propTypes = {
            title: PropTypes.string.isRequired,
            count: PropTypes.number,
            items: PropTypes.arrayOf(PropTypes.string),
            shape: PropTypes.shape({ a: PropTypes.bool }).isRequired,
            custom: myValidator,
        };
    ";
    let acc = visit(source);
    let prop_types = find_function(&acc, "Card")
        .prop_types
        .clone()
        .expect("propTypes recorded");
    let entry = |kind: &str, is_required: bool| RuntimePropType {
        kind: kind.to_string(),
        is_required,
    };
    assert_eq!(prop_types["title"], entry("string", true));
    assert_eq!(prop_types["count"], entry("number", false));
    assert_eq!(prop_types["items"], entry("arrayof", false));
    assert_eq!(prop_types["shape"], entry("shape", true));
    assert_eq!(prop_types["custom"], RuntimePropType::unknown());
}

#[test]
fn statics_for_unknown_targets_are_skipped() {
    let acc = visit("Ghost.defaultProps = { a: 1 };");
    assert!(acc.functions.is_empty());
}

#[test]
fn unrelated_assignments_are_ignored() {
    let acc = visit("function Box() { return null; } Box.displayName = 'Box'; window.x = 1;");
    let func = find_function(&acc, "Box");
    assert_eq!(func.default_props, None);
    assert_eq!(func.prop_types, None);
}
