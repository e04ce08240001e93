use super::*;
use crate::extractors::processors::ANONYMOUS_DEFAULT;
use pretty_assertions::assert_eq;

#[test]
fn direct_exports_record_names() {
    let acc = visit("export function A() {} export const B = () => null, C = 1; export class D {}");
    assert_eq!(acc.exported, vec!["A", "B", "C", "D"]);
    assert!(acc.find_function("A").is_some());
    assert!(acc.find_function("B").is_some());
}

#[test]
fn export_clause_with_rename_records_alias() {
    let acc = visit("function Inner() {} export { Inner, Inner as Outer };");
    assert_eq!(acc.exported, vec!["Inner", "Outer"]);
    assert_eq!(acc.aliases.len(), 1);
    assert_eq!(acc.aliases[0].name, "Outer");
    assert_eq!(acc.aliases[0].target, "Inner");
}

#[test]
fn default_named_function() {
    let acc = visit("export default function App() { return <main />; }");
    assert_eq!(acc.default_export.as_deref(), Some("App"));
    assert!(acc.find_function("App").is_some());
    assert!(acc.exported.is_empty());
}

#[test]
fn default_identifier() {
    let acc = visit("const Page = () => <div />; export default Page;");
    assert_eq!(acc.default_export.as_deref(), Some("Page"));
}

#[test]
fn anonymous_default_function_is_named() {
    let acc = visit("export default (props: Props) => <div />;");
    assert_eq!(acc.default_export.as_deref(), Some(ANONYMOUS_DEFAULT));
    assert_eq!(
        find_function(&acc, ANONYMOUS_DEFAULT).arguments,
        vec![Parameter::named("props", PropType::reference("Props"))]
    );
}

#[test]
fn default_object_is_anonymous() {
    let acc = visit("export default { a: 1 };");
    assert_eq!(acc.default_export.as_deref(), Some(ANONYMOUS_DEFAULT));
    assert!(acc.functions.is_empty());
}

#[test]
fn exported_interface_is_extracted() {
    let acc = visit("export interface Props { id: string }");
    assert!(acc.find_type("Props").is_some());
    assert_eq!(acc.exported, vec!["Props"]);
}
