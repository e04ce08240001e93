use ast_grep_language::{LanguageExt, SupportLang};

use super::*;
pub(super) use crate::accumulator::Accumulator;
pub(super) use crate::types::{
    FunctionDeclaration, Literal, LiteralKind, Parameter, PropMap, PropType, ReactProp,
    TypeDeclaration,
};

mod exports;
mod prop_types;
mod statics;
mod variables;

fn visit(source: &str) -> Accumulator {
    let root = SupportLang::Tsx.ast_grep(source);
    let mut acc = Accumulator::new();
    visit_program(&root.root(), &mut acc);
    acc
}

fn find_type<'a>(acc: &'a Accumulator, name: &str) -> &'a TypeDeclaration {
    acc.find_type(name)
        .unwrap_or_else(|| panic!("should find type named '{name}'"))
}

fn find_function<'a>(acc: &'a Accumulator, name: &str) -> &'a FunctionDeclaration {
    acc.find_function(name)
        .unwrap_or_else(|| panic!("should find function named '{name}'"))
}

fn first_props(func: &FunctionDeclaration) -> &PropMap {
    func.arguments
        .first()
        .and_then(|arg| arg.prop_type.props())
        .unwrap_or_else(|| panic!("'{}' should take an object first argument", func.name))
}

fn prop(ty: PropType, optional: bool) -> ReactProp {
    ReactProp::new(ty, optional)
}
