//! Closed node-kind dispatch over module-level statements.

use ast_grep_core::Node;

use super::processors::{
    process_export, process_expression_statement, process_function, process_interface,
    process_type_alias, process_variable_statement,
};
use crate::accumulator::Accumulator;

/// Module-level statement kinds the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    InterfaceDeclaration,
    TypeAliasDeclaration,
    ExportStatement,
    FunctionDeclaration,
    LexicalDeclaration,
    VariableDeclaration,
    ExpressionStatement,
    Other,
}

impl NodeKind {
    #[must_use]
    pub fn of(kind: &str) -> Self {
        match kind {
            "interface_declaration" => Self::InterfaceDeclaration,
            "type_alias_declaration" => Self::TypeAliasDeclaration,
            "export_statement" => Self::ExportStatement,
            "function_declaration" | "generator_function_declaration" => Self::FunctionDeclaration,
            "lexical_declaration" => Self::LexicalDeclaration,
            "variable_declaration" => Self::VariableDeclaration,
            "expression_statement" => Self::ExpressionStatement,
            _ => Self::Other,
        }
    }
}

/// Walk the top-level statements of a program, in source order.
pub fn visit_program<D: ast_grep_core::Doc>(program: &Node<D>, acc: &mut Accumulator) {
    for statement in program.children() {
        visit_node(&statement, acc);
    }
}

/// Route one module-level node to its handler.
pub fn visit_node<D: ast_grep_core::Doc>(node: &Node<D>, acc: &mut Accumulator) {
    match NodeKind::of(node.kind().as_ref()) {
        NodeKind::InterfaceDeclaration => process_interface(node, acc),
        NodeKind::TypeAliasDeclaration => process_type_alias(node, acc),
        NodeKind::ExportStatement => process_export(node, acc),
        NodeKind::FunctionDeclaration => process_function(node, acc),
        NodeKind::LexicalDeclaration | NodeKind::VariableDeclaration => {
            process_variable_statement(node, acc);
        }
        NodeKind::ExpressionStatement => process_expression_statement(node, acc),
        NodeKind::Other => {}
    }
}
