use ast_grep_core::Node;

use crate::accumulator::Accumulator;
use crate::extractors::helpers::name_of;
use crate::extractors::signatures::SignatureBuilder;

// ── function_declaration ───────────────────────────────────────────

/// `function Name(...) {}` and generator declarations.
pub fn process_function<D: ast_grep_core::Doc>(node: &Node<D>, acc: &mut Accumulator) {
    let Some(name) = name_of(node) else {
        return;
    };
    let decl = SignatureBuilder::new(node.clone()).finish(name, None);
    acc.push_function(decl);
}

/// `export default function (...) {}` has no name of its own.
pub fn process_anonymous_default<D: ast_grep_core::Doc>(
    node: &Node<D>,
    name: &str,
    acc: &mut Accumulator,
) {
    let decl = SignatureBuilder::new(node.clone()).finish(name.to_string(), None);
    acc.push_function(decl);
}
