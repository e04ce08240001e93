//! Post-visit resolution over the accumulator.
//!
//! Two passes, each building new lists from a snapshot of the previous
//! state: utility operators first, then named references in types and
//! function signatures.

mod references;
mod utility;

pub use references::ReferenceResolver;
pub use utility::resolve_operators;

use crate::accumulator::Accumulator;

/// Resolve operator fields and inline type references in place.
pub fn resolve(acc: &mut Accumulator) {
    let types = resolve_operators(&acc.types);
    let resolver = ReferenceResolver::new(&types);
    let resolved_types = types
        .iter()
        .map(|decl| resolver.resolve_declaration(decl))
        .collect();
    let resolved_functions = acc
        .functions
        .iter()
        .map(|func| resolver.resolve_function(func))
        .collect();
    tracing::debug!(
        target: "propscan::resolve",
        types = types.len(),
        functions = acc.functions.len(),
        "resolution complete"
    );
    acc.types = resolved_types;
    acc.functions = resolved_functions;
}
