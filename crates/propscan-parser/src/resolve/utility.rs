//! Utility-type operators: `extends`, intersections, `Partial`, `Pick`, `Omit`.

use std::collections::{HashMap, HashSet};

use crate::types::{PropMap, TypeDeclaration};

struct OperatorPass<'a> {
    index: HashMap<&'a str, &'a TypeDeclaration>,
    visiting: HashSet<String>,
}

/// Resolve operator fields against the declared types, returning a new list.
///
/// Bases are resolved on demand, so declaration order does not matter. A
/// missing base leaves its operator field in place; a base that is already
/// being resolved (an operator cycle) is used as declared.
#[must_use]
pub fn resolve_operators(types: &[TypeDeclaration]) -> Vec<TypeDeclaration> {
    let mut index = HashMap::new();
    for decl in types {
        index.entry(decl.name.as_str()).or_insert(decl);
    }
    let mut pass = OperatorPass {
        index,
        visiting: HashSet::new(),
    };
    types.iter().map(|decl| pass.resolve(decl)).collect()
}

impl OperatorPass<'_> {
    fn resolve(&mut self, decl: &TypeDeclaration) -> TypeDeclaration {
        if !decl.has_operators() || !self.visiting.insert(decl.name.clone()) {
            return decl.clone();
        }
        let mut out = decl.clone();

        if let Some(bases) = &decl.extended {
            let (mut merged, missing) = self.merge_bases(bases);
            merged.extend(out.props);
            out.props = merged;
            out.extended = (!missing.is_empty()).then_some(missing);
        }

        if let Some(operands) = &decl.intersection_types {
            let (mut merged, missing) = self.merge_bases(operands);
            merged.extend(out.props);
            out.props = merged;
            out.intersection_types = (!missing.is_empty()).then_some(missing);
        }

        if let Some(base) = &decl.partial
            && let Some(props) = self.props_of(base)
        {
            out.props = props
                .into_iter()
                .map(|(name, mut prop)| {
                    prop.optional = true;
                    (name, prop)
                })
                .collect();
            out.partial = None;
        }

        if let Some(pick) = &decl.pick
            && let Some(props) = self.props_of(&pick.type_name)
        {
            out.props = props
                .into_iter()
                .filter(|(name, _)| pick.props.contains(name))
                .collect();
            out.pick = None;
        }

        if let Some(omit) = &decl.omit
            && let Some(props) = self.props_of(&omit.type_name)
        {
            out.props = props
                .into_iter()
                .filter(|(name, _)| !omit.props.contains(name))
                .collect();
            out.omit = None;
        }

        self.visiting.remove(&decl.name);
        if out.has_operators() {
            tracing::debug!(target: "propscan::resolve", name = %out.name, "operator left unresolved");
        }
        out
    }

    fn props_of(&mut self, name: &str) -> Option<PropMap> {
        let base = *self.index.get(name)?;
        Some(self.resolve(base).props)
    }

    /// Merge the named bases in order, later keys winning; returns the names
    /// that could not be found.
    fn merge_bases(&mut self, names: &[String]) -> (PropMap, Vec<String>) {
        let mut merged = PropMap::new();
        let mut missing = Vec::new();
        for name in names {
            match self.props_of(name) {
                Some(props) => merged.extend(props),
                None => missing.push(name.clone()),
            }
        }
        (merged, missing)
    }
}
