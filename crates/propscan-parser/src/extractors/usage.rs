//! Prop shapes inferred from member accesses on an untyped `props` parameter.

use ast_grep_core::Node;
use indexmap::IndexMap;

use super::helpers::is_function_kind;
use crate::types::{PropMap, PropType, ReactProp};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Access {
    Leaf,
    Branch(IndexMap<String, Access>),
}

/// Member paths read from one root identifier, as a tree.
#[derive(Debug, Default)]
struct AccessTree {
    root: IndexMap<String, Access>,
}

impl AccessTree {
    /// Record `root.a.b.c` as the path `[a, b, c]`.
    ///
    /// A path that continues through an existing leaf upgrades it to a branch.
    fn insert(&mut self, path: &[String]) {
        let Some((last, parents)) = path.split_last() else {
            return;
        };
        let mut level = &mut self.root;
        for segment in parents {
            let entry = level
                .entry(segment.clone())
                .or_insert_with(|| Access::Branch(IndexMap::new()));
            if *entry == Access::Leaf {
                *entry = Access::Branch(IndexMap::new());
            }
            level = match entry {
                Access::Branch(children) => children,
                Access::Leaf => return,
            };
        }
        level.entry(last.clone()).or_insert(Access::Leaf);
    }

    fn into_props(self) -> PropMap {
        convert(self.root)
    }
}

fn convert(level: IndexMap<String, Access>) -> PropMap {
    level
        .into_iter()
        .map(|(name, access)| {
            let prop_type = match access {
                Access::Leaf => PropType::Unknown,
                Access::Branch(children) => PropType::object(convert(children)),
            };
            (name, ReactProp::required(prop_type))
        })
        .collect()
}

/// Scan a function body for `root.x.y` chains and shape them into props.
///
/// Nested functions are scanned too, since inline handlers routinely read
/// props; a nested parameter that shadows `root` is not tracked.
pub fn collect_member_access<D: ast_grep_core::Doc>(body: &Node<D>, root: &str) -> PropMap {
    let mut tree = AccessTree::default();
    walk(body, root, &mut tree);
    tree.into_props()
}

fn walk<D: ast_grep_core::Doc>(body: &Node<D>, root: &str, tree: &mut AccessTree) {
    let mut stack = vec![body.clone()];
    while let Some(node) = stack.pop() {
        let kind = node.kind();
        if kind.as_ref() == "member_expression"
            && let Some((base, path)) = member_chain(&node)
            && base == root
        {
            tree.insert(&path);
            continue;
        }
        if is_function_kind(kind.as_ref()) && shadows(&node, root) {
            continue;
        }
        let children: Vec<_> = node.children().collect();
        stack.extend(children.into_iter().rev());
    }
}

/// Split `a.b.c` into the base identifier and the property path.
fn member_chain<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<(String, Vec<String>)> {
    match node.kind().as_ref() {
        "identifier" => Some((node.text().to_string(), Vec::new())),
        "member_expression" => {
            let (base, mut path) = member_chain(&node.field("object")?)?;
            let property = node.field("property")?;
            path.push(property.text().to_string());
            Some((base, path))
        }
        _ => None,
    }
}

fn shadows<D: ast_grep_core::Doc>(func: &Node<D>, root: &str) -> bool {
    if let Some(param) = func.field("parameter") {
        return param.text().as_ref() == root;
    }
    func.field("parameters").is_some_and(|params| {
        params
            .children()
            .filter_map(|p| p.field("pattern"))
            .any(|pattern| pattern.kind().as_ref() == "identifier" && pattern.text().as_ref() == root)
    })
}
