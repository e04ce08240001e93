//! Shared node helpers used by every processor.

use ast_grep_core::Node;

/// Node kinds that introduce a new function scope.
pub const FUNCTION_KINDS: &[&str] = &[
    "arrow_function",
    "function_expression",
    "function",
    "function_declaration",
    "generator_function",
    "generator_function_declaration",
    "method_definition",
];

pub fn is_function_kind(kind: &str) -> bool {
    FUNCTION_KINDS.contains(&kind)
}

/// The first child whose kind is one of `kinds`.
pub fn child_of_kind<'r, D: ast_grep_core::Doc>(
    node: &Node<'r, D>,
    kinds: &[&str],
) -> Option<Node<'r, D>> {
    node.children().find(|c| kinds.contains(&c.kind().as_ref()))
}

pub fn has_child_kind<D: ast_grep_core::Doc>(node: &Node<D>, kind: &str) -> bool {
    node.children().any(|c| c.kind().as_ref() == kind)
}

/// Text of the `name` field, if present.
pub fn name_of<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<String> {
    node.field("name").map(|n| n.text().to_string())
}

/// Qualified name with whitespace removed: `React . FC` becomes `React.FC`.
pub fn dotted_name<D: ast_grep_core::Doc>(node: &Node<D>) -> String {
    node.text().split_whitespace().collect()
}

/// Last segment of a dotted name: `React.forwardRef` gives `forwardRef`.
pub fn last_segment(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

/// Strip grouping parentheses and type assertions around an expression.
pub fn unwrap_expression<'r, D: ast_grep_core::Doc>(node: Node<'r, D>) -> Node<'r, D> {
    let mut current = node;
    loop {
        let next = match current.kind().as_ref() {
            "parenthesized_expression" => current.children().find(|c| {
                let k = c.kind();
                k.as_ref() != "(" && k.as_ref() != ")" && k.as_ref() != "comment"
            }),
            "as_expression" | "satisfies_expression" | "non_null_expression" => {
                current.children().next()
            }
            _ => None,
        };
        match next {
            Some(inner) => current = inner,
            None => return current,
        }
    }
}

/// Contents of a string literal or property-name node without quotes.
pub fn unquote(text: &str) -> String {
    let trimmed = text.trim();
    let bytes = trimmed.as_bytes();
    if trimmed.len() >= 2
        && matches!(bytes[0], b'"' | b'\'' | b'`')
        && bytes[trimmed.len() - 1] == bytes[0]
    {
        trimmed[1..trimmed.len() - 1].to_string()
    } else {
        trimmed.to_string()
    }
}

/// Name of an object key: identifiers verbatim, string keys unquoted.
pub fn property_key<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<String> {
    match node.kind().as_ref() {
        "property_identifier" | "identifier" | "number" | "private_property_identifier" => {
            Some(node.text().to_string())
        }
        "string" => Some(unquote(&node.text())),
        _ => None,
    }
}

/// Type nodes listed inside a `type_arguments` node, in order.
pub fn type_arguments<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Vec<Node<'r, D>> {
    node.children()
        .filter(|c| !matches!(c.kind().as_ref(), "<" | ">" | "," | "comment"))
        .collect()
}

/// Arguments of a call expression, without punctuation.
pub fn call_arguments<'r, D: ast_grep_core::Doc>(call: &Node<'r, D>) -> Vec<Node<'r, D>> {
    call.field("arguments")
        .map(|args| {
            args.children()
                .filter(|c| !matches!(c.kind().as_ref(), "(" | ")" | "," | "comment"))
                .collect()
        })
        .unwrap_or_default()
}
