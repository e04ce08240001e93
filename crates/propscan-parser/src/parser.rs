//! ast-grep wrapper and dialect detection from file extensions.

use ast_grep_core::Node;
use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;

use crate::error::ParserError;
use crate::types::Dialect;

/// The concrete AST tree type returned by `parse_source`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

fn extension(file_path: &str) -> String {
    let name = file_path.rsplit(['/', '\\']).next().unwrap_or(file_path);
    match name.rsplit_once('.') {
        Some((_, ext)) => ext.to_ascii_lowercase(),
        None => String::new(),
    }
}

/// Detect the output dialect from a file path extension.
///
/// `.tsx` and `.jsx` sources are [`Dialect::Markup`]; everything else is
/// [`Dialect::Plain`].
#[must_use]
pub fn detect_dialect(file_path: &str) -> Dialect {
    match extension(file_path).as_str() {
        "tsx" | "jsx" => Dialect::Markup,
        _ => Dialect::Plain,
    }
}

/// Pick the tree-sitter grammar used to parse a file.
///
/// Only the TypeScript family (`.ts`, `.mts`, `.cts`) uses the markup-free
/// grammar. JavaScript files routinely carry JSX, so they share the TSX
/// grammar with `.tsx`/`.jsx`.
#[must_use]
pub fn detect_grammar(file_path: &str) -> SupportLang {
    match extension(file_path).as_str() {
        "ts" | "mts" | "cts" => SupportLang::TypeScript,
        _ => SupportLang::Tsx,
    }
}

/// Parse source code into an ast-grep tree for the given grammar.
#[must_use]
pub fn parse_source(source: &str, lang: SupportLang) -> AstTree {
    use ast_grep_language::LanguageExt;
    lang.ast_grep(source)
}

/// Reject trees that contain syntax errors.
///
/// tree-sitter always produces a tree, recovering with `ERROR` nodes; any
/// such node means the source did not parse and the unit is abandoned.
///
/// # Errors
/// Returns `ParserError::ParseFailed` naming the position of the first error.
pub fn ensure_parsed(tree: &AstTree, dialect: Dialect) -> Result<(), ParserError> {
    let root = tree.root();
    match first_error(&root) {
        Some(node) => {
            let start = node.start_pos();
            let line = start.line() + 1;
            let column = start.column(&node) + 1;
            let snippet: String = node.text().chars().take(40).collect();
            tracing::debug!(target: "propscan::parser", line, column, %snippet, "syntax error");
            Err(ParserError::ParseFailed {
                dialect: dialect.to_string(),
                message: format!(
                    "syntax error at line {line}, column {column} near `{}`",
                    snippet.trim()
                ),
            })
        }
        None => Ok(()),
    }
}

/// Pre-order search with an explicit stack.
fn first_error<'r, D: ast_grep_core::Doc>(root: &Node<'r, D>) -> Option<Node<'r, D>> {
    let mut stack = vec![root.clone()];
    while let Some(node) = stack.pop() {
        if node.kind().as_ref() == "ERROR" {
            return Some(node);
        }
        let children: Vec<_> = node.children().collect();
        stack.extend(children.into_iter().rev());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Button.tsx", Dialect::Markup)]
    #[case("src/components/Card.jsx", Dialect::Markup)]
    #[case("Avatar.TSX", Dialect::Markup)]
    #[case("index.ts", Dialect::Plain)]
    #[case("MyComponent.js", Dialect::Plain)]
    #[case("README", Dialect::Plain)]
    fn dialect_from_extension(#[case] path: &str, #[case] expected: Dialect) {
        assert_eq!(detect_dialect(path), expected);
    }

    #[rstest]
    #[case("types.ts", SupportLang::TypeScript)]
    #[case("module.mts", SupportLang::TypeScript)]
    #[case("legacy.cts", SupportLang::TypeScript)]
    #[case("App.tsx", SupportLang::Tsx)]
    #[case("App.jsx", SupportLang::Tsx)]
    #[case("App.js", SupportLang::Tsx)]
    fn grammar_from_extension(#[case] path: &str, #[case] expected: SupportLang) {
        assert_eq!(detect_grammar(path), expected);
    }

    #[test]
    fn dotted_directory_does_not_leak_extension() {
        assert_eq!(detect_dialect("src.tsx/readme"), Dialect::Plain);
    }

    #[test]
    fn parse_source_produces_program() {
        let tree = parse_source("const a = 1;", SupportLang::Tsx);
        assert_eq!(tree.root().kind().as_ref(), "program");
    }

    #[test]
    fn valid_markup_passes() {
        let tree = parse_source("export const A = () => <div />;", SupportLang::Tsx);
        assert!(ensure_parsed(&tree, Dialect::Markup).is_ok());
    }

    #[test]
    fn deeply_nested_source_is_checked_without_recursion() {
        let depth = 2_000;
        let valid = format!("const x = {}1{};", "(".repeat(depth), ")".repeat(depth));
        let tree = parse_source(&valid, SupportLang::Tsx);
        assert!(ensure_parsed(&tree, Dialect::Plain).is_ok());

        let broken = format!("const x = {}%%%{};", "(".repeat(depth), ")".repeat(depth));
        let tree = parse_source(&broken, SupportLang::Tsx);
        assert!(ensure_parsed(&tree, Dialect::Plain).is_err());
    }

    #[test]
    fn broken_source_is_rejected() {
        let tree = parse_source("const x = %%% ;", SupportLang::Tsx);
        let err = ensure_parsed(&tree, Dialect::Markup).expect_err("should fail");
        assert!(err.to_string().contains("markup"), "{err}");
    }
}
