//! # propscan-parser
//!
//! Component prop extraction for TypeScript and JavaScript sources.
//!
//! One source unit flows through four stages:
//! - **Parse**: ast-grep (tree-sitter TSX / TypeScript grammars) builds the
//!   tree; syntax errors abort the unit.
//! - **Visit**: module-level statements are dispatched by kind into an
//!   [`Accumulator`] of declared types, functions, aliases and exports.
//! - **Resolve**: utility operators (`extends`, `&`, `Partial`, `Pick`,
//!   `Omit`) are applied, then named references are inlined with cycle
//!   detection.
//! - **Assemble**: exported, capitalized functions become [`Component`]s,
//!   merged with `defaultProps` / `propTypes` metadata.

pub mod accumulator;
pub mod assemble;
pub mod error;
pub mod extractors;
pub mod parser;
pub mod resolve;
pub mod types;

pub use accumulator::Accumulator;
pub use error::ParserError;
pub use parser::{detect_dialect, detect_grammar, parse_source};
pub use types::{
    Component, ComponentFile, Dialect, Parameter, PropMap, PropType, ReactProp,
};

/// Run the visitor pass only, returning the raw accumulator.
///
/// # Errors
/// Returns `ParserError::ParseFailed` if the source has syntax errors.
pub fn extract_accumulator(filename: &str, source: &str) -> Result<Accumulator, ParserError> {
    let dialect = detect_dialect(filename);
    let tree = parse_source(source, detect_grammar(filename));
    parser::ensure_parsed(&tree, dialect)?;
    let mut acc = Accumulator::new();
    extractors::visit_program(&tree.root(), &mut acc);
    Ok(acc)
}

/// Extract every exported component from one source file.
///
/// # Errors
/// Returns `ParserError::ParseFailed` if the source has syntax errors.
pub fn analyze_file(filename: &str, source: &str) -> Result<ComponentFile, ParserError> {
    let mut acc = extract_accumulator(filename, source)?;
    resolve::resolve(&mut acc);
    assemble::expand_aliases(&mut acc);
    let components = assemble::assemble(&acc);
    tracing::debug!(
        target: "propscan::assemble",
        file = %filename,
        components = components.len(),
        "file analyzed"
    );
    Ok(ComponentFile {
        dialect: detect_dialect(filename),
        filename: filename.to_string(),
        components,
    })
}
