//! Per-unit extraction state shared by the visitor handlers.

use crate::types::{Alias, FunctionDeclaration, TypeDeclaration};

/// Everything the visitor pass learns about one source unit.
///
/// Created empty per unit, filled by the handlers in encounter order,
/// rewritten in place by resolution and read by assembly. Declarations refer
/// to each other by name only; the `find_*` methods are the lookup seam.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Accumulator {
    pub types: Vec<TypeDeclaration>,
    pub functions: Vec<FunctionDeclaration>,
    pub aliases: Vec<Alias>,
    pub exported: Vec<String>,
    pub default_export: Option<String>,
}

impl Accumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_type(&mut self, decl: TypeDeclaration) {
        tracing::debug!(target: "propscan::types", name = %decl.name, props = decl.props.len(), "type declared");
        self.types.push(decl);
    }

    pub fn push_function(&mut self, decl: FunctionDeclaration) {
        tracing::debug!(
            target: "propscan::functions",
            name = %decl.name,
            arguments = decl.arguments.len(),
            wrapper = decl.wrapper_fn.as_deref().unwrap_or(""),
            "function declared"
        );
        self.functions.push(decl);
    }

    pub fn push_alias(&mut self, alias: Alias) {
        tracing::debug!(target: "propscan::variables", name = %alias.name, target_name = %alias.target, "alias recorded");
        self.aliases.push(alias);
    }

    /// Record an exported name once.
    pub fn mark_exported(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.exported.contains(&name) {
            tracing::debug!(target: "propscan::exports", %name, "exported");
            self.exported.push(name);
        }
    }

    pub fn set_default_export(&mut self, name: impl Into<String>) {
        let name = name.into();
        tracing::debug!(target: "propscan::exports", %name, "default export");
        self.default_export = Some(name);
    }

    /// Exported by name or as the default export.
    #[must_use]
    pub fn is_exported(&self, name: &str) -> bool {
        self.exported.iter().any(|n| n == name) || self.default_export.as_deref() == Some(name)
    }

    #[must_use]
    pub fn find_type(&self, name: &str) -> Option<&TypeDeclaration> {
        self.types.iter().find(|t| t.name == name)
    }

    #[must_use]
    pub fn find_function(&self, name: &str) -> Option<&FunctionDeclaration> {
        self.functions.iter().find(|f| f.name == name)
    }

    pub fn find_function_mut(&mut self, name: &str) -> Option<&mut FunctionDeclaration> {
        self.functions.iter_mut().find(|f| f.name == name)
    }

    #[must_use]
    pub fn find_alias(&self, name: &str) -> Option<&Alias> {
        self.aliases.iter().find(|a| a.name == name)
    }
}
