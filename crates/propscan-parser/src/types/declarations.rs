use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Parameter, PropMap, PropType};

/// Member selection for `Pick<T, K>` / `Omit<T, K>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeySelection {
    pub type_name: String,
    pub props: Vec<String>,
}

/// A declared interface or type alias.
///
/// The operator fields hold unresolved utility-type operations by base type
/// name. The declaration is resolved once every one of them is `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDeclaration {
    pub name: String,
    pub props: PropMap,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generic_params: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intersection_types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partial: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pick: Option<KeySelection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub omit: Option<KeySelection>,
}

impl TypeDeclaration {
    #[must_use]
    pub fn new(name: impl Into<String>, props: PropMap) -> Self {
        Self {
            name: name.into(),
            props,
            ..Self::default()
        }
    }

    /// Whether any utility-type operator is still waiting for resolution.
    #[must_use]
    pub const fn has_operators(&self) -> bool {
        self.extended.is_some()
            || self.intersection_types.is_some()
            || self.partial.is_some()
            || self.pick.is_some()
            || self.omit.is_some()
    }
}

/// A legacy `X.propTypes = { name: PropTypes.string.isRequired }` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimePropType {
    /// Lowercased validator name (`string`, `bool`, `arrayof`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    pub is_required: bool,
}

impl RuntimePropType {
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            kind: "unknown".to_string(),
            is_required: false,
        }
    }
}

/// A module-level function or function-valued variable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDeclaration {
    pub name: String,
    pub arguments: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<PropType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrapper_fn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic_params: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_props: Option<IndexMap<String, serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prop_types: Option<IndexMap<String, RuntimePropType>>,
}

/// A name bound to another declared function, e.g. `const Foo = Bar` or
/// `export const Memo = React.memo(Inner)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alias {
    pub name: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrapper_fn: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_declaration_has_no_operators() {
        let decl = TypeDeclaration::new("Props", PropMap::new());
        assert!(!decl.has_operators());
    }

    #[test]
    fn pick_counts_as_operator() {
        let decl = TypeDeclaration {
            pick: Some(KeySelection {
                type_name: "User".to_string(),
                props: vec!["name".to_string()],
            }),
            ..TypeDeclaration::new("NameOnly", PropMap::new())
        };
        assert!(decl.has_operators());
    }
}
