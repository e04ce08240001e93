use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::PropMap;

/// Source dialect, selected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Inline markup (JSX) is part of the dialect.
    Markup,
    Plain,
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Markup => "markup",
            Self::Plain => "plain",
        };
        write!(f, "{s}")
    }
}

/// One exported component and its resolved props.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub name: String,
    pub props: PropMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrapper_fn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_props: Option<IndexMap<String, serde_json::Value>>,
}

/// The extraction result for one source unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentFile {
    pub dialect: Dialect,
    pub filename: String,
    pub components: Vec<Component>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dialect_display_matches_serde() {
        for dialect in [Dialect::Markup, Dialect::Plain] {
            let value = serde_json::to_value(dialect).expect("serialize dialect");
            assert_eq!(value, json!(dialect.to_string()));
        }
    }

    #[test]
    fn component_skips_absent_metadata() {
        let component = Component {
            name: "Counter".to_string(),
            props: PropMap::new(),
            wrapper_fn: None,
            default_props: None,
        };
        let value = serde_json::to_value(component).expect("serialize");
        assert_eq!(value, json!({ "name": "Counter", "props": {} }));
    }
}
