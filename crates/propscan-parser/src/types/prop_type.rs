use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Named members of an object type, in declaration order.
pub type PropMap = IndexMap<String, ReactProp>;

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(value: &bool) -> bool {
    !*value
}

/// A type position, reduced to the small grammar component docs care about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum PropType {
    String,
    Number,
    Boolean,
    Any,
    Unknown,
    Void,
    Null,
    Object {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        props: Option<PropMap>,
        /// Name of the declared type these props came from.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        type_name: Option<String>,
    },
    TypeReference {
        type_name: String,
        #[serde(default, skip_serializing_if = "is_false")]
        is_generic: bool,
        /// Set by the resolver when expanding this name would recurse.
        #[serde(default, skip_serializing_if = "is_false")]
        circular: bool,
    },
    Array {
        element_type: Box<PropType>,
    },
    Function {
        return_type: Box<PropType>,
        parameters: Vec<Parameter>,
    },
    Union {
        types: Vec<PropType>,
    },
    Literal {
        literal: Literal,
    },
}

impl PropType {
    /// A plain, non-generic reference to a named type.
    #[must_use]
    pub fn reference(type_name: impl Into<String>) -> Self {
        Self::TypeReference {
            type_name: type_name.into(),
            is_generic: false,
            circular: false,
        }
    }

    #[must_use]
    pub fn array_of(element: Self) -> Self {
        Self::Array {
            element_type: Box::new(element),
        }
    }

    #[must_use]
    pub const fn object(props: PropMap) -> Self {
        Self::Object {
            props: Some(props),
            type_name: None,
        }
    }

    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Props of an `object` variant, if it carries any.
    #[must_use]
    pub const fn props(&self) -> Option<&PropMap> {
        match self {
            Self::Object { props, .. } => props.as_ref(),
            _ => None,
        }
    }
}

/// The runtime type tag of a literal type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteralKind {
    String,
    Number,
    Boolean,
}

/// A literal type such as `'dark'`, `42` or `true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Literal {
    #[serde(rename = "type")]
    pub kind: LiteralKind,
    pub value: serde_json::Value,
}

/// One named member of a component's prop object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactProp {
    #[serde(flatten)]
    pub prop_type: PropType,
    pub optional: bool,
    /// Source text of a destructuring default, e.g. `"Hello"` or `[]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl ReactProp {
    #[must_use]
    pub const fn new(prop_type: PropType, optional: bool) -> Self {
        Self {
            prop_type,
            optional,
            default_value: None,
        }
    }

    #[must_use]
    pub const fn required(prop_type: PropType) -> Self {
        Self::new(prop_type, false)
    }
}

/// A function parameter: a type plus the parameter's name when it has one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(flatten)]
    pub prop_type: PropType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Parameter {
    #[must_use]
    pub fn named(name: impl Into<String>, prop_type: PropType) -> Self {
        Self {
            prop_type,
            name: Some(name.into()),
        }
    }

    #[must_use]
    pub const fn anonymous(prop_type: PropType) -> Self {
        Self {
            prop_type,
            name: None,
        }
    }
}
