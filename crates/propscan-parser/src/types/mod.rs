//! Core data types for extracted prop shapes and component records.

mod component;
mod declarations;
mod prop_type;

pub use component::{Component, ComponentFile, Dialect};
pub use declarations::{Alias, FunctionDeclaration, KeySelection, RuntimePropType, TypeDeclaration};
pub use prop_type::{Literal, LiteralKind, Parameter, PropMap, PropType, ReactProp};
