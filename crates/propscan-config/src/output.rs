//! Output formatting configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Indent the JSON written to stdout.
    #[serde(default)]
    pub pretty: bool,
}
