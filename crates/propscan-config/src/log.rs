//! Diagnostic logging configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Subsystems that emit events under `propscan::<name>`.
pub const KNOWN_SUBSYSTEMS: &[&str] = &[
    "exports",
    "types",
    "functions",
    "variables",
    "statics",
    "resolve",
    "assemble",
    "parser",
];

/// Enables every subsystem.
pub const ALL_SUBSYSTEMS: &str = "*";

const LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

fn default_level() -> String {
    "debug".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogConfig {
    /// Subsystems to trace, e.g. `["types", "resolve"]`, or `["*"]`.
    #[serde(default)]
    pub subsystems: Vec<String>,

    /// Level applied to the enabled subsystems.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            subsystems: Vec::new(),
            level: default_level(),
        }
    }
}

impl LogConfig {
    /// `EnvFilter` directives for the enabled subsystems, or `None` when
    /// none are enabled.
    #[must_use]
    pub fn directives(&self) -> Option<String> {
        if self.subsystems.is_empty() {
            return None;
        }
        if self.subsystems.iter().any(|s| s == ALL_SUBSYSTEMS) {
            return Some(format!("propscan={}", self.level));
        }
        let directives: Vec<String> = self
            .subsystems
            .iter()
            .map(|s| format!("propscan::{s}={}", self.level))
            .collect();
        Some(directives.join(","))
    }

    /// Reject unknown subsystems and levels.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] naming the first bad entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LEVELS.contains(&self.level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "log.level".to_string(),
                reason: format!("'{}' is not one of {}", self.level, LEVELS.join(", ")),
            });
        }
        if let Some(unknown) = self
            .subsystems
            .iter()
            .find(|s| s.as_str() != ALL_SUBSYSTEMS && !KNOWN_SUBSYSTEMS.contains(&s.as_str()))
        {
            return Err(ConfigError::InvalidValue {
                field: "log.subsystems".to_string(),
                reason: format!("unknown subsystem '{unknown}'"),
            });
        }
        Ok(())
    }
}
