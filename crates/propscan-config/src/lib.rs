//! # propscan-config
//!
//! Layered configuration loading for propscan using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PROPSCAN_*` prefix, `__` as separator)
//! 2. Project-level `.propscan/config.toml`
//! 3. User-level `~/.config/propscan/config.toml`
//! 4. Built-in defaults
//!
//! `PROPSCAN_LOG__SUBSYSTEMS` maps to `log.subsystems`. The bare
//! `PROPSCAN_LOG` variable is reserved for the tracing filter and is not
//! read as configuration.
//!
//! # Usage
//!
//! ```no_run
//! use propscan_config::PropscanConfig;
//!
//! let config = PropscanConfig::load_with_dotenv().expect("config");
//! if let Some(directives) = config.log_directives() {
//!     println!("tracing: {directives}");
//! }
//! ```

mod error;
mod log;
mod output;

pub use error::ConfigError;
pub use log::{ALL_SUBSYSTEMS, KNOWN_SUBSYSTEMS, LogConfig};
pub use output::OutputConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG: &str = ".propscan/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PropscanConfig {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl PropscanConfig {
    /// Load and validate configuration from TOML files and environment
    /// variables. Does not read `.env`; see [`Self::load_with_dotenv`].
    ///
    /// # Errors
    /// Returns [`ConfigError`] when a source fails to parse or a value is
    /// out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` from the working directory first, then [`Self::load`].
    ///
    /// # Errors
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// The provider chain, public so tests can layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(PROJECT_CONFIG);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("PROPSCAN_").ignore(&["log"]).split("__"))
    }

    /// `EnvFilter` directives enabling the configured subsystems.
    #[must_use]
    pub fn log_directives(&self) -> Option<String> {
        self.log.directives()
    }

    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] for unknown log subsystems or
    /// levels.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.log.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("propscan").join("config.toml"))
    }
}
