//! # vecbin-config
//!
//! Layered configuration loading for vecbin using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VECBIN_*` prefix, `__` as separator)
//! 2. Project-level `vecbin.toml` in the working directory
//! 3. User-level `~/.config/vecbin/config.toml`
//! 4. Built-in defaults
//!
//! Command-line flags are applied on top by the binary.
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VECBIN_EXTRACT__GRAMMAR` -> `extract.grammar` and
//! `VECBIN_EXTRACT__INPUT` -> `extract.input`.
//!
//! # Usage
//!
//! ```no_run
//! use vecbin_config::VecbinConfig;
//!
//! let config = VecbinConfig::load_with_dotenv().expect("config");
//! println!("reading {} as {}", config.extract.input.display(), config.extract.grammar);
//! ```

mod error;
mod extract;

pub use error::ConfigError;
pub use extract::ExtractConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file name.
pub const PROJECT_CONFIG_FILE: &str = "vecbin.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VecbinConfig {
    #[serde(default)]
    pub extract: ExtractConfig,
}

impl VecbinConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// Load configuration with `.env` file support from the working directory.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary provider chain.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.extract.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("VECBIN_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vecbin").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vecbin_core::FixtureGrammar;

    #[test]
    fn default_config_loads() {
        let config = VecbinConfig::default();
        assert_eq!(config.extract.grammar, FixtureGrammar::Bcrypt);
        assert_eq!(config.extract.input, PathBuf::from("tests.txt"));
    }

    #[test]
    fn defaults_survive_the_figment_round_trip() {
        let figment = Figment::from(Serialized::defaults(VecbinConfig::default()));
        let config = VecbinConfig::from_figment(figment).expect("should extract defaults");
        assert_eq!(config.extract, ExtractConfig::default());
    }
}
