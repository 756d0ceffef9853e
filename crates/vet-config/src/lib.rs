//! # vet-config
//!
//! Layered configuration loading for the review console using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VET_*` prefix, `__` as separator)
//! 2. Project-level `.vet/config.toml`
//! 3. User-level `~/.config/vet/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `VET_BACKEND__BASE_URL` -> `backend.base_url` and
//! `VET_DISPLAY__LOCALE` -> `display.locale`.
//!
//! ```no_run
//! use vet_config::VetConfig;
//!
//! let config = VetConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.backend.base_url);
//! ```

mod backend;
mod display;
mod error;

pub use backend::{BackendConfig, BackendMode};
pub use display::DisplayConfig;
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".vet/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VetConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl VetConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.backend.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can extract from it directly or layer more providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("VET_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vet").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vet_core::enums::Locale;

    #[test]
    fn default_config_is_valid() {
        let config = VetConfig::default();
        assert_eq!(config.backend.mode, BackendMode::Http);
        assert_eq!(config.display.locale, Locale::Fr);
        assert!(config.backend.validate().is_ok());
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: VetConfig = VetConfig::figment().extract()?;
            assert_eq!(config.backend.timeout_secs, 10);
            assert_eq!(config.backend.mock_latency_ms, 500);
            Ok(())
        });
    }
}
