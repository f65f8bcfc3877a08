//! # bygg-config
//!
//! Layered configuration loading for ByggKoll using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`BYGGKOLL_*` prefix, `__` as separator)
//! 2. The bare `GEMINI_API_KEY` variable (mapped to `gemini.api_key`)
//! 3. Project-level `.byggkoll/config.toml`
//! 4. User-level `~/.config/byggkoll/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `BYGGKOLL_GEMINI__API_KEY` -> `gemini.api_key`,
//! `BYGGKOLL_GENERAL__DEFAULT_WORKER` -> `general.default_worker`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use bygg_config::ByggConfig;
//!
//! let config = ByggConfig::load_with_dotenv().expect("config");
//!
//! if config.gemini.is_configured() {
//!     println!("Gemini model: {}", config.gemini.model);
//! }
//! ```

mod catalog;
mod error;
mod gemini;
mod general;

pub use catalog::CatalogConfig;
pub use error::ConfigError;
pub use gemini::GeminiConfig;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Plain environment variable accepted as the Gemini credential.
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ByggConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl ByggConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source is malformed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
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
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".byggkoll/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Conventional credential variable
        figment = figment.merge(
            Env::raw()
                .only(&[GEMINI_API_KEY_VAR])
                .map(|_| "gemini.api_key".into()),
        );

        // Layer 4: Prefixed environment variables (highest priority)
        figment = figment.merge(Env::prefixed("BYGGKOLL_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("byggkoll").join("config.toml"))
    }
}
