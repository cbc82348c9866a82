//! # provas-config
//!
//! Layered configuration loading for the provas client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PROVAS_*` prefix, `__` as separator)
//! 2. Project-level `.provas/config.toml`
//! 3. User-level `~/.config/provas/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PROVAS_API__BASE_URL` -> `api.base_url` and
//! `PROVAS_AUTH__TOKEN` -> `auth.token`.
//!
//! # Usage
//!
//! ```no_run
//! use provas_config::ProvasConfig;
//!
//! let config = ProvasConfig::load_with_dotenv().expect("config");
//! println!("API at {}", config.api.base_url);
//! ```

mod api;
mod auth;
mod error;

pub use api::ApiConfig;
pub use auth::AuthConfig;
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProvasConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

impl ProvasConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT read `.env`; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or the API
    /// settings are invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.api.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".provas/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("PROVAS_").split("__"))
    }

    /// Override the stored token (e.g. from a `--token` flag).
    #[must_use]
    pub fn with_token(mut self, token: Option<&str>) -> Self {
        if let Some(token) = token {
            self.auth.token = token.to_string();
        }
        self
    }

    /// The bearer token, if one is configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when no token is set.
    pub fn require_token(&self) -> Result<&str, ConfigError> {
        if self.auth.is_configured() {
            Ok(self.auth.token.trim())
        } else {
            Err(ConfigError::NotConfigured {
                section: String::from("auth"),
            })
        }
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("provas").join("config.toml"))
    }
}
