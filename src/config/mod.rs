//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ASTROSOUL` prefix and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use astrosoul::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod ai;
mod cache;
mod error;
mod server;

pub use ai::AiConfig;
pub use cache::{CacheBackend, CacheConfig};
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, LogFormat, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// development server (without a Gemini key).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Gemini provider configuration
    #[serde(default)]
    pub ai: AiConfig,

    /// Portrait cache configuration
    #[serde(default)]
    pub cache: CacheConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ASTROSOUL` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ASTROSOUL__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `ASTROSOUL__AI__GEMINI_API_KEY=...` -> `ai.gemini_api_key = ...`
    /// - `ASTROSOUL__CACHE__BACKEND=file` -> `cache.backend = file`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ASTROSOUL")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.cache.validate()?;
        Ok(())
    }
}
