//! Server configuration

use serde::Deserialize;
use std::net::SocketAddr;

use super::error::ValidationError;

/// Listener, logging and CORS settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub environment: Environment,

    /// `EnvFilter` directive; `RUST_LOG` takes precedence when set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Comma-separated allowed origins. Unset means any origin, which is
    /// refused in production.
    pub cors_origins: Option<String>,
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Environment {
    /// Deployed environments ship JSON logs to the collector.
    pub fn log_format(self) -> LogFormat {
        match self {
            Environment::Development => LogFormat::Pretty,
            Environment::Staging | Environment::Production => LogFormat::Json,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ValidationError::InvalidHost(self.host.clone()))
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn log_format(&self) -> LogFormat {
        self.environment.log_format()
    }

    /// Allowed origins, trimmed, blanks dropped.
    pub fn cors_origins_list(&self) -> Vec<String> {
        self.cors_origins
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        self.socket_addr()?;
        if self.is_production() && self.cors_origins_list().is_empty() {
            return Err(ValidationError::MissingRequired("SERVER__CORS_ORIGINS"));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: Environment::default(),
            log_level: default_log_level(),
            cors_origins: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info,astrosoul=debug,tower_http=info".to_string()
}
