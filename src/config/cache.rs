//! Portrait cache configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where soulmate portraits are persisted between visits.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Storage backend
    #[serde(default)]
    pub backend: CacheBackend,

    /// Directory for the file backend
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// Connection URL for the Redis backend
    pub redis_url: Option<String>,
}

/// Portrait cache backend type
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    #[default]
    Memory,
    File,
    Redis,
}

impl CacheConfig {
    /// Validate cache configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == CacheBackend::Redis {
            let url = self
                .redis_url
                .as_deref()
                .ok_or(ValidationError::MissingRequired("CACHE__REDIS_URL"))?;
            if !url.starts_with("redis://") && !url.starts_with("rediss://") {
                return Err(ValidationError::InvalidRedisUrl);
            }
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackend::default(),
            directory: default_directory(),
            redis_url: None,
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from("./data/portraits")
}
