//! Portrait Cache Port - Interface for persisting soulmate reveals.
//!
//! Entries are keyed by [`CacheKey`] and hold the portrait as a data URL
//! plus its description. Writes overwrite; there is no expiry.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::profile::CacheKey;
use crate::domain::soulmate::SoulmateResult;

/// Errors that can occur during portrait cache operations
#[derive(Debug, thiserror::Error)]
pub enum PortraitCacheError {
    #[error("Failed to serialize portrait record: {0}")]
    SerializationFailed(String),

    #[error("Corrupt portrait record for key {key}: {reason}")]
    Corrupt { key: String, reason: String },

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Backend error: {0}")]
    Backend(String),
}

/// Port for the soulmate portrait cache
#[async_trait]
pub trait PortraitCache: Send + Sync {
    /// Looks up a cached reveal. `Ok(None)` on a miss.
    async fn get(&self, key: &CacheKey) -> Result<Option<SoulmateResult>, PortraitCacheError>;

    /// Stores a reveal, replacing any existing entry.
    async fn put(&self, key: &CacheKey, result: &SoulmateResult) -> Result<(), PortraitCacheError>;
}

/// Stored form of a cache entry: `{"url": "data:...", "description": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortraitRecord {
    pub url: String,
    pub description: String,
}

impl PortraitRecord {
    pub fn from_result(result: &SoulmateResult) -> Self {
        Self {
            url: result.data_url(),
            description: result.description().to_string(),
        }
    }

    /// Decodes the record, failing if `url` is not a base64 data URL.
    pub fn into_result(self, key: &CacheKey) -> Result<SoulmateResult, PortraitCacheError> {
        SoulmateResult::from_data_url(&self.url, self.description).ok_or_else(|| {
            PortraitCacheError::Corrupt {
                key: key.to_string(),
                reason: "url is not a base64 data URL".to_string(),
            }
        })
    }

    pub fn to_json(&self) -> Result<String, PortraitCacheError> {
        serde_json::to_string(self).map_err(|e| PortraitCacheError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(key: &CacheKey, json: &str) -> Result<Self, PortraitCacheError> {
        serde_json::from_str(json).map_err(|e| PortraitCacheError::Corrupt {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_json_uses_url_and_description_fields() {
        let result = SoulmateResult::new("AAAA", "image/png", "olhar sereno");
        let json = PortraitRecord::from_result(&result).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["url"], "data:image/png;base64,AAAA");
        assert_eq!(value["description"], "olhar sereno");
    }

    #[test]
    fn record_decodes_back_to_result() {
        let key = CacheKey::from_full_name("Ana Silva");
        let record = PortraitRecord::from_json(
            &key,
            r#"{"url":"data:image/jpeg;base64,BBBB","description":"aura dourada"}"#,
        )
        .unwrap();

        let result = record.into_result(&key).unwrap();
        assert_eq!(result.portrait_image(), "BBBB");
        assert_eq!(result.mime_type(), "image/jpeg");
        assert_eq!(result.description(), "aura dourada");
    }

    #[test]
    fn non_data_url_is_corrupt() {
        let key = CacheKey::from_full_name("Ana Silva");
        let record = PortraitRecord {
            url: "https://example.com/x.png".to_string(),
            description: String::new(),
        };
        assert!(matches!(
            record.into_result(&key),
            Err(PortraitCacheError::Corrupt { .. })
        ));
    }

    #[test]
    fn malformed_json_is_corrupt() {
        let key = CacheKey::from_full_name("Ana");
        assert!(matches!(
            PortraitRecord::from_json(&key, "not json"),
            Err(PortraitCacheError::Corrupt { .. })
        ));
    }
}
