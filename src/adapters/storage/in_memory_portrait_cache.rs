//! In-memory Portrait Cache Adapter
//!
//! Keeps reveals in a process-local map. Used for development and tests;
//! everything is lost on restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::profile::CacheKey;
use crate::domain::soulmate::SoulmateResult;
use crate::ports::{PortraitCache, PortraitCacheError};

/// In-memory portrait cache
#[derive(Debug, Clone, Default)]
pub struct InMemoryPortraitCache {
    entries: Arc<RwLock<HashMap<String, SoulmateResult>>>,
}

impl InMemoryPortraitCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl PortraitCache for InMemoryPortraitCache {
    async fn get(&self, key: &CacheKey) -> Result<Option<SoulmateResult>, PortraitCacheError> {
        Ok(self.entries.read().await.get(key.as_str()).cloned())
    }

    async fn put(&self, key: &CacheKey, result: &SoulmateResult) -> Result<(), PortraitCacheError> {
        self.entries
            .write()
            .await
            .insert(key.as_str().to_string(), result.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn miss_then_hit() {
        let cache = InMemoryPortraitCache::new();
        let key = CacheKey::from_full_name("Ana Silva");
        assert!(cache.get(&key).await.unwrap().is_none());

        let result = SoulmateResult::new("AAAA", "image/png", "olhar sereno");
        cache.put(&key, &result).await.unwrap();

        assert_eq!(cache.get(&key).await.unwrap(), Some(result));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn put_overwrites() {
        let cache = InMemoryPortraitCache::new();
        let key = CacheKey::from_full_name("Ana Silva");

        cache
            .put(&key, &SoulmateResult::new("AAAA", "image/png", "primeiro"))
            .await
            .unwrap();
        cache
            .put(&key, &SoulmateResult::new("BBBB", "image/png", "segundo"))
            .await
            .unwrap();

        let stored = cache.get(&key).await.unwrap().unwrap();
        assert_eq!(stored.description(), "segundo");
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn names_differing_only_in_spacing_share_an_entry() {
        let cache = InMemoryPortraitCache::new();
        cache
            .put(
                &CacheKey::from_full_name("Ana  Silva"),
                &SoulmateResult::new("AAAA", "image/png", "x"),
            )
            .await
            .unwrap();

        assert!(cache
            .get(&CacheKey::from_full_name(" Ana Silva "))
            .await
            .unwrap()
            .is_some());
    }
}
