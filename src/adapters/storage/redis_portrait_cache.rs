//! Redis-backed portrait cache for multi-server deployments.
//!
//! Each entry is a plain string key holding the record JSON. No TTL is set.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

use crate::domain::profile::CacheKey;
use crate::domain::soulmate::SoulmateResult;
use crate::ports::{PortraitCache, PortraitCacheError, PortraitRecord};

/// Prefix applied to every cache key in Redis.
pub const REDIS_KEY_PREFIX: &str = "astrosoul:portrait:";

/// Redis-backed portrait cache.
#[derive(Clone)]
pub struct RedisPortraitCache {
    conn: MultiplexedConnection,
}

impl RedisPortraitCache {
    pub fn new(conn: MultiplexedConnection) -> Self {
        Self { conn }
    }

    /// Opens a multiplexed connection to `url` and wraps it.
    pub async fn connect(url: &str) -> Result<Self, PortraitCacheError> {
        let client =
            redis::Client::open(url).map_err(|e| PortraitCacheError::Backend(e.to_string()))?;
        let conn = client
            .get_multiplexed_tokio_connection()
            .await
            .map_err(|e| PortraitCacheError::Backend(e.to_string()))?;
        Ok(Self::new(conn))
    }
}

fn redis_key(key: &CacheKey) -> String {
    format!("{}{}", REDIS_KEY_PREFIX, key.as_str())
}

#[async_trait]
impl PortraitCache for RedisPortraitCache {
    async fn get(&self, key: &CacheKey) -> Result<Option<SoulmateResult>, PortraitCacheError> {
        let mut conn = self.conn.clone();

        let json: Option<String> = conn
            .get(redis_key(key))
            .await
            .map_err(|e: redis::RedisError| PortraitCacheError::Backend(e.to_string()))?;

        match json {
            Some(json) => PortraitRecord::from_json(key, &json)?.into_result(key).map(Some),
            None => Ok(None),
        }
    }

    async fn put(&self, key: &CacheKey, result: &SoulmateResult) -> Result<(), PortraitCacheError> {
        let json = PortraitRecord::from_result(result).to_json()?;
        let mut conn = self.conn.clone();

        conn.set::<_, _, ()>(redis_key(key), json)
            .await
            .map_err(|e: redis::RedisError| PortraitCacheError::Backend(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redis_key_is_prefixed() {
        assert_eq!(
            redis_key(&CacheKey::from_full_name("Ana Silva")),
            "astrosoul:portrait:Ana_Silva"
        );
    }

    #[tokio::test]
    async fn connect_rejects_malformed_url() {
        let err = RedisPortraitCache::connect("not-a-redis-url").await.err();
        assert!(matches!(err, Some(PortraitCacheError::Backend(_))));
    }
}
