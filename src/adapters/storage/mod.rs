//! Storage Adapters
//!
//! Implementations of the PortraitCache port.
//!
//! ## Available Adapters
//!
//! - **InMemoryPortraitCache** - Process-local map (testing/development)
//! - **FilePortraitCache** - One JSON file per cache key
//! - **RedisPortraitCache** - Shared cache for multi-server deployments
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FilePortraitCache, InMemoryPortraitCache};
//!
//! // Production: file-based cache
//! let cache = FilePortraitCache::new("./data/portraits");
//!
//! // Testing: in-memory cache
//! let cache = InMemoryPortraitCache::new();
//! ```

mod file_portrait_cache;
mod in_memory_portrait_cache;
mod redis_portrait_cache;

pub use file_portrait_cache::FilePortraitCache;
pub use in_memory_portrait_cache::InMemoryPortraitCache;
pub use redis_portrait_cache::{RedisPortraitCache, REDIS_KEY_PREFIX};
