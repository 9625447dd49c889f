//! File-based Portrait Cache Adapter
//!
//! Stores one JSON file per cache key (`{"url": ..., "description": ...}`).
//! Key characters outside `[A-Za-z0-9_-]` are percent-encoded in file names.

use async_trait::async_trait;
use std::fmt::Write as _;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::profile::CacheKey;
use crate::domain::soulmate::SoulmateResult;
use crate::ports::{PortraitCache, PortraitCacheError, PortraitRecord};

/// File-based portrait cache
#[derive(Debug, Clone)]
pub struct FilePortraitCache {
    base_path: PathBuf,
}

impl FilePortraitCache {
    /// Create a new file cache rooted at `base_path`
    ///
    /// The directory is created on first write.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Path of the record file for a key
    fn record_path(&self, key: &CacheKey) -> PathBuf {
        self.base_path.join(format!("{}.json", file_stem(key)))
    }
}

fn file_stem(key: &CacheKey) -> String {
    let mut stem = String::with_capacity(key.as_str().len());
    for byte in key.as_str().bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-' {
            stem.push(byte as char);
        } else {
            let _ = write!(stem, "%{:02X}", byte);
        }
    }
    stem
}

#[async_trait]
impl PortraitCache for FilePortraitCache {
    async fn get(&self, key: &CacheKey) -> Result<Option<SoulmateResult>, PortraitCacheError> {
        let json = match fs::read_to_string(self.record_path(key)).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(PortraitCacheError::IoError(e.to_string())),
        };

        let record = PortraitRecord::from_json(key, &json)?;
        record.into_result(key).map(Some)
    }

    async fn put(&self, key: &CacheKey, result: &SoulmateResult) -> Result<(), PortraitCacheError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| PortraitCacheError::IoError(e.to_string()))?;

        let json = PortraitRecord::from_result(result).to_json()?;

        fs::write(self.record_path(key), json)
            .await
            .map_err(|e| PortraitCacheError::IoError(e.to_string()))
    }
}
