//! Identity key for cached soulmate portraits.

use serde::Serialize;
use std::fmt;

/// Sanitized full name used to look up a previously generated portrait.
///
/// Two people with the same name map to the same key and share a portrait.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CacheKey(String);

impl CacheKey {
    /// Trims the name and replaces every run of whitespace with `_`.
    pub fn from_full_name(full_name: &str) -> Self {
        Self(full_name.split_whitespace().collect::<Vec<_>>().join("_"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_spaces_with_underscores() {
        assert_eq!(CacheKey::from_full_name("Ana Silva").as_str(), "Ana_Silva");
    }

    #[test]
    fn collapses_whitespace_runs_and_trims() {
        assert_eq!(
            CacheKey::from_full_name("  Maria \t da  Souza\n").as_str(),
            "Maria_da_Souza"
        );
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(
            CacheKey::from_full_name("Maria Souza"),
            CacheKey::from_full_name("Maria Souza")
        );
    }

    #[test]
    fn keeps_accents_and_case() {
        assert_eq!(CacheKey::from_full_name("João Émile").as_str(), "João_Émile");
        assert_ne!(
            CacheKey::from_full_name("ana silva"),
            CacheKey::from_full_name("Ana Silva")
        );
    }
}
