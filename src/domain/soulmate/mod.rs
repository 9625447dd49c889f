//! Soulmate reveal module.
//!
//! A reveal pairs a short poetic description with a generated portrait.
//! Results are cached per [`CacheKey`](crate::domain::profile::CacheKey)
//! so revisits do not regenerate.

mod prompt;
mod status;

pub use prompt::{
    build_description_prompt, build_image_prompt, narrative_excerpt, NARRATIVE_EXCERPT_CHARS,
};
pub use status::SoulmateStatus;

use serde::Serialize;

/// MIME type assumed when the provider omits one.
pub const DEFAULT_IMAGE_MIME: &str = "image/png";

/// Generated portrait plus the description it was drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SoulmateResult {
    portrait_image: String,
    mime_type: String,
    description: String,
}

impl SoulmateResult {
    /// `portrait_image` is base64 without a data URL prefix.
    pub fn new(
        portrait_image: impl Into<String>,
        mime_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            portrait_image: portrait_image.into(),
            mime_type: mime_type.into(),
            description: description.into(),
        }
    }

    pub fn portrait_image(&self) -> &str {
        &self.portrait_image
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// `data:<mime>;base64,<image>`, ready for an `<img src>`.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.portrait_image)
    }

    /// Inverse of [`data_url`](Self::data_url). Returns `None` for anything
    /// that is not a base64 data URL.
    pub fn from_data_url(url: &str, description: impl Into<String>) -> Option<Self> {
        let rest = url.strip_prefix("data:")?;
        let (mime_type, image) = rest.split_once(";base64,")?;
        if image.is_empty() {
            return None;
        }
        let mime_type = if mime_type.is_empty() {
            DEFAULT_IMAGE_MIME
        } else {
            mime_type
        };
        Some(Self::new(image, mime_type, description))
    }
}

/// Outcome of one successful reveal attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoulmateReveal {
    pub result: SoulmateResult,
    /// True when served from the portrait cache without provider calls.
    pub from_cache: bool,
    /// Present only for freshly generated portraits.
    pub celebration: Option<Celebration>,
}

impl SoulmateReveal {
    pub fn cached(result: SoulmateResult) -> Self {
        Self {
            result,
            from_cache: true,
            celebration: None,
        }
    }

    pub fn generated(result: SoulmateResult) -> Self {
        Self {
            result,
            from_cache: false,
            celebration: Some(Celebration::default()),
        }
    }
}

/// Confetti burst the front end plays when a new portrait arrives.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Celebration {
    pub particle_count: u32,
    pub spread: u32,
    pub origin_y: f32,
    pub colors: Vec<String>,
}

impl Default for Celebration {
    fn default() -> Self {
        Self {
            particle_count: 150,
            spread: 70,
            origin_y: 0.6,
            colors: vec![
                "#f59e0b".to_string(),
                "#fbbf24".to_string(),
                "#ffffff".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_round_trips() {
        let result = SoulmateResult::new("aGVsbG8=", "image/jpeg", "olhar sereno");
        let url = result.data_url();
        assert_eq!(url, "data:image/jpeg;base64,aGVsbG8=");

        let parsed = SoulmateResult::from_data_url(&url, "olhar sereno").unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn from_data_url_rejects_plain_urls() {
        assert!(SoulmateResult::from_data_url("https://example.com/a.png", "x").is_none());
        assert!(SoulmateResult::from_data_url("data:image/png;base64,", "x").is_none());
    }

    #[test]
    fn from_data_url_defaults_missing_mime() {
        let parsed = SoulmateResult::from_data_url("data:;base64,AAAA", "x").unwrap();
        assert_eq!(parsed.mime_type(), DEFAULT_IMAGE_MIME);
    }

    #[test]
    fn default_celebration_matches_reveal_effect() {
        let celebration = Celebration::default();
        assert_eq!(celebration.particle_count, 150);
        assert_eq!(celebration.spread, 70);
        assert_eq!(celebration.colors.len(), 3);
    }
}
