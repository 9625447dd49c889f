//! AI provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Gemini provider configuration.
///
/// The API key is optional at load time. Without it the server still starts,
/// and every generation request answers with a configuration error.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Gemini API key
    pub gemini_api_key: Option<String>,

    /// Base URL of the Generative Language API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model used for chart narratives and portrait descriptions
    #[serde(default = "default_text_model")]
    pub text_model: String,

    /// Model used for portrait images
    #[serde(default = "default_image_model")]
    pub image_model: String,

    /// Transport timeout in seconds, applied by the HTTP client
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if a Gemini key is configured
    pub fn has_gemini(&self) -> bool {
        self.gemini_api_key
            .as_ref()
            .is_some_and(|k| !k.trim().is_empty())
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if self.text_model.trim().is_empty() || self.image_model.trim().is_empty() {
            return Err(ValidationError::EmptyModel);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            base_url: default_base_url(),
            text_model: default_text_model(),
            image_model: default_image_model(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_text_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_image_model() -> String {
    "gemini-2.5-flash-image".to_string()
}

fn default_timeout() -> u64 {
    300
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.text_model, "gemini-3-flash-preview");
        assert_eq!(config.image_model, "gemini-2.5-flash-image");
        assert_eq!(config.timeout_secs, 300);
        assert!(!config.has_gemini());
    }

    #[test]
    fn test_timeout_duration() {
        let config = AiConfig {
            timeout_secs: 60,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_blank_key_is_not_configured() {
        let config = AiConfig {
            gemini_api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(!config.has_gemini());
    }

    #[test]
    fn test_missing_key_still_validates() {
        assert!(AiConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_base_url() {
        let config = AiConfig {
            base_url: "generativelanguage.googleapis.com".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidBaseUrl)
        ));
    }

    #[test]
    fn test_validation_rejects_empty_model() {
        let config = AiConfig {
            image_model: String::new(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::EmptyModel)));
    }
}
