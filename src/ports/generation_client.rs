//! Generation Client Port - Interface for the generative model provider.
//!
//! Two operations cover everything the app needs: free text for the chart
//! narrative and the soulmate description, and a single inline image for the
//! portrait. Inputs are opaque prompt strings.
//!
//! # Example
//!
//! ```ignore
//! let narrative = client.generate_text(&prompt).await?;
//! let portrait = client
//!     .generate_image(&image_prompt, AspectRatio::Portrait)
//!     .await?;
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Message surfaced when the provider credential is absent.
pub const MISSING_CREDENTIAL_MESSAGE: &str = "GEMINI_API_KEY não configurada no servidor.";

/// Port for text and image generation.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Generates text for a prompt.
    ///
    /// # Errors
    ///
    /// - `InvalidRequest` if the prompt is blank
    /// - `Configuration` if no credential is configured
    /// - `Provider` for transport or upstream failures
    /// - `EmptyResult` if the response carried no text
    async fn generate_text(&self, prompt: &str) -> Result<String, GenerationError>;

    /// Generates one image for a prompt at the given aspect ratio.
    ///
    /// # Errors
    ///
    /// Same as [`generate_text`](Self::generate_text); `EmptyResult` if no
    /// inline image came back.
    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> Result<GeneratedImage, GenerationError>;
}

/// Image returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    /// Base64-encoded image bytes.
    pub data: String,
    pub mime_type: String,
}

impl GeneratedImage {
    pub fn new(data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mime_type: mime_type.into(),
        }
    }
}

/// Aspect ratio requested from the image model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AspectRatio {
    /// 3:4, used for soulmate portraits.
    #[default]
    Portrait,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Portrait => "3:4",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from a generation call.
///
/// The `Display` text of `Configuration` is shown to users verbatim; the
/// other variants carry diagnostic detail meant for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("{0}")]
    Configuration(String),

    #[error("provider error: {0}")]
    Provider(String),

    #[error("{0}")]
    EmptyResult(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl GenerationError {
    /// The error raised when no credential is configured.
    pub fn missing_credential() -> Self {
        GenerationError::Configuration(MISSING_CREDENTIAL_MESSAGE.to_string())
    }

    pub fn provider(message: impl Into<String>) -> Self {
        GenerationError::Provider(message.into())
    }

    pub fn empty(message: impl Into<String>) -> Self {
        GenerationError::EmptyResult(message.into())
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        GenerationError::InvalidRequest(message.into())
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, GenerationError::Configuration(_))
    }

    /// The carried message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            GenerationError::Configuration(msg)
            | GenerationError::Provider(msg)
            | GenerationError::EmptyResult(msg)
            | GenerationError::InvalidRequest(msg) => msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_displays_verbatim() {
        assert_eq!(
            GenerationError::missing_credential().to_string(),
            "GEMINI_API_KEY não configurada no servidor."
        );
        assert!(GenerationError::missing_credential().is_configuration());
    }

    #[test]
    fn portrait_is_three_by_four() {
        assert_eq!(AspectRatio::Portrait.as_str(), "3:4");
        assert_eq!(AspectRatio::default(), AspectRatio::Portrait);
    }

    #[test]
    fn provider_error_keeps_detail() {
        let err = GenerationError::provider("HTTP 429: quota exceeded");
        assert_eq!(err.to_string(), "provider error: HTTP 429: quota exceeded");
    }
}
