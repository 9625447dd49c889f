//! Gemini Provider - Implementation of GenerationClient for Google's Gemini API.
//!
//! Both text and image generation go through the `generateContent` REST
//! endpoint, each with its own model.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(Some(api_key))
//!     .with_text_model("gemini-3-flash-preview")
//!     .with_image_model("gemini-2.5-flash-image");
//!
//! let provider = GeminiProvider::new(config)?;
//! ```
//!
//! A provider built without a key still constructs; every call then fails
//! with [`GenerationError::Configuration`].

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{AspectRatio, GeneratedImage, GenerationClient, GenerationError};

/// Default model for chart narratives and soulmate descriptions.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-flash-preview";

/// Default model for portraits.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Message used when an image response carries no inline data.
const NO_IMAGE_MESSAGE: &str = "Nenhuma imagem gerada";

/// Message used when a text response carries no text parts.
const NO_TEXT_MESSAGE: &str = "Nenhum texto gerado";

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    api_key: Option<Secret<String>>,
    pub base_url: String,
    pub text_model: String,
    pub image_model: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Creates a configuration. A blank key counts as absent.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key
                .filter(|key| !key.trim().is_empty())
                .map(Secret::new),
            base_url: DEFAULT_BASE_URL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            timeout: Duration::from_secs(300),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_text_model(mut self, model: impl Into<String>) -> Self {
        self.text_model = model.into();
        self
    }

    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn api_key(&self) -> Result<&str, GenerationError> {
        self.api_key
            .as_ref()
            .map(|key| key.expose_secret().as_str())
            .ok_or_else(GenerationError::missing_credential)
    }
}

/// Gemini API provider implementation.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    /// Creates a new Gemini provider with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GenerationError::provider(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the generateContent endpoint URL for a model.
    fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }

    /// Checks credentials and prompt before any network traffic.
    fn preflight<'a>(&'a self, prompt: &str) -> Result<&'a str, GenerationError> {
        let key = self.config.api_key()?;
        if prompt.trim().is_empty() {
            return Err(GenerationError::invalid_request("prompt is empty"));
        }
        Ok(key)
    }

    async fn send(
        &self,
        api_key: &str,
        model: &str,
        request: &GeminiRequest,
    ) -> Result<GeminiResponse, GenerationError> {
        let response = self
            .client
            .post(self.generate_url(model))
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::provider(format!(
                        "request timed out after {}s",
                        self.config.timeout.as_secs()
                    ))
                } else if e.is_connect() {
                    GenerationError::provider(format!("connection failed: {}", e))
                } else {
                    GenerationError::provider(e.to_string())
                }
            })?;

        let response = Self::handle_response_status(response).await?;

        response
            .json::<GeminiResponse>()
            .await
            .map_err(|e| GenerationError::provider(format!("failed to parse response: {}", e)))
    }

    /// Maps non-2xx responses to provider errors, keeping the upstream message.
    async fn handle_response_status(response: Response) -> Result<Response, GenerationError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(GenerationError::provider(format!(
            "HTTP {}: {}",
            status.as_u16(),
            upstream_error_message(&body)
        )))
    }
}

#[async_trait]
impl GenerationClient for GeminiProvider {
    async fn generate_text(&self, prompt: &str) -> Result<String, GenerationError> {
        let api_key = self.preflight(prompt)?;
        let request = GeminiRequest::text(prompt);

        tracing::debug!(model = %self.config.text_model, prompt_chars = prompt.len(), "Gemini text request");
        let response = self.send(api_key, &self.config.text_model, &request).await?;
        extract_text(response)
    }

    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> Result<GeneratedImage, GenerationError> {
        let api_key = self.preflight(prompt)?;
        let request = GeminiRequest::image(prompt, aspect_ratio);

        tracing::debug!(
            model = %self.config.image_model,
            aspect_ratio = %aspect_ratio,
            "Gemini image request"
        );
        let response = self.send(api_key, &self.config.image_model, &request).await?;
        extract_image(response)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response handling
// ════════════════════════════════════════════════════════════════════════════

/// Concatenates the text parts of the first candidate.
fn extract_text(response: GeminiResponse) -> Result<String, GenerationError> {
    let parts = first_candidate_parts(response)?;
    let text: String = parts.into_iter().filter_map(|part| part.text).collect();

    if text.trim().is_empty() {
        Err(GenerationError::empty(NO_TEXT_MESSAGE))
    } else {
        Ok(text)
    }
}

/// Returns the first part of the first candidate carrying inline data.
fn extract_image(response: GeminiResponse) -> Result<GeneratedImage, GenerationError> {
    first_candidate_parts(response)?
        .into_iter()
        .find_map(|part| part.inline_data)
        .filter(|data| !data.data.is_empty())
        .map(|data| {
            let mime_type = data
                .mime_type
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| crate::domain::soulmate::DEFAULT_IMAGE_MIME.to_string());
            GeneratedImage::new(data.data, mime_type)
        })
        .ok_or_else(|| GenerationError::empty(NO_IMAGE_MESSAGE))
}

fn first_candidate_parts(response: GeminiResponse) -> Result<Vec<GeminiPart>, GenerationError> {
    if let Some(reason) = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
    {
        return Err(GenerationError::provider(format!("prompt blocked: {}", reason)));
    }

    Ok(response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts)
        .unwrap_or_default())
}

/// Pulls `error.message` out of a Gemini error body, or returns the raw body.
fn upstream_error_message(body: &str) -> String {
    serde_json::from_str::<GeminiErrorBody>(body)
        .ok()
        .map(|parsed| parsed.error.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| body.trim().to_string())
}

// ════════════════════════════════════════════════════════════════════════════
// Gemini API types
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl GeminiRequest {
    fn text(prompt: &str) -> Self {
        Self {
            contents: vec![GeminiContent::user_text(prompt)],
            generation_config: None,
        }
    }

    fn image(prompt: &str, aspect_ratio: AspectRatio) -> Self {
        Self {
            contents: vec![GeminiContent::user_text(prompt)],
            generation_config: Some(GenerationConfig {
                image_config: Some(ImageConfig {
                    aspect_ratio: aspect_ratio.as_str().to_string(),
                }),
            }),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

impl GeminiContent {
    fn user_text(text: &str) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![GeminiPart {
                text: Some(text.to_string()),
                inline_data: None,
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default)]
    mime_type: Option<String>,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    image_config: Option<ImageConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageConfig {
    aspect_ratio: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    error: GeminiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    #[serde(default)]
    message: String,
}
