//! HTTP DTOs for the provider proxy endpoints.
//!
//! Field names follow the browser client's wire shape (`visualPrompt`).

use serde::{Deserialize, Serialize};

/// Body of `POST /api/astro-chart`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AstroChartRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Successful response of `POST /api/astro-chart`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AstroChartResponse {
    pub text: String,
}

/// Body of `POST /api/soulmate`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SoulmateImageRequest {
    #[serde(default, rename = "visualPrompt")]
    pub visual_prompt: Option<String>,
}

/// Successful response of `POST /api/soulmate`; `image` is bare base64.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoulmateImageResponse {
    pub image: String,
}
