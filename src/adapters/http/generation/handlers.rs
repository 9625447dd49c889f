//! HTTP handlers for the provider proxy endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{ApiError, ApiJson};
use crate::ports::{AspectRatio, GenerationClient, GenerationError};

use super::dto::{AstroChartRequest, AstroChartResponse, SoulmateImageRequest, SoulmateImageResponse};

/// Message for a missing or blank chart prompt.
pub const MISSING_PROMPT: &str = "Prompt ausente";

/// Message for a missing or blank visual prompt.
pub const MISSING_VISUAL_PROMPT: &str = "Prompt visual ausente";

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct GenerationHandlers {
    client: Arc<dyn GenerationClient>,
}

impl GenerationHandlers {
    pub fn new(client: Arc<dyn GenerationClient>) -> Self {
        Self { client }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/astro-chart - Generate text for a prompt
pub async fn astro_chart(
    State(handlers): State<GenerationHandlers>,
    ApiJson(req): ApiJson<AstroChartRequest>,
) -> Response {
    let prompt = req.prompt.unwrap_or_default();

    match handlers.client.generate_text(&prompt).await {
        Ok(text) => (StatusCode::OK, Json(AstroChartResponse { text })).into_response(),
        Err(e) => handle_generation_error(e, MISSING_PROMPT),
    }
}

/// POST /api/soulmate - Generate a 3:4 portrait for a visual prompt
pub async fn soulmate_image(
    State(handlers): State<GenerationHandlers>,
    ApiJson(req): ApiJson<SoulmateImageRequest>,
) -> Response {
    let prompt = req.visual_prompt.unwrap_or_default();

    match handlers
        .client
        .generate_image(&prompt, AspectRatio::Portrait)
        .await
    {
        Ok(image) => (
            StatusCode::OK,
            Json(SoulmateImageResponse { image: image.data }),
        )
            .into_response(),
        Err(e) => handle_generation_error(e, MISSING_VISUAL_PROMPT),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_generation_error(error: GenerationError, missing_prompt: &str) -> Response {
    match error {
        GenerationError::InvalidRequest(_) => ApiError::bad_request(missing_prompt).into_response(),
        other => {
            tracing::error!(error = %other, "Generation proxy request failed");
            ApiError::internal(other.message()).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_request_maps_to_400_with_given_message() {
        let response = handle_generation_error(
            GenerationError::invalid_request("prompt is empty"),
            MISSING_VISUAL_PROMPT,
        );
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn configuration_maps_to_500() {
        let response =
            handle_generation_error(GenerationError::missing_credential(), MISSING_PROMPT);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn empty_result_maps_to_500() {
        let response = handle_generation_error(
            GenerationError::empty("Nenhuma imagem gerada"),
            MISSING_VISUAL_PROMPT,
        );
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
