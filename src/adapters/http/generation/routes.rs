//! HTTP routes for the provider proxy endpoints.

use axum::{routing::post, Router};

use super::handlers::{astro_chart, soulmate_image, GenerationHandlers};

/// Creates the proxy router. Paths are absolute (`/api/...`).
pub fn generation_routes(handlers: GenerationHandlers) -> Router {
    Router::new()
        .route("/api/astro-chart", post(astro_chart))
        .route("/api/soulmate", post(soulmate_image))
        .with_state(handlers)
}
