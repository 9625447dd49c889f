//! HTTP adapters - REST API implementations.
//!
//! Two groups of endpoints share one router:
//!
//! - `/api/astro-chart`, `/api/soulmate`: stateless proxies in front of the
//!   generation provider
//! - `/api/sessions/...`: the guided three-step experience
//!
//! Errors are always `{ "error": "<message>" }`.

pub mod error;
pub mod generation;
pub mod session;

use std::sync::Arc;

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::handlers::{
    GenerateChartHandler, GetSessionHandler, NavigateHandler, RevealSoulmateHandler,
    RunChartHandler, RunSoulmateHandler, SessionRegistry, SignInHandler, SignOutHandler,
    SubmitProfileHandler,
};
use crate::ports::{GenerationClient, PortraitCache};

pub use error::{ApiError, ApiJson, ErrorResponse};
pub use generation::{generation_routes, GenerationHandlers};
pub use session::{session_routes, SessionHandlers};

/// Fully wired handler state for the router.
#[derive(Clone)]
pub struct AppState {
    pub registry: SessionRegistry,
    pub generation: GenerationHandlers,
    pub sessions: SessionHandlers,
}

impl AppState {
    /// Wires every handler around one provider and one portrait cache.
    pub fn new(client: Arc<dyn GenerationClient>, cache: Arc<dyn PortraitCache>) -> Self {
        let registry = SessionRegistry::new();

        let chart_generator = Arc::new(GenerateChartHandler::new(client.clone()));
        let revealer = Arc::new(RevealSoulmateHandler::new(client.clone(), cache));

        let sessions = SessionHandlers::new(
            Arc::new(SignInHandler::new(registry.clone())),
            Arc::new(SignOutHandler::new(registry.clone())),
            Arc::new(GetSessionHandler::new(registry.clone())),
            Arc::new(SubmitProfileHandler::new(registry.clone())),
            Arc::new(NavigateHandler::new(registry.clone())),
            Arc::new(RunChartHandler::new(registry.clone(), chart_generator)),
            Arc::new(RunSoulmateHandler::new(registry.clone(), revealer)),
        );

        Self {
            registry,
            generation: GenerationHandlers::new(client),
            sessions,
        }
    }
}

/// Builds the application router.
///
/// An empty `cors_origins` list allows any origin.
pub fn app_router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(generation_routes(state.generation))
        .nest("/api/sessions", session_routes(state.sessions))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    "ok"
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}
