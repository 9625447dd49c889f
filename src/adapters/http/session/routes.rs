//! HTTP routes for session endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    advance, get_session, navigate, run_chart, run_soulmate, sign_in, sign_out, submit_profile,
    SessionHandlers,
};

/// Creates the session router; mount it under `/api/sessions`.
pub fn session_routes(handlers: SessionHandlers) -> Router {
    Router::new()
        .route("/", post(sign_in))
        .route("/:id", get(get_session).delete(sign_out))
        .route("/:id/profile", put(submit_profile))
        .route("/:id/chart", post(run_chart))
        .route("/:id/navigate", post(navigate))
        .route("/:id/next", post(advance))
        .route("/:id/soulmate", post(run_soulmate))
        .with_state(handlers)
}
