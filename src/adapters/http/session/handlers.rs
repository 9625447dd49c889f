//! HTTP handlers for session endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{ApiError, ApiJson};
use crate::application::handlers::session::{
    GetSessionHandler, NavigateHandler, RunChartHandler, RunSoulmateHandler, SessionCommandError,
    SignInHandler, SignOutHandler, SubmitProfileCommand, SubmitProfileHandler,
};
use crate::domain::foundation::SessionId;
use crate::domain::session::{Credentials, SessionState};

use super::dto::{NavigateRequest, ProfileRequest, SessionResponse, SignInRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SessionHandlers {
    sign_in_handler: Arc<SignInHandler>,
    sign_out_handler: Arc<SignOutHandler>,
    get_handler: Arc<GetSessionHandler>,
    submit_profile_handler: Arc<SubmitProfileHandler>,
    navigate_handler: Arc<NavigateHandler>,
    run_chart_handler: Arc<RunChartHandler>,
    run_soulmate_handler: Arc<RunSoulmateHandler>,
}

impl SessionHandlers {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sign_in_handler: Arc<SignInHandler>,
        sign_out_handler: Arc<SignOutHandler>,
        get_handler: Arc<GetSessionHandler>,
        submit_profile_handler: Arc<SubmitProfileHandler>,
        navigate_handler: Arc<NavigateHandler>,
        run_chart_handler: Arc<RunChartHandler>,
        run_soulmate_handler: Arc<RunSoulmateHandler>,
    ) -> Self {
        Self {
            sign_in_handler,
            sign_out_handler,
            get_handler,
            submit_profile_handler,
            navigate_handler,
            run_chart_handler,
            run_soulmate_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions - Sign in and open a session
pub async fn sign_in(
    State(handlers): State<SessionHandlers>,
    ApiJson(req): ApiJson<SignInRequest>,
) -> Response {
    let credentials = Credentials::new(req.email, req.password);

    match handlers.sign_in_handler.handle(credentials) {
        Ok(session) => (StatusCode::CREATED, Json(SessionResponse::from(&session))).into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// GET /api/sessions/:id - Current session snapshot
pub async fn get_session(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    session_response(handlers.get_handler.handle(session_id))
}

/// DELETE /api/sessions/:id - Sign out
pub async fn sign_out(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.sign_out_handler.handle(session_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// PUT /api/sessions/:id/profile - Submit birth data
pub async fn submit_profile(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
    ApiJson(req): ApiJson<ProfileRequest>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = SubmitProfileCommand {
        session_id,
        full_name: req.full_name,
        birth_date: req.birth_date,
        birth_time: req.birth_time,
        gender: req.gender,
        birth_place: req.birth_place,
    };

    session_response(handlers.submit_profile_handler.handle(cmd))
}

/// POST /api/sessions/:id/chart - Generate the chart narrative
pub async fn run_chart(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    session_response(handlers.run_chart_handler.handle(session_id).await)
}

/// POST /api/sessions/:id/navigate - Jump to an enabled step
pub async fn navigate(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
    ApiJson(req): ApiJson<NavigateRequest>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    session_response(handlers.navigate_handler.select(session_id, req.step))
}

/// POST /api/sessions/:id/next - Move from the chart to the soulmate step
pub async fn advance(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    session_response(handlers.navigate_handler.advance(session_id))
}

/// POST /api/sessions/:id/soulmate - Reveal the soulmate portrait
pub async fn run_soulmate(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    session_response(handlers.run_soulmate_handler.handle(session_id).await)
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

#[allow(clippy::result_large_err)]
fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse::<SessionId>()
        .map_err(|_| ApiError::bad_request("ID de sessão inválido.").into_response())
}

fn session_response(result: Result<SessionState, SessionCommandError>) -> Response {
    match result {
        Ok(session) => (StatusCode::OK, Json(SessionResponse::from(&session))).into_response(),
        Err(e) => handle_session_error(e),
    }
}

fn handle_session_error(error: SessionCommandError) -> Response {
    let message = error.to_string();
    match error {
        SessionCommandError::NotFound(_) => ApiError::not_found(message).into_response(),
        SessionCommandError::Validation(_) => ApiError::bad_request(message).into_response(),
        SessionCommandError::Navigation(_) => ApiError::conflict(message).into_response(),
    }
}
