//! HTTP DTOs for session endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::chart::ChartStatus;
use crate::domain::profile::{BirthProfile, Gender};
use crate::domain::session::{ChartProgress, SessionState, SoulmateProgress, Step};
use crate::domain::soulmate::{Celebration, SoulmateStatus};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to sign in.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignInRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Birth data form. Missing fields arrive empty and fail validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileRequest {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub birth_time: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub birth_place: String,
}

/// Request to jump to a step.
#[derive(Debug, Clone, Deserialize)]
pub struct NavigateRequest {
    pub step: Step,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Submitted birth data as shown back to the client.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub full_name: String,
    pub birth_date: String,
    pub birth_time: String,
    pub gender: Gender,
    pub birth_place: String,
    pub cache_key: String,
}

impl From<&BirthProfile> for ProfileResponse {
    fn from(profile: &BirthProfile) -> Self {
        Self {
            full_name: profile.full_name().to_string(),
            birth_date: profile.birth_date().format("%Y-%m-%d").to_string(),
            birth_time: profile.formatted_birth_time(),
            gender: profile.gender(),
            birth_place: profile.birth_place().to_string(),
            cache_key: profile.cache_key().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartResponse {
    pub status: ChartStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&ChartProgress> for ChartResponse {
    fn from(progress: &ChartProgress) -> Self {
        Self {
            status: progress.status(),
            narrative: progress.result().map(|r| r.narrative().to_string()),
            error: progress.error().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SoulmateResponse {
    pub status: SoulmateStatus,
    /// `data:<mime>;base64,<data>`, ready for an `<img src>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub from_cache: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub celebration: Option<Celebration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&SoulmateProgress> for SoulmateResponse {
    fn from(progress: &SoulmateProgress) -> Self {
        let reveal = progress.reveal();
        Self {
            status: progress.status(),
            image_url: reveal.map(|r| r.result.data_url()),
            description: reveal.map(|r| r.result.description().to_string()),
            from_cache: reveal.map(|r| r.from_cache).unwrap_or(false),
            celebration: reveal.and_then(|r| r.celebration.clone()),
            error: progress.error().map(str::to_string),
        }
    }
}

/// Full session snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub id: String,
    pub identity: String,
    pub created_at: String,
    pub step: Step,
    pub enabled_steps: Vec<Step>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileResponse>,
    pub profile_revision: u64,
    pub chart: ChartResponse,
    pub soulmate: SoulmateResponse,
}

impl From<&SessionState> for SessionResponse {
    fn from(session: &SessionState) -> Self {
        Self {
            id: session.id().to_string(),
            identity: session.identity().to_string(),
            created_at: session.created_at().to_rfc3339(),
            step: session.step(),
            enabled_steps: session.enabled_steps(),
            profile: session.profile().map(ProfileResponse::from),
            profile_revision: session.profile_revision(),
            chart: session.chart().into(),
            soulmate: session.soulmate().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_request_tolerates_missing_fields() {
        let req: ProfileRequest = serde_json::from_str(r#"{"full_name":"Ana"}"#).unwrap();
        assert_eq!(req.full_name, "Ana");
        assert!(req.birth_place.is_empty());
    }

    #[test]
    fn navigate_request_reads_snake_case_step() {
        let req: NavigateRequest = serde_json::from_str(r#"{"step":"data_entry"}"#).unwrap();
        assert_eq!(req.step, Step::DataEntry);
    }

    #[test]
    fn fresh_session_serializes_without_profile() {
        let session = SessionState::new("ana@example.com");
        let json = serde_json::to_value(SessionResponse::from(&session)).unwrap();

        assert_eq!(json["identity"], "ana@example.com");
        assert_eq!(json["step"], "data_entry");
        assert_eq!(json["enabled_steps"], serde_json::json!(["data_entry"]));
        assert!(json.get("profile").is_none());
        assert_eq!(json["chart"]["status"], "not_started");
        assert_eq!(json["soulmate"]["status"], "idle");
        assert_eq!(json["soulmate"]["from_cache"], false);
    }
}
