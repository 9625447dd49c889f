//! SubmitProfileHandler - Birth data form submission.

use crate::domain::foundation::SessionId;
use crate::domain::profile::{parse_birth_date, parse_birth_time, BirthProfile, Gender};
use crate::domain::session::SessionState;

use super::{SessionCommandError, SessionRegistry};

/// Raw form values; parsed and validated by the handler.
#[derive(Debug, Clone)]
pub struct SubmitProfileCommand {
    pub session_id: SessionId,
    pub full_name: String,
    pub birth_date: String,
    pub birth_time: String,
    pub gender: String,
    pub birth_place: String,
}

/// Handler for profile submission.
pub struct SubmitProfileHandler {
    registry: SessionRegistry,
}

impl SubmitProfileHandler {
    pub fn new(registry: SessionRegistry) -> Self {
        Self { registry }
    }

    /// Replaces the session's profile and moves it to the chart step.
    pub fn handle(&self, cmd: SubmitProfileCommand) -> Result<SessionState, SessionCommandError> {
        let profile = BirthProfile::new(
            cmd.full_name,
            parse_birth_date(&cmd.birth_date)?,
            parse_birth_time(&cmd.birth_time)?,
            cmd.gender.parse::<Gender>()?,
            cmd.birth_place,
        )?;

        let session = self.registry.update(cmd.session_id, |session| {
            session.submit_profile(profile);
            session.clone()
        })?;

        tracing::info!(
            session_id = %cmd.session_id,
            profile_revision = session.profile_revision(),
            "Profile submitted"
        );
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;
    use crate::domain::session::Step;

    fn command(session_id: SessionId) -> SubmitProfileCommand {
        SubmitProfileCommand {
            session_id,
            full_name: "Ana Silva".to_string(),
            birth_date: "1990-05-01".to_string(),
            birth_time: "14:30".to_string(),
            gender: "feminino".to_string(),
            birth_place: "São Paulo".to_string(),
        }
    }

    fn registry_with_session() -> (SessionRegistry, SessionId) {
        let registry = SessionRegistry::new();
        let session = SessionState::new("ana@example.com");
        let id = session.id();
        registry.insert(session);
        (registry, id)
    }

    #[test]
    fn valid_form_moves_to_chart() {
        let (registry, id) = registry_with_session();
        let handler = SubmitProfileHandler::new(registry);

        let session = handler.handle(command(id)).unwrap();

        assert_eq!(session.step(), Step::Chart);
        assert_eq!(session.profile().unwrap().full_name(), "Ana Silva");
    }

    #[test]
    fn invalid_date_leaves_session_untouched() {
        let (registry, id) = registry_with_session();
        let handler = SubmitProfileHandler::new(registry.clone());

        let mut cmd = command(id);
        cmd.birth_date = "ontem".to_string();
        let err = handler.handle(cmd).unwrap_err();

        assert!(matches!(
            err,
            SessionCommandError::Validation(ValidationError::InvalidFormat { .. })
        ));
        assert!(registry.get(id).unwrap().profile().is_none());
    }

    #[test]
    fn blank_place_is_rejected() {
        let (registry, id) = registry_with_session();
        let handler = SubmitProfileHandler::new(registry);

        let mut cmd = command(id);
        cmd.birth_place = "  ".to_string();

        assert_eq!(
            handler.handle(cmd).unwrap_err(),
            SessionCommandError::Validation(ValidationError::empty_field("birth_place"))
        );
    }

    #[test]
    fn unknown_session_is_not_found() {
        let handler = SubmitProfileHandler::new(SessionRegistry::new());
        assert!(matches!(
            handler.handle(command(SessionId::new())),
            Err(SessionCommandError::NotFound(_))
        ));
    }
}
