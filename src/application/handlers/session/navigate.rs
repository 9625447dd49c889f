//! NavigateHandler / GetSessionHandler - Step navigation and session reads.

use crate::domain::foundation::SessionId;
use crate::domain::session::{SessionState, Step};

use super::{SessionCommandError, SessionRegistry};

/// Handler for the navigation bar and the "next" control.
pub struct NavigateHandler {
    registry: SessionRegistry,
}

impl NavigateHandler {
    pub fn new(registry: SessionRegistry) -> Self {
        Self { registry }
    }

    /// Moves to `step` if its control is enabled. Never starts a workflow.
    pub fn select(&self, session_id: SessionId, step: Step) -> Result<SessionState, SessionCommandError> {
        self.registry.update(session_id, |session| -> Result<_, SessionCommandError> {
            session.select(step)?;
            Ok(session.clone())
        })?
    }

    /// Moves from the chart to the soulmate step.
    pub fn advance(&self, session_id: SessionId) -> Result<SessionState, SessionCommandError> {
        self.registry.update(session_id, |session| -> Result<_, SessionCommandError> {
            session.advance()?;
            Ok(session.clone())
        })?
    }
}

/// Query handler returning a session snapshot.
pub struct GetSessionHandler {
    registry: SessionRegistry,
}

impl GetSessionHandler {
    pub fn new(registry: SessionRegistry) -> Self {
        Self { registry }
    }

    pub fn handle(&self, session_id: SessionId) -> Result<SessionState, SessionCommandError> {
        self.registry.get(session_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::NavigationError;

    fn registry_with_session() -> (SessionRegistry, SessionId) {
        let registry = SessionRegistry::new();
        let session = SessionState::new("ana@example.com");
        let id = session.id();
        registry.insert(session);
        (registry, id)
    }

    #[test]
    fn select_without_profile_is_refused() {
        let (registry, id) = registry_with_session();
        let handler = NavigateHandler::new(registry);

        assert_eq!(
            handler.select(id, Step::Chart).unwrap_err(),
            SessionCommandError::Navigation(NavigationError::ProfileRequired)
        );
    }

    #[test]
    fn selecting_active_step_is_allowed() {
        let (registry, id) = registry_with_session();
        let handler = NavigateHandler::new(registry);

        let session = handler.select(id, Step::DataEntry).unwrap();
        assert_eq!(session.step(), Step::DataEntry);
    }

    #[test]
    fn advance_without_chart_is_refused() {
        let (registry, id) = registry_with_session();
        let handler = NavigateHandler::new(registry);

        assert!(matches!(
            handler.advance(id),
            Err(SessionCommandError::Navigation(_))
        ));
    }

    #[test]
    fn get_session_returns_snapshot() {
        let (registry, id) = registry_with_session();
        let handler = GetSessionHandler::new(registry);

        assert_eq!(handler.handle(id).unwrap().id(), id);
        assert!(handler.handle(SessionId::new()).is_err());
    }
}
