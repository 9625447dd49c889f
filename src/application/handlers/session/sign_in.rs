//! SignInHandler / SignOutHandler - Simulated authentication.

use crate::domain::foundation::SessionId;
use crate::domain::session::{Credentials, SessionState};

use super::{SessionCommandError, SessionRegistry};

/// Handler for the sign-in form.
pub struct SignInHandler {
    registry: SessionRegistry,
}

impl SignInHandler {
    pub fn new(registry: SessionRegistry) -> Self {
        Self { registry }
    }

    /// Validates the credentials locally and opens a session.
    pub fn handle(&self, credentials: Credentials) -> Result<SessionState, SessionCommandError> {
        let identity = credentials.validate()?;
        let session = SessionState::new(identity);

        tracing::info!(session_id = %session.id(), "Session opened");
        self.registry.insert(session.clone());
        Ok(session)
    }
}

/// Handler for sign-out. Discards the session and everything in it.
pub struct SignOutHandler {
    registry: SessionRegistry,
}

impl SignOutHandler {
    pub fn new(registry: SessionRegistry) -> Self {
        Self { registry }
    }

    pub fn handle(&self, session_id: SessionId) -> Result<(), SessionCommandError> {
        if self.registry.remove(session_id) {
            tracing::info!(session_id = %session_id, "Session closed");
            Ok(())
        } else {
            Err(SessionCommandError::NotFound(session_id))
        }
    }
}
