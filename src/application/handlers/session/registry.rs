//! In-process registry of live sessions.
//!
//! Critical sections are short and synchronous; workflow calls happen
//! between two `update`s, never while the lock is held.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::foundation::SessionId;
use crate::domain::session::SessionState;

use super::SessionCommandError;

/// Shared map of session id to session state.
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<SessionId, SessionState>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, session: SessionState) {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(session.id(), session);
    }

    /// Returns a snapshot of the session.
    pub fn get(&self, id: SessionId) -> Result<SessionState, SessionCommandError> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
            .ok_or(SessionCommandError::NotFound(id))
    }

    /// Runs `f` against the session under the write lock.
    pub fn update<R>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut SessionState) -> R,
    ) -> Result<R, SessionCommandError> {
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let session = sessions
            .get_mut(&id)
            .ok_or(SessionCommandError::NotFound(id))?;
        Ok(f(session))
    }

    /// Removes the session. Returns false if it did not exist.
    pub fn remove(&self, id: SessionId) -> bool {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id)
            .is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
