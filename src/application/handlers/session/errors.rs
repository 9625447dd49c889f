use thiserror::Error;

use crate::domain::foundation::{SessionId, ValidationError};
use crate::domain::session::NavigationError;

/// Why a session command was refused.
///
/// Workflow failures are not errors here: they are recorded on the session
/// and shown in place of the result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionCommandError {
    #[error("Sessão não encontrada: {0}")]
    NotFound(SessionId),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),
}
