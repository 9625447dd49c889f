//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    // Workflows
    GenerateChartHandler, RevealSoulmateError, RevealSoulmateHandler, RevealStep,
    // Session
    GetSessionHandler, NavigateHandler, RunChartHandler, RunSoulmateHandler, SessionCommandError,
    SessionRegistry, SignInHandler, SignOutHandler, SubmitProfileCommand, SubmitProfileHandler,
};
