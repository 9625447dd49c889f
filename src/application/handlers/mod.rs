//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod chart;
pub mod session;
pub mod soulmate;

pub use chart::{chart_error_message, GenerateChartHandler};
pub use session::{
    GetSessionHandler, NavigateHandler, RunChartHandler, RunSoulmateHandler, SessionCommandError,
    SessionRegistry, SignInHandler, SignOutHandler, SubmitProfileCommand, SubmitProfileHandler,
};
pub use soulmate::{RevealSoulmateError, RevealSoulmateHandler, RevealStep};
