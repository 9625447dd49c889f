//! Session command and query handlers.

mod errors;
mod navigate;
mod registry;
mod run_chart;
mod run_soulmate;
mod sign_in;
mod submit_profile;

pub use errors::SessionCommandError;
pub use navigate::{GetSessionHandler, NavigateHandler};
pub use registry::SessionRegistry;
pub use run_chart::RunChartHandler;
pub use run_soulmate::RunSoulmateHandler;
pub use sign_in::{SignInHandler, SignOutHandler};
pub use submit_profile::{SubmitProfileCommand, SubmitProfileHandler};
