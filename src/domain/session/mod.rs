//! Session module.
//!
//! A session is created by the simulated sign-in and holds one visitor's
//! progress through data entry, chart, and soulmate reveal.

mod credentials;
mod navigation;
mod state;

pub use credentials::{Credentials, MIN_PASSWORD_LEN};
pub use navigation::{NavigationError, Step};
pub use state::{ChartProgress, ChartStart, SessionState, SoulmateProgress, SoulmateStart, Ticket};
