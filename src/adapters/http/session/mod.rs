//! Session HTTP module.
//!
//! Sign-in, birth data, step navigation, and the two generation workflows.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::SessionHandlers;
pub use routes::session_routes;
