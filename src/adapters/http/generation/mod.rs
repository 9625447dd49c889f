//! Provider proxy endpoints (`/api/astro-chart`, `/api/soulmate`).

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::GenerationHandlers;
pub use routes::generation_routes;
