//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `GenerationClient` - Text and image generation (Gemini in production)
//! - `PortraitCache` - Persistent soulmate portrait cache

mod generation_client;
mod portrait_cache;

pub use generation_client::{
    AspectRatio, GeneratedImage, GenerationClient, GenerationError, MISSING_CREDENTIAL_MESSAGE,
};
pub use portrait_cache::{PortraitCache, PortraitCacheError, PortraitRecord};
