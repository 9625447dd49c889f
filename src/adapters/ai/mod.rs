//! Generation Client Adapters.
//!
//! ## Available Adapters
//!
//! - `GeminiProvider` - Google Gemini text and image models
//! - `MockGenerationClient` - Configurable mock for testing

mod gemini_provider;
mod mock_provider;

pub use gemini_provider::{
    GeminiConfig, GeminiProvider, DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL,
};
pub use mock_provider::{MockCall, MockGenerationClient};
