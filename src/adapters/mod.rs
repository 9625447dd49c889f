//! Adapters - Implementations of port interfaces.
//!
//! - `ai` - Gemini and mock generation clients
//! - `storage` - Portrait cache backends
//! - `http` - axum router and handlers

pub mod ai;
pub mod http;
pub mod storage;
