//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors, state machines)
//! - `profile` - Birth profile value objects and the portrait cache key
//! - `chart` - Chart prompt and generation status
//! - `soulmate` - Soulmate prompts, reveal status, and results
//! - `session` - Sign-in, step navigation, and workflow progress

pub mod chart;
pub mod foundation;
pub mod profile;
pub mod session;
pub mod soulmate;
