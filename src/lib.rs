//! AstroSoul - Birth chart narratives and soulmate portraits
//!
//! A user signs in, submits their birth data, receives a Markdown astrological
//! reading, and then a charcoal portrait of their soulmate. Text and images
//! come from Google Gemini; portraits are cached per full name.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
