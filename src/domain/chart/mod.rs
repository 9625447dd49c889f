//! Astrological chart module.
//!
//! The chart narrative is produced by a single text generation call and is
//! kept in the session for the rest of its lifetime.

mod prompt;
mod status;

pub use prompt::{build_chart_prompt, CHART_SECTIONS};
pub use status::ChartStatus;

use serde::Serialize;

/// Narrative returned for a birth profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartResult {
    narrative: String,
}

impl ChartResult {
    pub fn new(narrative: impl Into<String>) -> Self {
        Self {
            narrative: narrative.into(),
        }
    }

    pub fn narrative(&self) -> &str {
        &self.narrative
    }
}
