//! GenerateChartHandler - Produces the chart narrative for a birth profile.

use std::sync::Arc;

use crate::domain::chart::{build_chart_prompt, ChartResult};
use crate::domain::profile::BirthProfile;
use crate::ports::{GenerationClient, GenerationError};

/// Shown when the provider call fails.
pub const CHART_PROVIDER_ERROR: &str = "Erro ao alinhar as estrelas. Por favor, tente novamente.";

/// Shown when the provider returns no text.
pub const CHART_EMPTY_ERROR: &str = "Nenhum conteúdo foi gerado pelas estrelas.";

/// Handler for chart generation. One text call per run, no retries.
pub struct GenerateChartHandler {
    client: Arc<dyn GenerationClient>,
}

impl GenerateChartHandler {
    pub fn new(client: Arc<dyn GenerationClient>) -> Self {
        Self { client }
    }

    pub async fn handle(&self, profile: &BirthProfile) -> Result<ChartResult, GenerationError> {
        let prompt = build_chart_prompt(profile);

        match self.client.generate_text(&prompt).await {
            Ok(narrative) if narrative.trim().is_empty() => {
                Err(GenerationError::empty(CHART_EMPTY_ERROR))
            }
            Ok(narrative) => {
                tracing::info!(narrative_chars = narrative.chars().count(), "Chart generated");
                Ok(ChartResult::new(narrative))
            }
            Err(err) => {
                tracing::warn!(error = %err, "Chart generation failed");
                Err(err)
            }
        }
    }
}

/// User-facing message for a failed chart run.
pub fn chart_error_message(err: &GenerationError) -> String {
    match err {
        GenerationError::Configuration(message) => message.clone(),
        GenerationError::EmptyResult(_) => CHART_EMPTY_ERROR.to_string(),
        GenerationError::Provider(_) | GenerationError::InvalidRequest(_) => {
            CHART_PROVIDER_ERROR.to_string()
        }
    }
}
