//! RevealSoulmateHandler - Cache lookup, then description, then portrait.
//!
//! The description and image calls run strictly in sequence; the image
//! prompt is built from the description produced by the same attempt.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::domain::chart::ChartResult;
use crate::domain::profile::BirthProfile;
use crate::domain::soulmate::{
    build_description_prompt, build_image_prompt, SoulmateResult, SoulmateReveal, SoulmateStatus,
};
use crate::ports::{AspectRatio, GenerationClient, GenerationError, PortraitCache};

/// Shown when a provider call fails.
pub const SOULMATE_PROVIDER_ERROR: &str = "Erro ao conectar com o cosmos.";

/// Shown when the image call returns no image.
pub const SOULMATE_EMPTY_IMAGE_ERROR: &str = "Nenhuma imagem foi gerada pelo modelo.";

/// Shown when the description call returns no text.
pub const SOULMATE_EMPTY_DESCRIPTION_ERROR: &str = "Nenhuma descrição foi gerada pelo modelo.";

/// Which provider call of the attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStep {
    Description,
    Image,
}

impl fmt::Display for RevealStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevealStep::Description => f.write_str("description"),
            RevealStep::Image => f.write_str("image"),
        }
    }
}

/// A failed reveal attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("soulmate {step} generation failed: {source}")]
pub struct RevealSoulmateError {
    pub step: RevealStep,
    #[source]
    pub source: GenerationError,
}

impl RevealSoulmateError {
    fn at_description(source: GenerationError) -> Self {
        Self {
            step: RevealStep::Description,
            source,
        }
    }

    fn at_image(source: GenerationError) -> Self {
        Self {
            step: RevealStep::Image,
            source,
        }
    }

    /// Message shown in place of the portrait.
    pub fn user_message(&self) -> String {
        match (&self.source, self.step) {
            (GenerationError::Configuration(message), _) => message.clone(),
            (GenerationError::EmptyResult(_), RevealStep::Description) => {
                SOULMATE_EMPTY_DESCRIPTION_ERROR.to_string()
            }
            (GenerationError::EmptyResult(_), RevealStep::Image) => {
                SOULMATE_EMPTY_IMAGE_ERROR.to_string()
            }
            (GenerationError::Provider(_) | GenerationError::InvalidRequest(_), _) => {
                SOULMATE_PROVIDER_ERROR.to_string()
            }
        }
    }
}

/// Handler for soulmate reveals.
pub struct RevealSoulmateHandler {
    client: Arc<dyn GenerationClient>,
    cache: Arc<dyn PortraitCache>,
}

impl RevealSoulmateHandler {
    pub fn new(client: Arc<dyn GenerationClient>, cache: Arc<dyn PortraitCache>) -> Self {
        Self { client, cache }
    }

    /// Runs one attempt. `on_progress` is told about each status entered
    /// before the final one.
    ///
    /// Cache read failures count as a miss and cache write failures are
    /// only logged.
    pub async fn handle(
        &self,
        profile: &BirthProfile,
        chart: &ChartResult,
        on_progress: &(dyn Fn(SoulmateStatus) + Send + Sync),
    ) -> Result<SoulmateReveal, RevealSoulmateError> {
        let key = profile.cache_key();
        let gender = profile.gender();

        on_progress(SoulmateStatus::CheckingCache);
        match self.cache.get(&key).await {
            Ok(Some(result)) => {
                tracing::info!(cache_key = %key, "Soulmate portrait served from cache");
                return Ok(SoulmateReveal::cached(result));
            }
            Ok(None) => tracing::debug!(cache_key = %key, "Soulmate cache miss"),
            Err(e) => {
                tracing::warn!(cache_key = %key, error = %e, "Soulmate cache read failed, treating as miss")
            }
        }

        on_progress(SoulmateStatus::GeneratingDescription);
        let description_prompt = build_description_prompt(chart.narrative(), gender);
        let description = self
            .client
            .generate_text(&description_prompt)
            .await
            .map_err(RevealSoulmateError::at_description)?;
        let description = description.trim();
        if description.is_empty() {
            return Err(RevealSoulmateError::at_description(GenerationError::empty(
                SOULMATE_EMPTY_DESCRIPTION_ERROR,
            )));
        }

        on_progress(SoulmateStatus::GeneratingImage);
        let image_prompt = build_image_prompt(description, gender);
        let image = self
            .client
            .generate_image(&image_prompt, AspectRatio::Portrait)
            .await
            .map_err(RevealSoulmateError::at_image)?;

        let result = SoulmateResult::new(image.data, image.mime_type, description);

        if let Err(e) = self.cache.put(&key, &result).await {
            tracing::warn!(cache_key = %key, error = %e, "Failed to cache soulmate portrait");
        }

        tracing::info!(cache_key = %key, "Soulmate portrait generated");
        Ok(SoulmateReveal::generated(result))
    }
}
