//! Mock Generation Client for testing.
//!
//! Provides a configurable mock implementation of the GenerationClient port,
//! allowing tests to run without calling the Gemini API.
//!
//! # Features
//!
//! - Separate response queues for text and image calls
//! - Error injection
//! - Simulated delays
//! - Call tracking, in order, across both operations
//!
//! # Example
//!
//! ```ignore
//! let client = MockGenerationClient::new()
//!     .with_text("# Mapa astral")
//!     .with_image(GeneratedImage::new("AAAA", "image/png"));
//!
//! client.generate_text("prompt").await?;
//! assert_eq!(client.call_count(), 1);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{AspectRatio, GeneratedImage, GenerationClient, GenerationError};

/// One recorded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    Text { prompt: String },
    Image { prompt: String, aspect_ratio: AspectRatio },
}

impl MockCall {
    pub fn prompt(&self) -> &str {
        match self {
            MockCall::Text { prompt } | MockCall::Image { prompt, .. } => prompt,
        }
    }
}

/// Mock generation client for testing.
#[derive(Debug, Clone, Default)]
pub struct MockGenerationClient {
    texts: Arc<Mutex<VecDeque<Result<String, GenerationError>>>>,
    images: Arc<Mutex<VecDeque<Result<GeneratedImage, GenerationError>>>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<MockCall>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockGenerationClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful text response.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        lock(&self.texts).push_back(Ok(text.into()));
        self
    }

    /// Queues a failed text response.
    pub fn with_text_error(self, error: GenerationError) -> Self {
        lock(&self.texts).push_back(Err(error));
        self
    }

    /// Queues a successful image response.
    pub fn with_image(self, image: GeneratedImage) -> Self {
        lock(&self.images).push_back(Ok(image));
        self
    }

    /// Queues a failed image response.
    pub fn with_image_error(self, error: GenerationError) -> Self {
        lock(&self.images).push_back(Err(error));
        self
    }

    /// Sets simulated latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made to this client.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Returns all recorded calls in order.
    pub fn calls(&self) -> Vec<MockCall> {
        lock(&self.calls).clone()
    }

    /// Clears the call history.
    pub fn clear_calls(&self) {
        lock(&self.calls).clear();
    }

    async fn pause(&self) {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl GenerationClient for MockGenerationClient {
    async fn generate_text(&self, prompt: &str) -> Result<String, GenerationError> {
        lock(&self.calls).push(MockCall::Text {
            prompt: prompt.to_string(),
        });
        self.pause().await;

        lock(&self.texts)
            .pop_front()
            .unwrap_or_else(|| Ok("Mock text".to_string()))
    }

    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> Result<GeneratedImage, GenerationError> {
        lock(&self.calls).push(MockCall::Image {
            prompt: prompt.to_string(),
            aspect_ratio,
        });
        self.pause().await;

        lock(&self.images)
            .pop_front()
            .unwrap_or_else(|| Ok(GeneratedImage::new("bW9jaw==", "image/png")))
    }
}
