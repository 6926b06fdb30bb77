//! Mock provider implementation for testing.

use super::{GenerationParams, ImagePart, ProviderError, TextProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock text provider for testing.
///
/// Echoes the assembled prompt back so tests can assert on what would
/// have been sent to the remote model, and counts generation calls.
pub struct MockTextProvider {
    enabled: bool,
    models: Vec<String>,
    calls: Arc<AtomicUsize>,
}

impl MockTextProvider {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            models: vec![
                "models/gemini-1.5-flash".to_string(),
                "models/gemini-1.5-pro".to_string(),
            ],
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_models(mut self, models: Vec<String>) -> Self {
        self.models = models;
        self
    }

    /// Counter incremented on every generation call.
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        prompt: &str,
        image: Option<&ImagePart>,
        _params: &GenerationParams,
    ) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if !self.enabled {
            return Err(ProviderError::Api(
                "Mock text provider failure".to_string(),
            ));
        }

        match image {
            Some(image) => Ok(format!(
                "Mock response for: {} [image {} {} bytes]",
                prompt,
                image.mime_type,
                image.bytes.len()
            )),
            None => Ok(format!("Mock response for: {}", prompt)),
        }
    }

    async fn list_models(&self) -> Result<Vec<String>, ProviderError> {
        if !self.enabled {
            return Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            ));
        }

        Ok(self.models.clone())
    }
}
