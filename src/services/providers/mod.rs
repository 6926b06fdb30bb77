//! Generative-model provider abstraction.
//!
//! A trait-based seam over the remote model so the HTTP layer can be
//! exercised against a mock backend in tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Model response contained no text")]
    EmptyResponse,
}

/// Image payload forwarded to the model alongside a prompt.
#[derive(Debug, Clone)]
pub struct ImagePart {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Sampling configuration passed to the remote model.
///
/// `None` fields are omitted from the request so the remote side applies
/// its own defaults.
#[derive(Debug, Clone, Default)]
pub struct GenerationParams {
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub top_k: Option<i32>,
    pub max_output_tokens: Option<i32>,
}

impl GenerationParams {
    /// Low-temperature settings biased toward deterministic,
    /// template-faithful document output.
    pub fn structured_document() -> Self {
        Self {
            temperature: Some(0.1),
            top_p: Some(0.8),
            top_k: Some(40),
            max_output_tokens: Some(8192),
        }
    }

    /// True when no field is set and the remote defaults apply.
    pub fn is_default(&self) -> bool {
        self.temperature.is_none()
            && self.top_p.is_none()
            && self.top_k.is_none()
            && self.max_output_tokens.is_none()
    }
}

/// Trait for text generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate text for the given prompt, optionally with an image part.
    async fn generate(
        &self,
        prompt: &str,
        image: Option<&ImagePart>,
        params: &GenerationParams,
    ) -> Result<String, ProviderError>;

    /// List the model identifiers the remote service reports, in the
    /// order received.
    async fn list_models(&self) -> Result<Vec<String>, ProviderError>;
}
