//! Text generation backends.
//!
//! The relay only needs "prompt in, completion out"; [`TextProvider`] is that
//! seam, with a Gemini implementation for production and an in-memory one
//! for tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug, Clone)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered: {0}")]
    ContentFiltered(String),

    #[error("Provider returned no text")]
    EmptyResponse,
}

/// A backend that turns a prompt into generated text.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a completion for `prompt`. The text is returned as produced.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Cheap check that the provider is usable.
    async fn health_check(&self) -> Result<(), ProviderError>;
}

impl ProviderError {
    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::NotConfigured(_) => "not_configured",
            ProviderError::NetworkError(_) => "network",
            ProviderError::ApiError(_) => "api",
            ProviderError::RateLimited => "rate_limited",
            ProviderError::ContentFiltered(_) => "content_filtered",
            ProviderError::EmptyResponse => "empty_response",
        }
    }
}
