//! Mock provider implementation for testing.

use super::{ProviderError, TextProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// How the mock answers a prompt.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Reply with the prompt itself.
    Echo,
    /// Reply with a fixed text.
    Reply(String),
    /// Fail every call with this error.
    Fail(ProviderError),
}

/// Mock text provider for testing.
#[derive(Debug)]
pub struct MockTextProvider {
    behavior: MockBehavior,
    calls: AtomicUsize,
}

impl MockTextProvider {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn echo() -> Self {
        Self::new(MockBehavior::Echo)
    }

    pub fn replying(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Reply(text.into()))
    }

    /// Fail with an API error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::failing_with(ProviderError::ApiError(message.into()))
    }

    pub fn failing_with(error: ProviderError) -> Self {
        Self::new(MockBehavior::Fail(error))
    }

    /// Number of `generate` calls received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockBehavior::Echo => Ok(prompt.to_string()),
            MockBehavior::Reply(text) => Ok(text.clone()),
            MockBehavior::Fail(error) => Err(error.clone()),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        match &self.behavior {
            MockBehavior::Fail(error) => Err(error.clone()),
            _ => Ok(()),
        }
    }
}
