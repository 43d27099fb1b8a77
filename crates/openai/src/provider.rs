use async_trait::async_trait;

use crate::error::ProviderError;
use crate::types::{ChatRequest, ImageRequest};

/// A generative-model backend.
///
/// Implementations make exactly one upstream call per method invocation and
/// never retry.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Generate one image and return its URL, or `None` if the provider
    /// answered without one.
    async fn generate_image(&self, request: &ImageRequest) -> Result<Option<String>, ProviderError>;

    /// Run a JSON-mode chat completion and return the raw message content of
    /// the first choice, if any.
    async fn complete_json(&self, request: &ChatRequest) -> Result<Option<String>, ProviderError>;
}
