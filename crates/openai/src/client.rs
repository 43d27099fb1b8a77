//! REST client for the provider HTTP endpoints.
//!
//! Wraps `POST /images/generations` and `POST /chat/completions` (JSON
//! mode) using [`reqwest`].

use std::time::Duration;

use async_trait::async_trait;

use crate::config::OpenAiConfig;
use crate::error::ProviderError;
use crate::provider::ModelProvider;
use crate::types::{
    ChatCompletionBody, ChatCompletionResponse, ChatRequest, ErrorEnvelope, ImageGenerationBody,
    ImageGenerationResponse, ImageRequest, ResponseFormat,
};

/// HTTP client for the provider API.
pub struct OpenAiClient {
    client: reqwest::Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    /// Create a client with its own connection pool and the configured
    /// per-call timeout.
    pub fn new(config: OpenAiConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client, config })
    }

    // ---- private helpers ----

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.config.base_url)
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`ProviderError::Api`] carrying
    /// the provider's error message on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ProviderError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ProviderError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl ModelProvider for OpenAiClient {
    async fn generate_image(&self, request: &ImageRequest) -> Result<Option<String>, ProviderError> {
        let body = ImageGenerationBody {
            model: &self.config.image_model,
            prompt: &request.prompt,
            n: 1,
            size: &request.size,
            quality: &request.quality,
        };

        tracing::debug!(
            model = %self.config.image_model,
            size = %request.size,
            quality = %request.quality,
            "Requesting image generation",
        );

        let response = self
            .client
            .post(self.endpoint("images/generations"))
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let parsed: ImageGenerationResponse = Self::parse_response(response).await?;
        Ok(parsed.data.into_iter().next().and_then(|d| d.url))
    }

    async fn complete_json(&self, request: &ChatRequest) -> Result<Option<String>, ProviderError> {
        let body = ChatCompletionBody {
            model: &self.config.chat_model,
            messages: &request.messages,
            response_format: ResponseFormat {
                format_type: "json_object",
            },
            temperature: request.temperature,
        };

        tracing::debug!(
            model = %self.config.chat_model,
            messages = request.messages.len(),
            "Requesting JSON chat completion",
        );

        let response = self
            .client
            .post(self.endpoint("chat/completions"))
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let parsed: ChatCompletionResponse = Self::parse_response(response).await?;
        Ok(parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content))
    }
}
