//! Generative-model provider client.
//!
//! Wraps the provider's image-generation and JSON-mode chat-completion
//! endpoints behind the [`ModelProvider`] trait so the generation pipeline
//! can run against the real HTTP client or a scripted stand-in.

pub mod client;
pub mod config;
pub mod error;
pub mod provider;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod types;

pub use client::OpenAiClient;
pub use config::OpenAiConfig;
pub use error::ProviderError;
pub use provider::ModelProvider;
pub use types::{ChatMessage, ChatRequest, ImageRequest};
