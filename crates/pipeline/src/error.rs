use atelier_openai::ProviderError;

/// A failed provider call, labelled with the operation it belonged to.
///
/// The display text always carries the provider's own error message so it
/// can be surfaced to the caller unchanged.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Failed to generate images: {0}")]
    Images(#[source] ProviderError),

    #[error("Failed to generate content: {0}")]
    Content(#[source] ProviderError),

    #[error("Failed to generate code: {0}")]
    Code(#[source] ProviderError),

    #[error("Failed to analyze content strategy: {0}")]
    Strategy(#[source] ProviderError),

    #[error("Failed to assess quality: {0}")]
    Assessment(#[source] ProviderError),

    #[error("Failed to generate optimizations: {0}")]
    Optimization(#[source] ProviderError),

    #[error("Failed to optimize content: {0}")]
    CrossModal(#[source] ProviderError),
}
