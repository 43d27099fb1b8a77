//! Cross-modal prompt alignment.

use atelier_core::types::Score;
use atelier_openai::{ChatMessage, ChatRequest, ModelProvider};
use serde::Serialize;

use crate::error::GenerationError;
use crate::reply::ModelReply;
use crate::BRAND_NAME;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizedPrompts {
    pub image: String,
    pub content: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossModalOptimization {
    pub optimized_prompts: OptimizedPrompts,
    pub alignment_score: Score,
    pub improvements: Vec<String>,
}

/// Rewrite an image prompt, a piece of copy and a set of component
/// requirements so they tell one consistent brand story.
///
/// Any prompt the model leaves out comes back as the caller's input.
pub async fn optimize_across_modalities(
    provider: &dyn ModelProvider,
    image_prompt: &str,
    content_text: &str,
    code_requirements: &str,
) -> Result<CrossModalOptimization, GenerationError> {
    let chat = ChatRequest {
        messages: vec![
            ChatMessage::system(format!(
                "You are a cross-modal optimization agent for {BRAND_NAME}. Analyze the image \
                 prompt, content, and code requirements together and optimize them for \
                 consistency and brand alignment. Respond with JSON:\n\
                 {{\n  \"optimizedPrompts\": {{\n    \"image\": \"optimized image prompt\",\n    \
                 \"content\": \"optimized content prompt\",\n    \
                 \"code\": \"optimized code requirements\"\n  }},\n  \
                 \"alignmentScore\": number(1-100),\n  \
                 \"improvements\": [\"improvement 1\", \"improvement 2\"]\n}}"
            )),
            ChatMessage::user(format!(
                "Image Prompt: {image_prompt}\n\
                 Content: {content_text}\n\
                 Code Requirements: {code_requirements}"
            )),
        ],
        temperature: None,
    };

    let raw = provider
        .complete_json(&chat)
        .await
        .map_err(GenerationError::CrossModal)?;
    let reply = ModelReply::parse(raw.as_deref());
    let prompts = reply.object("optimizedPrompts");

    Ok(CrossModalOptimization {
        optimized_prompts: OptimizedPrompts {
            image: prompts.text("image").unwrap_or_else(|| image_prompt.to_string()),
            content: prompts.text("content").unwrap_or_else(|| content_text.to_string()),
            code: prompts
                .text("code")
                .unwrap_or_else(|| code_requirements.to_string()),
        },
        alignment_score: reply.score("alignmentScore"),
        improvements: reply.strings("improvements"),
    })
}
