//! Marketing copy generation.

use atelier_core::content::{
    ContentLength, ContentType, Tone, CONTENT_TEMPERATURE, FALLBACK_CONTENT, MAX_ALTERNATIVES,
};
use atelier_core::types::Score;
use atelier_openai::{ChatMessage, ChatRequest, ModelProvider};
use serde::Serialize;

use crate::error::GenerationError;
use crate::reply::ModelReply;
use crate::BRAND_NAME;

/// Parameters for one copywriting call.
#[derive(Debug, Clone)]
pub struct ContentGenerationRequest {
    pub content_type: ContentType,
    pub product_info: String,
    pub tone: Tone,
    pub length: ContentLength,
    pub keywords: Option<String>,
}

/// An alternative take on the main copy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentAlternative {
    pub content: String,
    pub variant: String,
}

/// Copy returned by [`generate_content`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentResult {
    pub content: String,
    pub quality_score: Score,
    pub alternatives: Vec<ContentAlternative>,
}

/// Assemble the copywriter instruction.
pub fn build_content_prompt(request: &ContentGenerationRequest) -> String {
    let keywords = request
        .keywords
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(|k| format!("\nTarget Keywords: {k}"))
        .unwrap_or_default();

    format!(
        "You are a professional copywriter for {BRAND_NAME}, specializing in home and lifestyle \
         products. {} {} {}\n\n\
         Product Information: {}{keywords}\n\n\
         Respond with JSON in this format:\n\
         {{\n  \"content\": \"main generated content\",\n  \"qualityScore\": number (1-100),\n  \
         \"alternatives\": [\n    {{\"content\": \"alternative version 1\", \"variant\": \"SEO Optimized\"}},\n    \
         {{\"content\": \"alternative version 2\", \"variant\": \"Luxury Tone\"}}\n  ]\n}}",
        request.content_type.instruction(),
        request.tone.instruction(),
        request.length.instruction(),
        request.product_info.trim(),
    )
}

/// Generate marketing copy with up to two alternatives.
pub async fn generate_content(
    provider: &dyn ModelProvider,
    request: &ContentGenerationRequest,
) -> Result<ContentResult, GenerationError> {
    let chat = ChatRequest {
        messages: vec![ChatMessage::system(build_content_prompt(request))],
        temperature: Some(CONTENT_TEMPERATURE),
    };

    let raw = provider
        .complete_json(&chat)
        .await
        .map_err(GenerationError::Content)?;
    let reply = ModelReply::parse(raw.as_deref());

    Ok(content_from_reply(&reply))
}

fn content_from_reply(reply: &ModelReply) -> ContentResult {
    let alternatives = reply
        .objects("alternatives")
        .iter()
        .filter_map(|alt| {
            Some(ContentAlternative {
                content: alt.text("content")?,
                variant: alt.text("variant").unwrap_or_else(|| "Alternative".to_string()),
            })
        })
        .take(MAX_ALTERNATIVES)
        .collect();

    ContentResult {
        content: reply
            .text("content")
            .unwrap_or_else(|| FALLBACK_CONTENT.to_string()),
        quality_score: reply.score("qualityScore"),
        alternatives,
    }
}
