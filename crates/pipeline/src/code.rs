//! Storefront component code generation.

use atelier_core::code::{
    Complexity, ComponentType, Framework, BRAND_COLORS, CODE_TEMPERATURE, FALLBACK_CODE,
};
use atelier_openai::{ChatMessage, ChatRequest, ModelProvider};
use serde::Serialize;

use crate::error::GenerationError;
use crate::reply::ModelReply;
use crate::BRAND_NAME;

/// Parameters for one code generation call.
#[derive(Debug, Clone)]
pub struct CodeGenerationRequest {
    pub component_type: ComponentType,
    pub requirements: String,
    pub framework: Framework,
    pub complexity: Complexity,
    pub include_typescript: bool,
    pub include_comments: bool,
}

/// Capability flags the model reports about its own output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeAnalysis {
    pub type_safe: bool,
    pub responsive: bool,
    pub accessible: bool,
}

/// Code returned by [`generate_code`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeResult {
    pub code: String,
    pub analysis: CodeAnalysis,
}

/// Assemble the front-end developer instruction.
pub fn build_code_prompt(request: &CodeGenerationRequest) -> String {
    let typing = if request.include_typescript {
        "Include TypeScript interfaces and proper typing"
    } else {
        "Use JavaScript"
    };
    let comments = if request.include_comments {
        "Include detailed comments explaining the code"
    } else {
        "Minimal comments"
    };

    format!(
        "You are an expert frontend developer specializing in e-commerce applications. {}\n\n\
         Requirements: {}\n\n\
         Technical Requirements:\n\
         - {}\n\
         - {}\n\
         - {typing}\n\
         - {comments}\n\
         - Use {BRAND_NAME} brand colors: {BRAND_COLORS}\n\
         - Ensure accessibility with proper ARIA labels and keyboard navigation\n\
         - Make it responsive for mobile and desktop\n\
         - Follow modern React best practices\n\n\
         Respond with JSON in this format:\n\
         {{\n  \"code\": \"complete component code\",\n  \"analysis\": {{\n    \
         \"typeSafe\": boolean,\n    \"responsive\": boolean,\n    \"accessible\": boolean\n  }}\n}}",
        request.component_type.instruction(),
        request.requirements.trim(),
        request.framework.instruction(),
        request.complexity.instruction(),
    )
}

/// Generate component source plus its capability flags.
pub async fn generate_code(
    provider: &dyn ModelProvider,
    request: &CodeGenerationRequest,
) -> Result<CodeResult, GenerationError> {
    let chat = ChatRequest {
        messages: vec![ChatMessage::system(build_code_prompt(request))],
        temperature: Some(CODE_TEMPERATURE),
    };

    let raw = provider
        .complete_json(&chat)
        .await
        .map_err(GenerationError::Code)?;
    let reply = ModelReply::parse(raw.as_deref());
    let analysis = reply.object("analysis");

    Ok(CodeResult {
        code: reply.text("code").unwrap_or_else(|| FALLBACK_CODE.to_string()),
        analysis: CodeAnalysis {
            type_safe: analysis
                .flag("typeSafe")
                .unwrap_or(request.include_typescript),
            responsive: analysis.flag("responsive").unwrap_or(true),
            accessible: analysis.flag("accessible").unwrap_or(true),
        },
    })
}
