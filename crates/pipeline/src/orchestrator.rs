//! Multi-step campaign workflow.
//!
//! [`ContentOrchestrator`] runs a fixed six-step chain against one provider:
//!
//! 1. Strategy: derive an image prompt, content type, keywords and features.
//! 2. Images: two square HD images from the derived prompt.
//! 3. Content: luxury-toned, medium-length copy.
//! 4. Code: a React + Tailwind product card built from the features.
//! 5. Assessment: score the generated set.
//! 6. Optimization: suggestions derived from the scores alone.
//!
//! Steps run strictly in order with one call in flight. The first failure
//! ends the run; no partial result is returned. The context lives only as
//! long as the orchestrator instance.

use std::sync::Arc;

use atelier_core::code::{Complexity, ComponentType, Framework};
use atelier_core::content::{ContentLength, ContentType, Tone};
use atelier_core::image::{AspectRatio, BrandStyle, ImageQuality};
use atelier_core::quality::ORCHESTRATED_CODE_SCORE;
use atelier_core::types::Score;
use atelier_openai::{ChatMessage, ChatRequest, ModelProvider};
use serde::Serialize;

use crate::code::{generate_code, CodeGenerationRequest, CodeResult};
use crate::content::{generate_content, ContentGenerationRequest, ContentResult};
use crate::error::GenerationError;
use crate::images::{generate_product_images, GeneratedImageResult, ImageGenerationRequest};
use crate::reply::ModelReply;
use crate::BRAND_NAME;

/// Images generated per campaign.
const CAMPAIGN_IMAGE_COUNT: u32 = 2;

// ---------------------------------------------------------------------------
// Workflow steps
// ---------------------------------------------------------------------------

/// One stage of the campaign chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStep {
    Strategy,
    Images,
    Content,
    Code,
    Assessment,
    Optimization,
}

impl WorkflowStep {
    /// Execution order.
    pub const ORDER: [WorkflowStep; 6] = [
        WorkflowStep::Strategy,
        WorkflowStep::Images,
        WorkflowStep::Content,
        WorkflowStep::Code,
        WorkflowStep::Assessment,
        WorkflowStep::Optimization,
    ];

    pub fn name(self) -> &'static str {
        match self {
            WorkflowStep::Strategy => "strategy",
            WorkflowStep::Images => "images",
            WorkflowStep::Content => "content",
            WorkflowStep::Code => "code",
            WorkflowStep::Assessment => "assessment",
            WorkflowStep::Optimization => "optimization",
        }
    }

    /// Human-readable line recorded in the workflow log.
    pub fn log_line(self) -> &'static str {
        match self {
            WorkflowStep::Strategy => "Content Strategy Agent: analyzing product requirements",
            WorkflowStep::Images => "Visual Asset Agent: generating product imagery",
            WorkflowStep::Content => "Copy Generation Agent: writing marketing content",
            WorkflowStep::Code => "Component Agent: building React components",
            WorkflowStep::Assessment => {
                "QA Agent: evaluating content quality and brand alignment"
            }
            WorkflowStep::Optimization => "Optimization Agent: suggesting improvements",
        }
    }
}

// ---------------------------------------------------------------------------
// Session context
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ImageAsset {
    pub url: String,
    pub prompt: String,
    pub quality: Score,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentAsset {
    pub text: String,
    pub content_type: ContentType,
    pub quality: Score,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CodeAsset {
    pub component: String,
    pub framework: Framework,
    pub quality: Score,
}

/// Summaries of everything generated in the current run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedAssets {
    pub images: Vec<ImageAsset>,
    pub content: Vec<ContentAsset>,
    pub code: Vec<CodeAsset>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityMetrics {
    pub overall_score: Score,
    pub brand_alignment: Score,
    pub consistency: Score,
}

/// In-memory state shared between the steps of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentContext {
    pub session_id: String,
    pub brand_style: BrandStyle,
    pub product_context: String,
    pub generated_assets: GeneratedAssets,
    /// `None` until the assessment step has run.
    pub quality_metrics: Option<QualityMetrics>,
}

/// Partial update applied with [`ContentOrchestrator::update_context`].
#[derive(Debug, Clone, Default)]
pub struct ContextUpdate {
    pub brand_style: Option<BrandStyle>,
    pub product_context: Option<String>,
}

// ---------------------------------------------------------------------------
// Step outputs
// ---------------------------------------------------------------------------

/// Plan derived by the strategy step.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentStrategy {
    pub image_prompt: String,
    pub content_type: ContentType,
    pub keywords: Option<String>,
    pub features: Vec<String>,
    pub brand_alignment: Option<String>,
}

impl ContentStrategy {
    /// Read a strategy reply, defaulting every missing field. The image
    /// prompt falls back to the product description itself.
    pub fn from_reply(reply: &ModelReply, product_info: &str) -> Self {
        let keywords = reply.text("keywords").or_else(|| {
            let list = reply.strings("keywords");
            (!list.is_empty()).then(|| list.join(", "))
        });

        Self {
            image_prompt: reply
                .text("imagePrompt")
                .unwrap_or_else(|| product_info.to_string()),
            content_type: reply
                .text("contentType")
                .map(|label| ContentType::from_label(&label))
                .unwrap_or_default(),
            keywords,
            features: reply.strings("features"),
            brand_alignment: reply.text("brandAlignment"),
        }
    }

    /// Requirements handed to the code step.
    pub fn code_requirements(&self, product_info: &str) -> String {
        if self.features.is_empty() {
            format!("Product card for {product_info}")
        } else {
            format!("Product card for {product_info} with {}", self.features.join(", "))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityAssessment {
    pub overall_score: Score,
    pub brand_alignment: Score,
    pub consistency: Score,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

impl QualityAssessment {
    pub fn metrics(&self) -> QualityMetrics {
        QualityMetrics {
            overall_score: self.overall_score,
            brand_alignment: self.brand_alignment,
            consistency: self.consistency,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Optimizations {
    pub image_optimizations: Vec<String>,
    pub content_optimizations: Vec<String>,
    pub code_optimizations: Vec<String>,
    pub workflow_improvements: Vec<String>,
}

/// Assessment fields with the optimization suggestions attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignAssessment {
    #[serde(flatten)]
    pub assessment: QualityAssessment,
    pub optimizations: Optimizations,
}

/// Everything a successful campaign run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignResult {
    pub session_id: String,
    pub images: Vec<GeneratedImageResult>,
    pub content: Vec<ContentResult>,
    pub code: Vec<CodeResult>,
    pub workflow: Vec<String>,
    pub quality_assessment: CampaignAssessment,
}

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

/// Coordinates one campaign run. Create a fresh instance per request.
pub struct ContentOrchestrator {
    provider: Arc<dyn ModelProvider>,
    context: AgentContext,
    workflow: Vec<String>,
}

impl ContentOrchestrator {
    pub fn new(provider: Arc<dyn ModelProvider>, session_id: impl Into<String>) -> Self {
        Self {
            provider,
            context: AgentContext {
                session_id: session_id.into(),
                brand_style: BrandStyle::WilliamsSonomaClassic,
                product_context: String::new(),
                generated_assets: GeneratedAssets::default(),
                quality_metrics: None,
            },
            workflow: Vec::new(),
        }
    }

    pub fn context(&self) -> &AgentContext {
        &self.context
    }

    pub fn update_context(&mut self, update: ContextUpdate) {
        if let Some(style) = update.brand_style {
            self.context.brand_style = style;
        }
        if let Some(product) = update.product_context {
            self.context.product_context = product;
        }
    }

    /// Log of the most recent run, including the error line if it failed.
    pub fn workflow(&self) -> &[String] {
        &self.workflow
    }

    /// Run the full chain for `product_info`.
    pub async fn generate_product_campaign(
        &mut self,
        product_info: &str,
    ) -> Result<CampaignResult, GenerationError> {
        self.workflow.clear();
        self.context.product_context = product_info.to_string();

        match self.run_steps(product_info).await {
            Ok(result) => {
                tracing::info!(
                    session_id = %self.context.session_id,
                    images = result.images.len(),
                    overall_score = result.quality_assessment.assessment.overall_score,
                    "Campaign workflow complete",
                );
                Ok(result)
            }
            Err(err) => {
                self.workflow.push(format!("Error in workflow: {err}"));
                tracing::error!(
                    session_id = %self.context.session_id,
                    error = %err,
                    "Campaign workflow failed",
                );
                Err(err)
            }
        }
    }

    async fn run_steps(&mut self, product_info: &str) -> Result<CampaignResult, GenerationError> {
        let provider = Arc::clone(&self.provider);
        let provider = provider.as_ref();

        self.begin(WorkflowStep::Strategy);
        let strategy = self.analyze_content_strategy(provider, product_info).await?;

        self.begin(WorkflowStep::Images);
        let images = generate_product_images(
            provider,
            &ImageGenerationRequest {
                prompt: strategy.image_prompt.clone(),
                brand_style: self.context.brand_style,
                aspect_ratio: AspectRatio::Square,
                quality: ImageQuality::High,
                batch_size: CAMPAIGN_IMAGE_COUNT,
            },
        )
        .await?;
        self.context.generated_assets.images = images
            .iter()
            .map(|img| ImageAsset {
                url: img.url.clone(),
                prompt: strategy.image_prompt.clone(),
                quality: img.quality_score,
            })
            .collect();

        self.begin(WorkflowStep::Content);
        let content = generate_content(
            provider,
            &ContentGenerationRequest {
                content_type: strategy.content_type,
                product_info: product_info.to_string(),
                tone: Tone::Luxury,
                length: ContentLength::Medium,
                keywords: strategy.keywords.clone(),
            },
        )
        .await?;
        self.context.generated_assets.content = vec![ContentAsset {
            text: content.content.clone(),
            content_type: strategy.content_type,
            quality: content.quality_score,
        }];

        self.begin(WorkflowStep::Code);
        let framework = Framework::ReactTailwind;
        let code = generate_code(
            provider,
            &CodeGenerationRequest {
                component_type: ComponentType::ProductCard,
                requirements: strategy.code_requirements(product_info),
                framework,
                complexity: Complexity::Intermediate,
                include_typescript: true,
                include_comments: true,
            },
        )
        .await?;
        self.context.generated_assets.code = vec![CodeAsset {
            component: code.code.clone(),
            framework,
            quality: ORCHESTRATED_CODE_SCORE,
        }];

        self.begin(WorkflowStep::Assessment);
        let assessment = self.assess_quality(provider).await?;
        self.context.quality_metrics = Some(assessment.metrics());

        self.begin(WorkflowStep::Optimization);
        let optimizations = self.generate_optimizations(provider, assessment.metrics()).await?;

        Ok(CampaignResult {
            session_id: self.context.session_id.clone(),
            images,
            content: vec![content],
            code: vec![code],
            workflow: self.workflow.clone(),
            quality_assessment: CampaignAssessment {
                assessment,
                optimizations,
            },
        })
    }

    fn begin(&mut self, step: WorkflowStep) {
        tracing::info!(
            session_id = %self.context.session_id,
            step = step.name(),
            "Campaign step started",
        );
        self.workflow.push(step.log_line().to_string());
    }

    async fn analyze_content_strategy(
        &self,
        provider: &dyn ModelProvider,
        product_info: &str,
    ) -> Result<ContentStrategy, GenerationError> {
        let chat = ChatRequest {
            messages: vec![
                ChatMessage::system(format!(
                    "You are a {BRAND_NAME} content strategist. Analyze the product and create a \
                     comprehensive content strategy. Respond with JSON:\n\
                     {{\n  \"imagePrompt\": \"specific prompt for product imagery\",\n  \
                     \"contentType\": \"Product Description|Marketing Email|Social Media Post\",\n  \
                     \"keywords\": \"comma-separated SEO keywords\",\n  \
                     \"features\": [\"key feature 1\", \"key feature 2\"],\n  \
                     \"brandAlignment\": \"alignment strategy\"\n}}"
                )),
                ChatMessage::user(format!("Product: {product_info}")),
            ],
            temperature: None,
        };

        let raw = provider
            .complete_json(&chat)
            .await
            .map_err(GenerationError::Strategy)?;
        let reply = ModelReply::parse(raw.as_deref());
        if reply.is_empty() {
            tracing::warn!(
                session_id = %self.context.session_id,
                "Strategy reply empty, using product info as image prompt",
            );
        }

        Ok(ContentStrategy::from_reply(&reply, product_info))
    }

    async fn assess_quality(
        &self,
        provider: &dyn ModelProvider,
    ) -> Result<QualityAssessment, GenerationError> {
        let assets = &self.context.generated_assets;
        let content_types: Vec<&str> = assets
            .content
            .iter()
            .map(|c| c.content_type.label())
            .collect();
        let frameworks: Vec<&str> = assets.code.iter().map(|c| c.framework.label()).collect();

        let chat = ChatRequest {
            messages: vec![
                ChatMessage::system(format!(
                    "You are a quality assurance agent for {BRAND_NAME} content. Evaluate the \
                     generated assets for brand alignment, consistency, and overall quality. \
                     Respond with JSON:\n\
                     {{\n  \"overallScore\": number(1-100),\n  \"brandAlignment\": number(1-100),\n  \
                     \"consistency\": number(1-100),\n  \
                     \"strengths\": [\"strength 1\", \"strength 2\"],\n  \
                     \"improvements\": [\"improvement 1\", \"improvement 2\"]\n}}"
                )),
                ChatMessage::user(format!(
                    "Evaluate these assets:\n\
                     Images: {} generated\n\
                     Content: {} pieces ({})\n\
                     Code: {} components ({})\n\
                     Brand Style: {}\n\
                     Product: {}",
                    assets.images.len(),
                    assets.content.len(),
                    content_types.join(", "),
                    assets.code.len(),
                    frameworks.join(", "),
                    self.context.brand_style.label(),
                    self.context.product_context,
                )),
            ],
            temperature: None,
        };

        let raw = provider
            .complete_json(&chat)
            .await
            .map_err(GenerationError::Assessment)?;
        let reply = ModelReply::parse(raw.as_deref());

        Ok(QualityAssessment {
            overall_score: reply.score("overallScore"),
            brand_alignment: reply.score("brandAlignment"),
            consistency: reply.score("consistency"),
            strengths: reply.strings("strengths"),
            improvements: reply.strings("improvements"),
        })
    }

    async fn generate_optimizations(
        &self,
        provider: &dyn ModelProvider,
        metrics: QualityMetrics,
    ) -> Result<Optimizations, GenerationError> {
        let chat = ChatRequest {
            messages: vec![
                ChatMessage::system(
                    "You are an optimization agent. Based on quality metrics, suggest specific \
                     improvements for each content type. Respond with JSON:\n\
                     {\n  \"imageOptimizations\": [\"optimization 1\", \"optimization 2\"],\n  \
                     \"contentOptimizations\": [\"optimization 1\", \"optimization 2\"],\n  \
                     \"codeOptimizations\": [\"optimization 1\", \"optimization 2\"],\n  \
                     \"workflowImprovements\": [\"improvement 1\", \"improvement 2\"]\n}",
                ),
                ChatMessage::user(format!(
                    "Quality Scores - Overall: {}, Brand: {}, Consistency: {}",
                    metrics.overall_score, metrics.brand_alignment, metrics.consistency,
                )),
            ],
            temperature: None,
        };

        let raw = provider
            .complete_json(&chat)
            .await
            .map_err(GenerationError::Optimization)?;
        let reply = ModelReply::parse(raw.as_deref());

        Ok(Optimizations {
            image_optimizations: reply.strings("imageOptimizations"),
            content_optimizations: reply.strings("contentOptimizations"),
            code_optimizations: reply.strings("codeOptimizations"),
            workflow_improvements: reply.strings("workflowImprovements"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_have_distinct_log_lines() {
        let lines: Vec<_> = WorkflowStep::ORDER.iter().map(|s| s.log_line()).collect();
        for (i, line) in lines.iter().enumerate() {
            assert!(!line.is_empty());
            assert!(!lines[i + 1..].contains(line));
        }
    }

    #[test]
    fn strategy_defaults_from_empty_reply() {
        let strategy = ContentStrategy::from_reply(&ModelReply::default(), "Teak bath mat");

        assert_eq!(strategy.image_prompt, "Teak bath mat");
        assert_eq!(strategy.content_type, ContentType::ProductDescription);
        assert!(strategy.keywords.is_none());
        assert!(strategy.features.is_empty());
        assert_eq!(strategy.code_requirements("Teak bath mat"), "Product card for Teak bath mat");
    }

    #[test]
    fn strategy_reads_all_fields() {
        let reply = ModelReply::parse(Some(
            r#"{
                "imagePrompt": "Teak mat on slate tile",
                "contentType": "Social Media Post",
                "keywords": ["teak", "spa"],
                "features": ["water resistant", "non-slip"],
                "brandAlignment": "natural luxury"
            }"#,
        ));

        let strategy = ContentStrategy::from_reply(&reply, "Teak bath mat");

        assert_eq!(strategy.image_prompt, "Teak mat on slate tile");
        assert_eq!(strategy.content_type, ContentType::SocialMediaPost);
        assert_eq!(strategy.keywords.as_deref(), Some("teak, spa"));
        assert_eq!(strategy.brand_alignment.as_deref(), Some("natural luxury"));
        assert_eq!(
            strategy.code_requirements("Teak bath mat"),
            "Product card for Teak bath mat with water resistant, non-slip"
        );
    }

    #[test]
    fn assessment_serializes_flat_with_optimizations() {
        let value = serde_json::to_value(CampaignAssessment {
            assessment: QualityAssessment {
                overall_score: 90,
                brand_alignment: 88,
                consistency: 85,
                strengths: vec!["cohesive".into()],
                improvements: vec![],
            },
            optimizations: Optimizations::default(),
        })
        .unwrap();

        assert_eq!(value["overallScore"], 90);
        assert_eq!(value["strengths"][0], "cohesive");
        assert!(value["optimizations"]["imageOptimizations"].is_array());
    }
}
