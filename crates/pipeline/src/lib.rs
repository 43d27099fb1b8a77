//! Asset generation pipeline.
//!
//! Three single-call generators (images, copy, component code), the
//! multi-step [`orchestrator::ContentOrchestrator`] that chains them with
//! strategy and assessment calls, and the standalone cross-modal optimizer.
//! Every function takes a `&dyn ModelProvider`; none of them touch storage.

pub mod code;
pub mod content;
pub mod cross_modal;
pub mod error;
pub mod images;
pub mod orchestrator;
pub mod reply;

pub use error::GenerationError;

/// Brand the prompts are written for.
pub const BRAND_NAME: &str = "Williams-Sonoma";
