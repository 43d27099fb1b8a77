//! Scripted [`ModelProvider`] for tests.
//!
//! Replies are queued up front and consumed in call order; every request is
//! recorded so tests can assert on prompts and call counts. An exhausted
//! queue answers with an API error, which makes unexpected calls visible.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::provider::ModelProvider;
use crate::types::{ChatRequest, ImageRequest};

/// One scripted answer.
pub type ScriptedReply = Result<Option<String>, ProviderError>;

/// A request observed by [`ScriptedProvider`], in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Image(ImageRequest),
    Chat(ChatRequest),
}

#[derive(Default)]
pub struct ScriptedProvider {
    image_replies: Mutex<VecDeque<ScriptedReply>>,
    chat_replies: Mutex<VecDeque<ScriptedReply>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an image reply carrying `url`.
    pub fn push_image(&self, url: &str) -> &Self {
        self.push_image_reply(Ok(Some(url.to_string())))
    }

    pub fn push_image_reply(&self, reply: ScriptedReply) -> &Self {
        self.image_replies.lock().unwrap().push_back(reply);
        self
    }

    /// Queue a chat reply whose message content is `json` serialized.
    pub fn push_chat_json(&self, json: serde_json::Value) -> &Self {
        self.push_chat_reply(Ok(Some(json.to_string())))
    }

    pub fn push_chat_reply(&self, reply: ScriptedReply) -> &Self {
        self.chat_replies.lock().unwrap().push_back(reply);
        self
    }

    /// Build the error a failing upstream call would produce.
    pub fn api_error(status: u16, message: &str) -> ProviderError {
        ProviderError::Api {
            status,
            message: message.to_string(),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn image_calls(&self) -> Vec<ImageRequest> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                RecordedCall::Image(r) => Some(r),
                RecordedCall::Chat(_) => None,
            })
            .collect()
    }

    pub fn chat_calls(&self) -> Vec<ChatRequest> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                RecordedCall::Chat(r) => Some(r),
                RecordedCall::Image(_) => None,
            })
            .collect()
    }

    fn next(queue: &Mutex<VecDeque<ScriptedReply>>, kind: &str) -> ScriptedReply {
        queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Self::api_error(599, &format!("no scripted {kind} reply"))))
    }
}

#[async_trait]
impl ModelProvider for ScriptedProvider {
    async fn generate_image(&self, request: &ImageRequest) -> Result<Option<String>, ProviderError> {
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCall::Image(request.clone()));
        Self::next(&self.image_replies, "image")
    }

    async fn complete_json(&self, request: &ChatRequest) -> Result<Option<String>, ProviderError> {
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCall::Chat(request.clone()));
        Self::next(&self.chat_replies, "chat")
    }
}
