//! Testing utilities including a mock model.
//!
//! Useful for exercising scorers without real model calls: canned tool-call
//! payloads are matched against the prompt text, embeddings are deterministic,
//! and every call is recorded for assertions.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use openai_client::{
    AssistantMessage, ChatCompletion, ChatRequest, Choice, FunctionCall, ToolCall,
};

use crate::error::Result;
use crate::traits::ChatModel;

/// A canned reply the mock hands back for a matching prompt.
#[derive(Debug, Clone)]
enum CannedReply {
    /// A tool call whose arguments are this JSON payload
    ToolPayload(serde_json::Value),
    /// A tool call whose arguments are this raw string (possibly not JSON)
    RawToolPayload(String),
    /// Free text and no tool call, as if the model ignored the forced tool
    Text(String),
}

/// Record of a call made to the mock model.
#[derive(Debug, Clone)]
pub enum MockCall {
    /// A chat completion, with the prompt and the forced tool name if any
    Complete {
        prompt: String,
        tool: Option<String>,
    },
    /// An embedding request
    Embed { text: String },
}

/// A mock [`ChatModel`] with deterministic, configurable behavior.
///
/// Replies are selected by substring match on the prompt, first match wins;
/// an empty matcher matches every prompt. Prompts with no matching reply get
/// free text and no tool call.
#[derive(Default)]
pub struct MockModel {
    replies: Arc<RwLock<Vec<(String, CannedReply)>>>,

    /// Predefined embeddings by text
    embeddings: Arc<RwLock<HashMap<String, Vec<f32>>>>,

    /// Dimension of generated embeddings
    embedding_dim: usize,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<MockCall>>>,
}

impl MockModel {
    /// Create a new mock model.
    pub fn new() -> Self {
        Self {
            embedding_dim: 64,
            ..Default::default()
        }
    }

    /// Set the dimension of generated embeddings.
    pub fn with_embedding_dim(mut self, dim: usize) -> Self {
        self.embedding_dim = dim;
        self
    }

    /// Reply to prompts containing `matcher` with a tool call carrying this
    /// JSON payload.
    pub fn with_tool_payload(self, matcher: impl Into<String>, payload: serde_json::Value) -> Self {
        self.replies
            .write()
            .unwrap()
            .push((matcher.into(), CannedReply::ToolPayload(payload)));
        self
    }

    /// Reply with a tool call whose raw argument string may be broken JSON.
    pub fn with_raw_tool_payload(
        self,
        matcher: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        self.replies
            .write()
            .unwrap()
            .push((matcher.into(), CannedReply::RawToolPayload(arguments.into())));
        self
    }

    /// Reply with free text and no tool call.
    pub fn with_text_reply(self, matcher: impl Into<String>, content: impl Into<String>) -> Self {
        self.replies
            .write()
            .unwrap()
            .push((matcher.into(), CannedReply::Text(content.into())));
        self
    }

    /// Add a predefined embedding for a text.
    pub fn with_embedding(self, text: impl Into<String>, embedding: Vec<f32>) -> Self {
        self.embeddings
            .write()
            .unwrap()
            .insert(text.into(), embedding);
        self
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.read().unwrap().clone()
    }

    /// How many chat completions were requested.
    pub fn completion_calls(&self) -> usize {
        self.calls
            .read()
            .unwrap()
            .iter()
            .filter(|c| matches!(c, MockCall::Complete { .. }))
            .count()
    }

    /// Generate a deterministic embedding seeded from the text.
    fn deterministic_embedding(&self, text: &str) -> Vec<f32> {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());
        let hash = hasher.finalize();

        (0..self.embedding_dim)
            .map(|i| {
                let byte = hash[i % 32] as f32;
                (byte / 127.5) - 1.0
            })
            .collect()
    }

    fn reply_for(&self, prompt: &str) -> CannedReply {
        self.replies
            .read()
            .unwrap()
            .iter()
            .find(|(matcher, _)| prompt.contains(matcher.as_str()))
            .map(|(_, reply)| reply.clone())
            .unwrap_or_else(|| CannedReply::Text(String::new()))
    }
}

#[async_trait]
impl ChatModel for MockModel {
    async fn complete(&self, request: ChatRequest) -> Result<ChatCompletion> {
        let prompt = request
            .messages
            .first()
            .map(|m| m.content.clone())
            .unwrap_or_default();
        let tool = request
            .tool_choice
            .as_ref()
            .and_then(|c| c["function"]["name"].as_str())
            .map(String::from);

        self.calls.write().unwrap().push(MockCall::Complete {
            prompt: prompt.clone(),
            tool: tool.clone(),
        });

        let message = match self.reply_for(&prompt) {
            CannedReply::ToolPayload(payload) => AssistantMessage {
                content: None,
                tool_calls: vec![ToolCall {
                    id: "call_mock".to_string(),
                    function: FunctionCall {
                        name: tool.unwrap_or_else(|| "tool".to_string()),
                        arguments: payload.to_string(),
                    },
                }],
            },
            CannedReply::RawToolPayload(arguments) => AssistantMessage {
                content: None,
                tool_calls: vec![ToolCall {
                    id: "call_mock".to_string(),
                    function: FunctionCall {
                        name: tool.unwrap_or_else(|| "tool".to_string()),
                        arguments,
                    },
                }],
            },
            CannedReply::Text(content) => AssistantMessage {
                content: Some(content),
                tool_calls: vec![],
            },
        };

        Ok(ChatCompletion {
            choices: vec![Choice { message }],
            usage: None,
        })
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.calls.write().unwrap().push(MockCall::Embed {
            text: text.to_string(),
        });

        Ok(self
            .embeddings
            .read()
            .unwrap()
            .get(text)
            .cloned()
            .unwrap_or_else(|| self.deterministic_embedding(text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openai_client::Message;

    #[tokio::test]
    async fn test_matched_payload_becomes_tool_call() {
        let model = MockModel::new()
            .with_tool_payload("Paris", serde_json::json!({ "entities": ["Paris"] }));

        let completion = model
            .complete(ChatRequest::new("test").message(Message::user("Tell me about Paris")))
            .await
            .unwrap();

        let call = completion.first_tool_call().unwrap();
        let payload: serde_json::Value = serde_json::from_str(&call.function.arguments).unwrap();
        assert_eq!(payload["entities"][0], "Paris");
    }

    #[tokio::test]
    async fn test_unmatched_prompt_gets_no_tool_call() {
        let model = MockModel::new().with_tool_payload("Paris", serde_json::json!({}));

        let completion = model
            .complete(ChatRequest::new("test").message(Message::user("about Rome")))
            .await
            .unwrap();
        assert!(completion.first_tool_call().is_none());
    }

    #[tokio::test]
    async fn test_embed_deterministic() {
        let model = MockModel::new().with_embedding_dim(32);

        let a = model.embed("hello").await.unwrap();
        let b = model.embed("hello").await.unwrap();
        let c = model.embed("world").await.unwrap();

        assert_eq!(a.len(), 32);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[tokio::test]
    async fn test_calls_are_recorded() {
        let model = MockModel::new();
        let _ = model
            .complete(ChatRequest::new("test").message(Message::user("hi")))
            .await;
        let _ = model.embed("hi").await;

        let calls = model.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(model.completion_calls(), 1);
        assert!(matches!(calls[1], MockCall::Embed { .. }));
    }
}
