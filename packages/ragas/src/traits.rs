//! Trait seams between the scorers and their collaborators.

use async_trait::async_trait;
use openai_client::{ChatCompletion, ChatRequest, OpenAIClient};

use crate::error::Result;
use crate::score::Score;
use crate::ScorerArgs;

/// The chat-completion and embedding capability the scorers are built on.
///
/// Implemented for [`OpenAIClient`]; `testing::MockModel` provides a
/// deterministic in-process implementation.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Run a chat completion, tool calls included.
    async fn complete(&self, request: ChatRequest) -> Result<ChatCompletion>;

    /// Embed a text.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;
}

#[async_trait]
impl ChatModel for OpenAIClient {
    async fn complete(&self, request: ChatRequest) -> Result<ChatCompletion> {
        Ok(self.chat_completion(request).await?)
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(self.create_embedding(text).await?)
    }
}

/// A metric over RAG inputs.
///
/// A scorer invocation either yields a complete [`Score`] or fails entirely;
/// there is no partial or degraded scoring mode.
#[async_trait]
pub trait Scorer: Send + Sync {
    /// The metric name, used in results and error messages.
    fn name(&self) -> &'static str;

    /// Run the metric.
    async fn score(&self, args: &ScorerArgs) -> Result<Score>;
}
