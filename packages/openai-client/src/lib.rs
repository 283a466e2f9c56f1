//! Minimal OpenAI REST API client.
//!
//! Supports chat completions (including tool definitions with a forced
//! `tool_choice`) and embeddings. No domain-specific logic.
//!
//! # Example
//!
//! ```rust,ignore
//! use openai_client::{ChatRequest, Message, OpenAIClient, ToolDefinition};
//!
//! let client = OpenAIClient::from_env()?;
//!
//! let tool = ToolDefinition::new("extract", "Extract data", schema);
//! let completion = client
//!     .chat_completion(
//!         ChatRequest::new("gpt-4o")
//!             .message(Message::user("Extract the entities from ..."))
//!             .forced_tool(&tool),
//!     )
//!     .await?;
//!
//! let call = completion.first_tool_call().expect("forced call");
//! ```

pub mod error;
pub mod schema;
pub mod tool;
pub mod types;

pub use error::{OpenAIError, Result};
pub use schema::StructuredOutput;
pub use tool::{FunctionCall, ToolCall, ToolDefinition};
pub use types::*;

use reqwest::Client;
use tracing::{debug, warn};

/// OpenAI API client.
#[derive(Clone)]
pub struct OpenAIClient {
    http_client: Client,
    api_key: String,
    base_url: String,
    embedding_model: String,
}

impl OpenAIClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".to_string(),
            embedding_model: "text-embedding-3-small".to_string(),
        }
    }

    /// Create from environment variable `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| OpenAIError::Config("OPENAI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for Azure, proxies, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the embedding model (default: text-embedding-3-small).
    pub fn with_embedding_model(mut self, model: impl Into<String>) -> Self {
        self.embedding_model = model.into();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Chat completion.
    ///
    /// Returns the full completion, tool calls included; callers that forced a
    /// tool inspect [`ChatCompletion::first_tool_call`].
    pub async fn chat_completion(&self, request: ChatRequest) -> Result<ChatCompletion> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "OpenAI request failed");
                OpenAIError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "OpenAI API error");
            return Err(OpenAIError::Api(format!("OpenAI API error: {}", error_text)));
        }

        let completion: ChatCompletion = response
            .json()
            .await
            .map_err(|e| OpenAIError::Parse(e.to_string()))?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            tool_call = completion.first_tool_call().is_some(),
            "OpenAI chat completion"
        );

        Ok(completion)
    }

    /// Create an embedding for a text.
    pub async fn create_embedding(&self, text: &str) -> Result<Vec<f32>> {
        let request = types::EmbeddingRequest {
            model: self.embedding_model.clone(),
            input: text.to_string(),
        };

        let response = self
            .http_client
            .post(format!("{}/embeddings", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Embedding request failed");
                OpenAIError::Network(e.to_string())
            })?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(error = %error_text, "OpenAI embedding error");
            return Err(OpenAIError::Api(format!(
                "OpenAI embedding error: {}",
                error_text
            )));
        }

        let embed_response: types::EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| OpenAIError::Parse(e.to_string()))?;

        embed_response
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| OpenAIError::Api("No embedding from OpenAI".into()))
    }
}
