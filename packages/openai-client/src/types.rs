//! OpenAI API request and response types.

use serde::{Deserialize, Serialize};

use crate::tool::ToolDefinition;

// =============================================================================
// Chat Completion
// =============================================================================

/// Chat completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model to use (e.g., "gpt-4o", "gpt-3.5-turbo-16k")
    pub model: String,

    /// Conversation messages
    pub messages: Vec<Message>,

    /// Sampling temperature (0.0 to 2.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Maximum tokens in completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Tool definitions, in OpenAI wire format
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<serde_json::Value>,

    /// Tool choice strategy ("auto", or a forced {"type": "function", ...})
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<serde_json::Value>,
}

impl ChatRequest {
    /// Create a new chat request with the given model.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            temperature: None,
            max_tokens: None,
            tools: Vec::new(),
            tool_choice: None,
        }
    }

    /// Add a message to the conversation.
    pub fn message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Set temperature.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set max tokens.
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Attach a single tool and force the model to call it.
    ///
    /// The model may not reply with free text; its only legal response is an
    /// invocation of this tool.
    pub fn forced_tool(mut self, tool: &ToolDefinition) -> Self {
        self.tools = vec![tool.to_openai_format()];
        self.tool_choice = Some(serde_json::json!({
            "type": "function",
            "function": { "name": tool.name }
        }));
        self
    }
}

/// Chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Role: "system", "user", "assistant"
    pub role: String,

    /// Message content
    pub content: String,
}

impl Message {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletion {
    /// Response choices (first is the one that matters)
    pub choices: Vec<Choice>,

    /// Token usage statistics
    pub usage: Option<Usage>,
}

impl ChatCompletion {
    /// The first tool call of the first choice, if the model made one.
    pub fn first_tool_call(&self) -> Option<&crate::tool::ToolCall> {
        self.choices.first()?.message.tool_calls.first()
    }
}

/// A single completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// The assistant message for this choice
    pub message: AssistantMessage,
}

/// Assistant message, carrying free text and/or tool calls.
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantMessage {
    /// Free-text content (null when the model responded with tool calls)
    pub content: Option<String>,

    /// Tool calls made by the model
    #[serde(default)]
    pub tool_calls: Vec<crate::tool::ToolCall>,
}

/// Token usage statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    /// Tokens in the prompt
    pub prompt_tokens: u32,

    /// Tokens in the completion
    pub completion_tokens: u32,

    /// Total tokens used
    pub total_tokens: u32,
}

// =============================================================================
// Embeddings
// =============================================================================

/// Embedding request.
#[derive(Debug, Serialize)]
pub(crate) struct EmbeddingRequest {
    /// Model to use (e.g., "text-embedding-3-small")
    pub model: String,

    /// Text to embed
    pub input: String,
}

/// Embedding response.
#[derive(Debug, Deserialize)]
pub(crate) struct EmbeddingResponse {
    pub data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EmbeddingData {
    pub embedding: Vec<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let sys = Message::system("You are helpful");
        assert_eq!(sys.role, "system");

        let user = Message::user("Hello");
        assert_eq!(user.role, "user");
    }

    #[test]
    fn test_chat_request_builder() {
        let req = ChatRequest::new("gpt-4o")
            .message(Message::user("Hello"))
            .temperature(0.7)
            .max_tokens(100);

        assert_eq!(req.model, "gpt-4o");
        assert_eq!(req.messages.len(), 1);
        assert_eq!(req.temperature, Some(0.7));
        assert_eq!(req.max_tokens, Some(100));
    }

    #[test]
    fn test_forced_tool_sets_choice() {
        let tool = ToolDefinition {
            name: "extract".to_string(),
            description: "Extract things".to_string(),
            parameters: serde_json::json!({"type": "object"}),
        };

        let req = ChatRequest::new("gpt-4o")
            .message(Message::user("go"))
            .forced_tool(&tool);

        assert_eq!(req.tools.len(), 1);
        assert_eq!(req.tools[0]["function"]["name"], "extract");
        let choice = req.tool_choice.as_ref().unwrap();
        assert_eq!(choice["function"]["name"], "extract");
    }

    #[test]
    fn test_empty_tools_not_serialized() {
        let req = ChatRequest::new("gpt-4o").message(Message::user("hi"));
        let json = serde_json::to_value(&req).unwrap();

        assert!(json.get("tools").is_none());
        assert!(json.get("tool_choice").is_none());
    }

    #[test]
    fn test_completion_with_tool_calls_deserializes() {
        let raw = serde_json::json!({
            "choices": [{
                "message": {
                    "content": null,
                    "tool_calls": [{
                        "id": "call_1",
                        "function": { "name": "extract", "arguments": "{\"a\": 1}" }
                    }]
                }
            }],
            "usage": { "prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15 }
        });

        let completion: ChatCompletion = serde_json::from_value(raw).unwrap();
        let call = completion.first_tool_call().unwrap();
        assert_eq!(call.function.name, "extract");
        assert_eq!(call.function.arguments, "{\"a\": 1}");
    }

    #[test]
    fn test_completion_without_tool_calls() {
        let raw = serde_json::json!({
            "choices": [{ "message": { "content": "free text" } }],
            "usage": null
        });

        let completion: ChatCompletion = serde_json::from_value(raw).unwrap();
        assert!(completion.first_tool_call().is_none());
        assert_eq!(
            completion.choices[0].message.content.as_deref(),
            Some("free text")
        );
    }
}
