//! Tool definitions and tool calls for OpenAI function calling.
//!
//! A [`ToolDefinition`] describes a callable to the model: a name, a
//! description, and a JSON schema for its arguments. The model answers with
//! [`ToolCall`]s whose `arguments` field is a JSON string that should match
//! that schema (the API does not guarantee it; callers must validate).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Tool definition sent to the model.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    /// The name of the tool.
    pub name: String,

    /// A description of what the tool does.
    pub description: String,

    /// JSON schema for the tool's parameters.
    pub parameters: serde_json::Value,
}

impl ToolDefinition {
    /// Create a tool definition.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }

    /// Convert to the OpenAI API wire format.
    pub fn to_openai_format(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "function",
            "function": {
                "name": self.name,
                "description": self.description,
                "parameters": self.parameters
            }
        })
    }
}

/// A tool call returned by the model.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCall {
    /// The ID of this tool call.
    #[serde(default)]
    pub id: String,

    /// The function invocation.
    pub function: FunctionCall,
}

/// The function part of a tool call.
#[derive(Debug, Clone, Deserialize)]
pub struct FunctionCall {
    /// The name of the tool the model called.
    pub name: String,

    /// The arguments as a JSON string.
    pub arguments: String,
}

impl ToolCall {
    /// Parse the arguments into a typed struct.
    pub fn parse_args<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.function.arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_definition_openai_format() {
        let def = ToolDefinition::new(
            "extract_entities",
            "Extract entities from text",
            serde_json::json!({"type": "object", "properties": {}}),
        );
        let wire = def.to_openai_format();

        assert_eq!(wire["type"], "function");
        assert_eq!(wire["function"]["name"], "extract_entities");
        assert_eq!(wire["function"]["description"], "Extract entities from text");
    }

    #[test]
    fn test_tool_call_parse_args() {
        #[derive(Deserialize)]
        struct Args {
            message: String,
        }

        let call: ToolCall = serde_json::from_value(serde_json::json!({
            "id": "call_123",
            "function": { "name": "echo", "arguments": "{\"message\": \"hello\"}" }
        }))
        .unwrap();

        assert_eq!(call.id, "call_123");
        let args: Args = call.parse_args().unwrap();
        assert_eq!(args.message, "hello");
    }

    #[test]
    fn test_tool_call_bad_arguments() {
        let call: ToolCall = serde_json::from_value(serde_json::json!({
            "function": { "name": "echo", "arguments": "not json" }
        }))
        .unwrap();

        let parsed: Result<serde_json::Value, _> = call.parse_args();
        assert!(parsed.is_err());
    }
}
