//! Structured completion invoker.
//!
//! Wraps one chat-completion call: the rendered prompt as the sole user
//! message, exactly one tool, and a forced `tool_choice` so the model cannot
//! reply with free text. The returned value is the parsed (but not yet
//! schema-validated) argument payload of the first tool call.

use openai_client::{ChatRequest, Message, ToolDefinition};
use tracing::debug;

use crate::args::ModelConfig;
use crate::error::{RagasError, Result};
use crate::traits::ChatModel;

/// Invoke the model with a forced tool call and parse the argument payload.
///
/// Fails with [`RagasError::NoToolCall`] when the model declined the forced
/// call, and [`RagasError::MalformedPayload`] when the arguments are not
/// valid JSON. Neither is retried.
pub(crate) async fn invoke_structured(
    model: &dyn ChatModel,
    scorer: &'static str,
    config: &ModelConfig,
    prompt: String,
    tool: ToolDefinition,
) -> Result<serde_json::Value> {
    let mut request = ChatRequest::new(&config.model)
        .message(Message::user(prompt))
        .temperature(config.temperature)
        .forced_tool(&tool);
    if let Some(max_tokens) = config.max_tokens {
        request = request.max_tokens(max_tokens);
    }

    let completion = model.complete(request).await?;

    let call = completion
        .first_tool_call()
        .ok_or(RagasError::NoToolCall { scorer })?;

    debug!(scorer, tool = %tool.name, "forced tool call returned");

    serde_json::from_str(&call.function.arguments)
        .map_err(|source| RagasError::MalformedPayload { scorer, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{DEFAULT_MODEL, DEFAULT_TEMPERATURE};
    use crate::schemas::entity_tool;
    use crate::testing::{MockCall, MockModel};

    fn config() -> ModelConfig {
        ModelConfig {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: None,
        }
    }

    #[tokio::test]
    async fn test_invoke_parses_tool_arguments() {
        let model =
            MockModel::new().with_tool_payload("", serde_json::json!({ "entities": ["Paris"] }));

        let payload = invoke_structured(&model, "Test", &config(), "prompt".into(), entity_tool())
            .await
            .unwrap();
        assert_eq!(payload["entities"][0], "Paris");

        // The forced tool rode along on the request.
        match &model.calls()[0] {
            MockCall::Complete { tool, .. } => {
                assert_eq!(tool.as_deref(), Some("extract_entities"));
            }
            other => panic!("unexpected call: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_no_tool_call_is_fatal() {
        let model = MockModel::new().with_text_reply("", "I'd rather chat.");

        let err = invoke_structured(&model, "Test", &config(), "prompt".into(), entity_tool())
            .await
            .unwrap_err();
        assert!(matches!(err, RagasError::NoToolCall { scorer: "Test" }));
    }

    #[tokio::test]
    async fn test_malformed_arguments_are_fatal() {
        let model = MockModel::new().with_raw_tool_payload("", "{not json");

        let err = invoke_structured(&model, "Test", &config(), "prompt".into(), entity_tool())
            .await
            .unwrap_err();
        assert!(matches!(err, RagasError::MalformedPayload { .. }));
    }
}
