//! Forced tool-call usage example.

use openai_client::{ChatRequest, Message, OpenAIClient, StructuredOutput, ToolDefinition};
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
struct Entities {
    entities: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = OpenAIClient::from_env()?;

    let tool = ToolDefinition::new(
        "extract_entities",
        "Record the entities found in the text",
        Entities::openai_schema(),
    );

    let completion = client
        .chat_completion(
            ChatRequest::new("gpt-4o")
                .message(Message::user(
                    "Extract the entities: The Eiffel Tower is in Paris, France.",
                ))
                .temperature(0.0)
                .forced_tool(&tool),
        )
        .await?;

    let call = completion
        .first_tool_call()
        .ok_or("model returned no tool call")?;
    let entities: Entities = call.parse_args()?;
    println!("Entities: {:?}", entities.entities);

    let embedding = client.create_embedding("Eiffel Tower").await?;
    println!("Embedding dimensions: {}", embedding.len());

    Ok(())
}
