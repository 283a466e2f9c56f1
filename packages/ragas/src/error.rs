//! Typed errors for the scoring library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling. None of these are retried
//! internally: a scorer invocation either yields a complete [`crate::Score`]
//! or fails with one of the variants below.

use thiserror::Error;

/// Errors that can occur during a scorer invocation.
#[derive(Debug, Error)]
pub enum RagasError {
    /// Caller omitted a required input field
    #[error("{scorer} requires a {field} value")]
    MissingField {
        scorer: &'static str,
        field: &'static str,
    },

    /// Model did not honor the forced tool-call contract
    #[error("{scorer}: model response contains no tool call")]
    NoToolCall { scorer: &'static str },

    /// Tool-call arguments were not valid JSON
    #[error("{scorer}: tool arguments are not valid JSON: {source}")]
    MalformedPayload {
        scorer: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Valid JSON, but the wrong shape for the declared schema
    #[error("payload does not match schema {schema}: {detail}")]
    SchemaViolation {
        schema: String,
        detail: String,
        payload: serde_json::Value,
    },

    /// Transport-level failure from the completion client
    #[error("client error: {0}")]
    Client(#[from] openai_client::OpenAIError),
}

/// Result type alias for scoring operations.
pub type Result<T> = std::result::Result<T, RagasError>;
