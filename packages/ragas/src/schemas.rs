//! Structured payload types and their validation.
//!
//! One type per extraction task, with `schemars` derives so each doubles as
//! the JSON schema handed to the model. Every payload the model returns is
//! validated against that schema with the `jsonschema` crate before it is
//! deserialized; a non-conforming payload is a hard failure, never coerced.

use openai_client::{StructuredOutput, ToolDefinition};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{RagasError, Result};

/// Entities extracted from a single text.
///
/// Order-preserving; the prompt instructs the model to avoid repetition but
/// the schema does not enforce deduplication.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtractedEntities {
    /// The unique entities found in the text
    pub entities: Vec<String>,
}

/// Context sentences selected as strictly necessary to answer a question.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RelevantSentences {
    /// The selected sentences, verbatim from the context
    pub sentences: Vec<SentencePick>,
}

/// One selected sentence with the reasons it was selected.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SentencePick {
    /// A sentence copied verbatim from the context
    pub sentence: String,

    /// Why this sentence is required (explanatory only, not scored)
    pub reasons: Vec<String>,
}

/// An answer decomposed into statements, each classified against the context.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AttributionList {
    /// The atomic statements with their classifications
    pub statements: Vec<Attribution>,
}

/// One atomic statement with its binary attribution verdict.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Attribution {
    /// The statement, decomposed from the answer
    pub statement: String,

    /// 1 if attributable to the context, 0 if not
    #[schemars(range(min = 0, max = 1))]
    pub attributed: u8,

    /// Why the statement was classified this way
    pub reason: String,
}

/// Binary judgment of whether the context was useful for the answer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PrecisionVerdict {
    /// Why the verdict was given
    pub reason: String,

    /// 1 if the context was useful, 0 if not
    #[schemars(range(min = 0, max = 1))]
    pub verdict: u8,
}

pub(crate) fn entity_tool() -> ToolDefinition {
    ToolDefinition::new(
        "extract_entities",
        "Record the unique entities extracted from the text",
        ExtractedEntities::openai_schema(),
    )
}

pub(crate) fn sentence_tool() -> ToolDefinition {
    ToolDefinition::new(
        "select_sentences",
        "Record the context sentences required to answer the question",
        RelevantSentences::openai_schema(),
    )
}

pub(crate) fn attribution_tool() -> ToolDefinition {
    ToolDefinition::new(
        "classify_statements",
        "Record each answer statement with its attribution classification",
        AttributionList::openai_schema(),
    )
}

pub(crate) fn verdict_tool() -> ToolDefinition {
    ToolDefinition::new(
        "record_verdict",
        "Record whether the context was useful in producing the answer",
        PrecisionVerdict::openai_schema(),
    )
}

/// Validate a parsed payload against the schema of `T`, then deserialize it.
///
/// Wrong types, missing required fields, and extra properties all fail with
/// [`RagasError::SchemaViolation`] carrying the offending payload.
pub(crate) fn validate_payload<T: StructuredOutput>(
    schema_name: &str,
    payload: serde_json::Value,
) -> Result<T> {
    let schema = T::openai_schema();
    let validator = jsonschema::validator_for(&schema).map_err(|e| RagasError::SchemaViolation {
        schema: schema_name.to_string(),
        detail: format!("schema did not compile: {e}"),
        payload: serde_json::Value::Null,
    })?;

    let violation = match validator.validate(&payload) {
        Ok(()) => None,
        Err(err) => Some(err.to_string()),
    };
    if let Some(detail) = violation {
        return Err(RagasError::SchemaViolation {
            schema: schema_name.to_string(),
            detail,
            payload,
        });
    }

    serde_json::from_value(payload.clone()).map_err(|e| RagasError::SchemaViolation {
        schema: schema_name.to_string(),
        detail: e.to_string(),
        payload,
    })
}
