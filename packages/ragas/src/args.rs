//! Scorer inputs and the argument normalizer.
//!
//! Every scorer receives the same [`ScorerArgs`] shape; which fields are
//! required varies per metric. Normalization verifies required fields (before
//! any model call is made), flattens multi-part context into one string, and
//! splits model-invocation configuration from the scoring inputs.

use serde::{Deserialize, Serialize};

use crate::error::{RagasError, Result};

/// Model used when the caller does not override `model`.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-16k";

/// Temperature used when the caller does not override `temperature`.
pub const DEFAULT_TEMPERATURE: f32 = 0.0;

/// Inputs to a scorer invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerArgs {
    /// The question put to the RAG system
    pub input: Option<String>,

    /// The actual answer produced
    pub output: String,

    /// The ground-truth answer
    pub expected: Option<String>,

    /// Retrieved context, a single passage or an ordered list of passages
    pub context: Option<Context>,

    /// Model override
    pub model: Option<String>,

    /// Temperature override
    pub temperature: Option<f32>,

    /// Max completion tokens
    pub max_tokens: Option<u32>,
}

/// Retrieved context: one passage or several.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Context {
    /// A single passage
    Single(String),
    /// An ordered list of passages
    Many(Vec<String>),
}

impl Context {
    /// Flatten into a single string; passages are joined by newline, order
    /// preserved.
    pub fn flatten(&self) -> String {
        match self {
            Context::Single(s) => s.clone(),
            Context::Many(parts) => parts.join("\n"),
        }
    }
}

impl From<&str> for Context {
    fn from(s: &str) -> Self {
        Context::Single(s.to_string())
    }
}

impl From<String> for Context {
    fn from(s: String) -> Self {
        Context::Single(s)
    }
}

impl From<Vec<String>> for Context {
    fn from(parts: Vec<String>) -> Self {
        Context::Many(parts)
    }
}

/// Model-invocation configuration, split off from the scoring fields.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Model identifier
    pub model: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Max completion tokens, if capped
    pub max_tokens: Option<u32>,
}

/// A scorer input field that may be required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Input,
    Expected,
    Context,
}

impl Field {
    pub(crate) fn name(self) -> &'static str {
        match self {
            Field::Input => "input",
            Field::Expected => "expected",
            Field::Context => "context",
        }
    }
}

/// Normalized scorer inputs.
#[derive(Debug, Clone)]
pub(crate) struct Normalized {
    pub input: Option<String>,
    pub expected: Option<String>,
    pub context: Option<String>,
    pub config: ModelConfig,
}

/// Verify required fields, flatten context, and split off model configuration.
///
/// Fails with [`RagasError::MissingField`] naming the first missing field and
/// the scorer; this happens before any model call.
pub(crate) fn normalize(
    scorer: &'static str,
    args: &ScorerArgs,
    required: &[Field],
) -> Result<Normalized> {
    for &field in required {
        let present = match field {
            Field::Input => args.input.is_some(),
            Field::Expected => args.expected.is_some(),
            Field::Context => args.context.is_some(),
        };
        if !present {
            return Err(RagasError::MissingField {
                scorer,
                field: field.name(),
            });
        }
    }

    Ok(Normalized {
        input: args.input.clone(),
        expected: args.expected.clone(),
        context: args.context.as_ref().map(Context::flatten),
        config: ModelConfig {
            model: args.model.clone().unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature: args.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            max_tokens: args.max_tokens,
        },
    })
}
