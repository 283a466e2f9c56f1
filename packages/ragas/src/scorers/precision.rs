//! Context precision.

use std::sync::Arc;

use async_trait::async_trait;

use crate::args::{normalize, Field, ScorerArgs};
use crate::error::Result;
use crate::invoke::invoke_structured;
use crate::prompts::USEFULNESS_VERDICT;
use crate::schemas::{validate_payload, verdict_tool, PrecisionVerdict};
use crate::score::Score;
use crate::traits::{ChatModel, Scorer};

const NAME: &str = "ContextPrecision";

/// Whether the retrieved context was useful in arriving at the answer.
///
/// Requires `input`, `expected`, and `context`. A single binary judgment per
/// invocation: the score is the verdict itself, 0 or 1 — no averaging, even
/// for multi-sentence answers.
pub struct ContextPrecision {
    model: Arc<dyn ChatModel>,
}

impl ContextPrecision {
    /// Create the scorer.
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }
}

#[async_trait]
impl Scorer for ContextPrecision {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn score(&self, args: &ScorerArgs) -> Result<Score> {
        let normalized =
            normalize(NAME, args, &[Field::Input, Field::Expected, Field::Context])?;
        let input = normalized.input.as_deref().unwrap_or_default();
        let expected = normalized.expected.as_deref().unwrap_or_default();
        let context = normalized.context.as_deref().unwrap_or_default();

        let prompt = USEFULNESS_VERDICT.render(&[
            ("question", input),
            ("context", context),
            ("answer", expected),
        ]);
        let payload = invoke_structured(
            self.model.as_ref(),
            NAME,
            &normalized.config,
            prompt,
            verdict_tool(),
        )
        .await?;
        let verdict: PrecisionVerdict = validate_payload("PrecisionVerdict", payload)?;

        Ok(Score::new(NAME, verdict.verdict as f64)
            .with_metadata("reason", serde_json::json!(verdict.reason))
            .with_metadata("verdict", serde_json::json!(verdict.verdict)))
    }
}
