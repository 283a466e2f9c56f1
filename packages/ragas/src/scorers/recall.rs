//! Context recall.

use std::sync::Arc;

use async_trait::async_trait;

use crate::args::{normalize, Field, ScorerArgs};
use crate::error::Result;
use crate::invoke::invoke_structured;
use crate::prompts::STATEMENT_ATTRIBUTION;
use crate::schemas::{attribution_tool, validate_payload, AttributionList};
use crate::score::Score;
use crate::traits::{ChatModel, Scorer};

const NAME: &str = "ContextRecall";

/// How much of the ground-truth answer is attributable to the retrieved
/// context.
///
/// Requires `input`, `expected` (used as the answer in the prompt), and
/// `context`. The model decomposes the answer into atomic statements and
/// classifies each as attributable (1) or not (0); the score is the mean of
/// the classifications. An empty decomposition scores 0.
pub struct ContextRecall {
    model: Arc<dyn ChatModel>,
}

impl ContextRecall {
    /// Create the scorer.
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }
}

#[async_trait]
impl Scorer for ContextRecall {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn score(&self, args: &ScorerArgs) -> Result<Score> {
        let normalized =
            normalize(NAME, args, &[Field::Input, Field::Expected, Field::Context])?;
        let input = normalized.input.as_deref().unwrap_or_default();
        let expected = normalized.expected.as_deref().unwrap_or_default();
        let context = normalized.context.as_deref().unwrap_or_default();

        let prompt = STATEMENT_ATTRIBUTION.render(&[
            ("question", input),
            ("context", context),
            ("answer", expected),
        ]);
        let payload = invoke_structured(
            self.model.as_ref(),
            NAME,
            &normalized.config,
            prompt,
            attribution_tool(),
        )
        .await?;
        let list: AttributionList = validate_payload("AttributionList", payload)?;

        let score = if list.statements.is_empty() {
            0.0
        } else {
            let attributed: u32 = list.statements.iter().map(|s| s.attributed as u32).sum();
            attributed as f64 / list.statements.len() as f64
        };

        Ok(Score::new(NAME, score)
            .with_metadata("statements", serde_json::json!(list.statements)))
    }
}
