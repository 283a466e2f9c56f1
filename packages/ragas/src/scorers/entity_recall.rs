//! Context entity recall.

use std::sync::Arc;

use async_trait::async_trait;

use crate::args::{normalize, Field, ScorerArgs};
use crate::error::Result;
use crate::invoke::invoke_structured;
use crate::pairwise::{EmbeddingListContains, ListComparator};
use crate::prompts::ENTITY_EXTRACTION;
use crate::schemas::{entity_tool, validate_payload, ExtractedEntities};
use crate::score::Score;
use crate::traits::{ChatModel, Scorer};

const NAME: &str = "ContextEntityRecall";

/// How many of the ground-truth answer's entities can be found in the
/// retrieved context.
///
/// Requires `expected` and `context`. Runs two concurrent entity extractions
/// (one over each text), then delegates the list comparison to a pluggable
/// [`ListComparator`] with extra context entities allowed: only missing
/// expected entities lower the score.
pub struct ContextEntityRecall {
    model: Arc<dyn ChatModel>,
    comparator: Arc<dyn ListComparator>,
}

impl ContextEntityRecall {
    /// Create the scorer with the default embedding-similarity comparator.
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        let comparator = Arc::new(EmbeddingListContains::new(model.clone()));
        Self { model, comparator }
    }

    /// Swap in a different list comparator.
    pub fn with_comparator(mut self, comparator: Arc<dyn ListComparator>) -> Self {
        self.comparator = comparator;
        self
    }
}

#[async_trait]
impl Scorer for ContextEntityRecall {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn score(&self, args: &ScorerArgs) -> Result<Score> {
        let normalized = normalize(NAME, args, &[Field::Expected, Field::Context])?;
        let expected = normalized.expected.as_deref().unwrap_or_default();
        let context = normalized.context.as_deref().unwrap_or_default();

        let expected_prompt = ENTITY_EXTRACTION.render(&[("text", expected)]);
        let context_prompt = ENTITY_EXTRACTION.render(&[("text", context)]);

        // Two independent extractions; either failing fails the whole scorer.
        let (expected_payload, context_payload) = tokio::try_join!(
            invoke_structured(
                self.model.as_ref(),
                NAME,
                &normalized.config,
                expected_prompt,
                entity_tool(),
            ),
            invoke_structured(
                self.model.as_ref(),
                NAME,
                &normalized.config,
                context_prompt,
                entity_tool(),
            ),
        )?;

        let expected_entities: ExtractedEntities =
            validate_payload("ExtractedEntities", expected_payload)?;
        let context_entities: ExtractedEntities =
            validate_payload("ExtractedEntities", context_payload)?;

        let score = self
            .comparator
            .compare(&expected_entities.entities, &context_entities.entities, true)
            .await?;

        Ok(Score::new(NAME, score)
            .with_metadata(
                "expected_entities",
                serde_json::json!(expected_entities.entities),
            )
            .with_metadata(
                "context_entities",
                serde_json::json!(context_entities.entities),
            ))
    }
}
