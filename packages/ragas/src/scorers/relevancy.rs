//! Context relevancy.

use std::sync::Arc;

use async_trait::async_trait;

use crate::args::{normalize, Field, ScorerArgs};
use crate::error::Result;
use crate::invoke::invoke_structured;
use crate::prompts::SENTENCE_SELECTION;
use crate::schemas::{sentence_tool, validate_payload, RelevantSentences};
use crate::score::Score;
use crate::traits::{ChatModel, Scorer};

const NAME: &str = "ContextRelevancy";

/// What fraction of the retrieved context is actually needed to answer the
/// question.
///
/// Requires `input` and `context`. The model selects the context sentences
/// strictly necessary for the answer; the score is the character length of
/// the selected sentences over the character length of the full context.
/// An empty selection scores 0; an empty context scores 0 without a model
/// call (there is nothing to select from).
pub struct ContextRelevancy {
    model: Arc<dyn ChatModel>,
}

impl ContextRelevancy {
    /// Create the scorer.
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }
}

#[async_trait]
impl Scorer for ContextRelevancy {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn score(&self, args: &ScorerArgs) -> Result<Score> {
        let normalized = normalize(NAME, args, &[Field::Input, Field::Context])?;
        let input = normalized.input.as_deref().unwrap_or_default();
        let context = normalized.context.as_deref().unwrap_or_default();

        let context_len = context.chars().count();
        if context_len == 0 {
            return Ok(Score::new(NAME, 0.0)
                .with_metadata("relevant_sentences", serde_json::json!([])));
        }

        let prompt = SENTENCE_SELECTION.render(&[("question", input), ("context", context)]);
        let payload = invoke_structured(
            self.model.as_ref(),
            NAME,
            &normalized.config,
            prompt,
            sentence_tool(),
        )
        .await?;
        let selection: RelevantSentences = validate_payload("RelevantSentences", payload)?;

        let selected_len: usize = selection
            .sentences
            .iter()
            .map(|pick| pick.sentence.chars().count())
            .sum();
        let score = if selection.sentences.is_empty() {
            0.0
        } else {
            selected_len as f64 / context_len as f64
        };

        Ok(Score::new(NAME, score)
            .with_metadata("relevant_sentences", serde_json::json!(selection.sentences)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RagasError;
    use crate::testing::MockModel;

    #[tokio::test]
    async fn test_half_of_context_selected_scores_half() {
        // Context is 40 chars; the selected sentence is the first 20.
        let context = "aaaaaaaaaaaaaaaaaaaabbbbbbbbbbbbbbbbbbbb".to_string();
        let selected = "aaaaaaaaaaaaaaaaaaaa";

        let model = MockModel::new().with_tool_payload(
            "",
            serde_json::json!({
                "sentences": [{ "sentence": selected, "reasons": ["needed"] }]
            }),
        );
        let scorer = ContextRelevancy::new(Arc::new(model));

        let score = scorer
            .score(&ScorerArgs {
                input: Some("what are the a's?".to_string()),
                context: Some(context.into()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(score.score, 0.5);
        assert_eq!(score.metadata["relevant_sentences"][0]["sentence"], selected);
    }

    #[tokio::test]
    async fn test_empty_selection_scores_zero() {
        let model =
            MockModel::new().with_tool_payload("", serde_json::json!({ "sentences": [] }));
        let scorer = ContextRelevancy::new(Arc::new(model));

        let score = scorer
            .score(&ScorerArgs {
                input: Some("anything?".to_string()),
                context: Some("The Pacific Ocean is large.".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(score.score, 0.0);
    }

    #[tokio::test]
    async fn test_empty_context_scores_zero_without_model_call() {
        let model = Arc::new(MockModel::new());
        let scorer = ContextRelevancy::new(model.clone());

        let score = scorer
            .score(&ScorerArgs {
                input: Some("anything?".to_string()),
                context: Some("".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(score.score, 0.0);
        assert_eq!(model.completion_calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_input_fails_first() {
        let model = Arc::new(MockModel::new());
        let scorer = ContextRelevancy::new(model.clone());

        let err = scorer
            .score(&ScorerArgs {
                context: Some("some context".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();

        match err {
            RagasError::MissingField { scorer, field } => {
                assert_eq!(scorer, NAME);
                assert_eq!(field, "input");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(model.calls().is_empty());
    }

    #[tokio::test]
    async fn test_no_tool_call_fails() {
        let model = MockModel::new().with_text_reply("", "The relevant sentence is...");
        let scorer = ContextRelevancy::new(Arc::new(model));

        let err = scorer
            .score(&ScorerArgs {
                input: Some("q?".to_string()),
                context: Some("some context".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, RagasError::NoToolCall { .. }));
    }

    #[tokio::test]
    async fn test_multi_part_context_is_flattened_for_length() {
        // Two 10-char passages joined by a newline: 21 chars total.
        let model = MockModel::new().with_tool_payload(
            "",
            serde_json::json!({
                "sentences": [{ "sentence": "aaaaaaaaaa", "reasons": [] }]
            }),
        );
        let scorer = ContextRelevancy::new(Arc::new(model));

        let score = scorer
            .score(&ScorerArgs {
                input: Some("q?".to_string()),
                context: Some(vec!["aaaaaaaaaa".to_string(), "bbbbbbbbbb".to_string()].into()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!((score.score - 10.0 / 21.0).abs() < 1e-9);
    }
}
