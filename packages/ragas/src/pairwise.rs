//! Pairwise list-comparison scorers.
//!
//! [`ContextEntityRecall`](crate::ContextEntityRecall) reduces its two entity
//! lists through a [`ListComparator`]: an injected capability, swappable
//! without touching the scorer's logic. The default is embedding-similarity
//! based; [`ExactListContains`] is a deterministic alternative.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;
use crate::traits::ChatModel;

/// Compares an expected list against an output list, producing `[0, 1]`.
///
/// With `allow_extra`, output items without a counterpart in `expected` do
/// not penalize the score; only missing expected items do.
#[async_trait]
pub trait ListComparator: Send + Sync {
    async fn compare(&self, expected: &[String], output: &[String], allow_extra: bool)
        -> Result<f64>;
}

/// Exact string containment: the fraction of expected items present verbatim
/// in the output.
#[derive(Debug, Default)]
pub struct ExactListContains;

#[async_trait]
impl ListComparator for ExactListContains {
    async fn compare(
        &self,
        expected: &[String],
        output: &[String],
        allow_extra: bool,
    ) -> Result<f64> {
        if expected.is_empty() {
            return Ok(if output.is_empty() || allow_extra { 1.0 } else { 0.0 });
        }

        let matched = expected
            .iter()
            .filter(|item| output.iter().any(|o| o == *item))
            .count();
        let denominator = if allow_extra {
            expected.len()
        } else {
            expected.len().max(output.len())
        };

        Ok(matched as f64 / denominator as f64)
    }
}

/// Embedding-similarity list containment.
///
/// Embeds every item on both sides, computes cosine similarities, and greedily
/// pairs each expected item with its best unused output item. Avoids brittle
/// exact-string matching: "Eiffel Tower" and "the Eiffel Tower" count as the
/// same entity to the extent their embeddings agree.
pub struct EmbeddingListContains {
    model: Arc<dyn ChatModel>,
}

impl EmbeddingListContains {
    /// Create a comparator that embeds through the given model.
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }

    async fn embed_all(&self, items: &[String]) -> Result<Vec<Vec<f32>>> {
        let mut embeddings = Vec::with_capacity(items.len());
        for item in items {
            embeddings.push(self.model.embed(item).await?);
        }
        Ok(embeddings)
    }
}

#[async_trait]
impl ListComparator for EmbeddingListContains {
    async fn compare(
        &self,
        expected: &[String],
        output: &[String],
        allow_extra: bool,
    ) -> Result<f64> {
        if expected.is_empty() {
            return Ok(if output.is_empty() || allow_extra { 1.0 } else { 0.0 });
        }
        if output.is_empty() {
            return Ok(0.0);
        }

        let expected_embeddings = self.embed_all(expected).await?;
        let output_embeddings = self.embed_all(output).await?;

        // All pairwise similarities, best pairs first.
        let mut pairs: Vec<(f64, usize, usize)> = Vec::new();
        for (i, e) in expected_embeddings.iter().enumerate() {
            for (j, o) in output_embeddings.iter().enumerate() {
                pairs.push((cosine_similarity(e, o), i, j));
            }
        }
        pairs.sort_by(|a, b| b.0.total_cmp(&a.0));

        // Greedy one-to-one matching.
        let mut used_expected = vec![false; expected.len()];
        let mut used_output = vec![false; output.len()];
        let mut total = 0.0;
        for (similarity, i, j) in pairs {
            if used_expected[i] || used_output[j] {
                continue;
            }
            used_expected[i] = true;
            used_output[j] = true;
            total += similarity.max(0.0);
        }

        let denominator = if allow_extra {
            expected.len()
        } else {
            expected.len().max(output.len())
        };
        let score = (total / denominator as f64).clamp(0.0, 1.0);

        debug!(
            expected = expected.len(),
            output = output.len(),
            allow_extra,
            score,
            "embedding list comparison"
        );

        Ok(score)
    }
}

/// Cosine similarity between two vectors, clamped to `[-1, 1]`.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| (*x as f64) * (*y as f64)).sum();
    let norm_a: f64 = a.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();

    if norm_a < 1e-9 || norm_b < 1e-9 {
        return 0.0;
    }

    (dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockModel;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_exact_contains_fraction() {
        let comparator = ExactListContains;
        let score = comparator
            .compare(
                &strings(&["Paris", "Eiffel Tower"]),
                &strings(&["Paris", "France"]),
                true,
            )
            .await
            .unwrap();
        assert_eq!(score, 0.5);
    }

    #[tokio::test]
    async fn test_exact_contains_extra_output_penalizes_only_without_allow_extra() {
        let comparator = ExactListContains;
        let expected = strings(&["Paris"]);
        let output = strings(&["Paris", "France", "1889"]);

        let lenient = comparator.compare(&expected, &output, true).await.unwrap();
        assert_eq!(lenient, 1.0);

        let strict = comparator.compare(&expected, &output, false).await.unwrap();
        assert!((strict - 1.0 / 3.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_exact_contains_empty_expected() {
        let comparator = ExactListContains;
        let score = comparator
            .compare(&[], &strings(&["anything"]), true)
            .await
            .unwrap();
        assert_eq!(score, 1.0);
    }

    #[tokio::test]
    async fn test_cosine_similarity_identity_and_orthogonal() {
        assert!((cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-9);
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
    }

    #[tokio::test]
    async fn test_embedding_contains_identical_lists_score_one() {
        let model = Arc::new(MockModel::new());
        let comparator = EmbeddingListContains::new(model);

        let items = strings(&["Paris", "Eiffel Tower"]);
        let score = comparator.compare(&items, &items, true).await.unwrap();
        assert!((score - 1.0).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_embedding_contains_disjoint_orthogonal_embeddings_score_zero() {
        let model = Arc::new(
            MockModel::new()
                .with_embedding("red", vec![1.0, 0.0])
                .with_embedding("blue", vec![0.0, 1.0]),
        );
        let comparator = EmbeddingListContains::new(model);

        let score = comparator
            .compare(&strings(&["red"]), &strings(&["blue"]), true)
            .await
            .unwrap();
        assert_eq!(score, 0.0);
    }

    #[tokio::test]
    async fn test_embedding_contains_empty_output_scores_zero() {
        let model = Arc::new(MockModel::new());
        let comparator = EmbeddingListContains::new(model);

        let score = comparator
            .compare(&strings(&["Paris"]), &[], true)
            .await
            .unwrap();
        assert_eq!(score, 0.0);
    }
}
