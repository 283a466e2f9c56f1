//! Scoring result type shared by all metrics.

use serde::Serialize;

/// The result of one scorer invocation.
///
/// Constructed once per invocation and never mutated afterwards. `score` is
/// in `[0, 1]` for every scorer in this crate; `metadata` carries the
/// intermediate structured output the score was reduced from (entity lists,
/// selected sentences, attribution verdicts).
#[derive(Debug, Clone, Serialize)]
pub struct Score {
    /// Metric name (e.g., "ContextEntityRecall")
    pub name: String,

    /// Numeric score
    pub score: f64,

    /// Explanatory metadata
    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl Score {
    /// Create a score with empty metadata.
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
            metadata: serde_json::Map::new(),
        }
    }

    /// Attach a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_builder() {
        let score = Score::new("ContextPrecision", 1.0)
            .with_metadata("reason", serde_json::json!("context was used verbatim"));

        assert_eq!(score.name, "ContextPrecision");
        assert_eq!(score.score, 1.0);
        assert_eq!(score.metadata["reason"], "context was used verbatim");
    }

    #[test]
    fn test_empty_metadata_not_serialized() {
        let json = serde_json::to_value(Score::new("NumericDiff", 0.5)).unwrap();
        assert!(json.get("metadata").is_none());
    }
}
