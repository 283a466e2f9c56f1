//! LLM-judged RAGAS metrics for retrieval-augmented generation.
//!
//! Four scorers assess RAG quality along different axes:
//!
//! - [`ContextEntityRecall`] — are the ground-truth answer's entities present
//!   in the retrieved context?
//! - [`ContextRelevancy`] — how much of the context is actually needed to
//!   answer the question?
//! - [`ContextRecall`] — how much of the ground-truth answer is attributable
//!   to the context?
//! - [`ContextPrecision`] — was the context useful in producing the answer?
//!
//! Each scorer renders an instruction template, invokes the model with a
//! forced tool call, validates the returned payload against its JSON schema,
//! and reduces it to a [`Score`]. Malformed or non-conforming model output is
//! a hard failure; nothing is retried or coerced.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use openai_client::OpenAIClient;
//! use ragas::{ContextRecall, Scorer, ScorerArgs};
//!
//! let model = Arc::new(OpenAIClient::from_env()?);
//! let scorer = ContextRecall::new(model);
//!
//! let score = scorer
//!     .score(&ScorerArgs {
//!         input: Some("What can you tell me about Einstein?".into()),
//!         expected: Some("Einstein was a German-born physicist.".into()),
//!         context: Some(vec![
//!             "Albert Einstein (1879-1955) was a theoretical physicist.".to_string(),
//!             "He was born in Ulm, Germany.".to_string(),
//!         ].into()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! println!("{}: {}", score.name, score.score);
//! ```
//!
//! Scorer invocations are independent units of work with no shared mutable
//! state; batches of examples can be scored concurrently at the call site.

pub mod args;
pub mod error;
pub mod number;
pub mod pairwise;
pub mod schemas;
pub mod score;
pub mod scorers;
pub mod testing;
pub mod traits;

mod invoke;
mod prompts;
mod template;

pub use args::{Context, ModelConfig, ScorerArgs, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
pub use error::{RagasError, Result};
pub use number::NumericDiff;
pub use pairwise::{EmbeddingListContains, ExactListContains, ListComparator};
pub use schemas::{
    Attribution, AttributionList, ExtractedEntities, PrecisionVerdict, RelevantSentences,
    SentencePick,
};
pub use score::Score;
pub use scorers::{ContextEntityRecall, ContextPrecision, ContextRecall, ContextRelevancy};
pub use traits::{ChatModel, Scorer};
