//! The four RAGAS metric algorithms.
//!
//! Each scorer follows the same pipeline: normalize arguments, render the
//! metric's template, invoke the model with a forced tool call, validate the
//! payload against its schema, then apply the metric-specific reduction.

mod entity_recall;
mod precision;
mod recall;
mod relevancy;

pub use entity_recall::ContextEntityRecall;
pub use precision::ContextPrecision;
pub use recall::ContextRecall;
pub use relevancy::ContextRelevancy;
