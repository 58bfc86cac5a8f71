// src/engine/mod.rs
//! Metric engine: normalization, severity tiers, weighted scoring,
//! simulated synthesis, and presenter-facing reporting.

pub mod classify;
pub mod metric;
pub mod report;
pub mod score;
pub mod synth;

// Re-export convenient types.
pub use classify::{classify, classify_tag, css_class, Tier};
pub use metric::{normalize, MetricReading, MetricType};
pub use report::{interpretation, metric_boxes, score_breakdown, MetricBox};
pub use score::{db_to_percent, percent_to_db, weighted_bluff_score, ScoreFeatures};
pub use synth::synthesize;
