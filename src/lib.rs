// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod analysis;
pub mod api;
pub mod colors;
pub mod config;
pub mod engine;
pub mod intake;
pub mod leaderboard;
pub mod metrics;
pub mod provider;

// ---- Re-exports for stable public API ----
pub use crate::analysis::{AnalysisResult, AnalysisType, MetricSet};
pub use crate::api::{create_router, AppState};
pub use crate::engine::{classify, normalize, synthesize, MetricReading, MetricType, Tier};
pub use crate::leaderboard::{Leaderboard, LeaderboardEntry};

/// Build the full application router for the given config. Used by the
/// Shuttle entrypoint and by integration tests.
pub fn app(cfg: &config::EngineConfig) -> axum::Router {
    create_router(AppState::from_config(cfg))
}
