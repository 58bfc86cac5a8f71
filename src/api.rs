use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use metrics::counter;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::analysis::{AnalysisResult, MetricSet};
use crate::colors::{self, Profile};
use crate::config::EngineConfig;
use crate::engine::{interpretation, metric_boxes, score_breakdown, weighted_bluff_score};
use crate::engine::{MetricBox, ScoreFeatures};
use crate::intake::{validate_batch, FileDescriptor};
use crate::leaderboard::{Leaderboard, LeaderboardEntry, RankedEntry};
use crate::provider::{build_client_from_config, DynAnalysisClient, SimulatedClient};

#[derive(Clone)]
pub struct AppState {
    client: DynAnalysisClient,
    demo: Arc<SimulatedClient>,
    leaderboard: Arc<Leaderboard>,
    profile_endpoint: Option<String>,
    http: reqwest::Client,
}

impl AppState {
    pub fn from_config(cfg: &EngineConfig) -> Self {
        let http = reqwest::Client::builder()
            .user_agent("voice-bluff-analyzer/0.1")
            .connect_timeout(Duration::from_secs(4))
            .timeout(Duration::from_secs(10))
            .build()
            .expect("reqwest client");

        Self {
            client: build_client_from_config(cfg),
            demo: Arc::new(SimulatedClient::new(Duration::from_millis(
                cfg.simulated_delay_ms,
            ))),
            leaderboard: Arc::new(Leaderboard::new()),
            profile_endpoint: cfg.profile_endpoint.clone(),
            http,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/analyze", post(analyze))
        .route("/analyze_demo", post(analyze_demo))
        .route("/dashboard", post(dashboard))
        .route("/leaderboard", get(leaderboard_view))
        .route("/leaderboard/remove_last", post(leaderboard_remove_last))
        .route("/profile/resolve", post(profile_resolve))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(serde::Deserialize)]
struct AnalyzeReq {
    #[serde(default)]
    player_name: Option<String>,
    files: Vec<FileDescriptor>,
}

#[derive(serde::Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

fn error_body(error: String) -> Json<ErrorBody> {
    Json(ErrorBody {
        success: false,
        error,
    })
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy", "analyzer_ready": true }))
}

async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeReq>,
) -> Result<Json<AnalysisResult>, (StatusCode, Json<ErrorBody>)> {
    if let Err(err) = validate_batch(&req.files) {
        counter!("analyses_failed_total").increment(1);
        return Err((StatusCode::BAD_REQUEST, error_body(err.to_string())));
    }

    match state.client.analyze(&req.files).await {
        Ok(result) => {
            counter!("analyses_total", "provider" => state.client.provider_name()).increment(1);

            let name = req
                .player_name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| colors::FALLBACK_NAME.to_string());
            let rank = state
                .leaderboard
                .insert(LeaderboardEntry::new(name, result.bluff_score));
            counter!("leaderboard_inserts_total").increment(1);

            info!(
                score = result.bluff_score,
                files = result.files_analyzed,
                rank,
                "analysis recorded"
            );
            Ok(Json(result))
        }
        Err(err) => {
            // Leaderboard untouched: the dashboard keeps its prior state.
            counter!("analyses_failed_total").increment(1);
            warn!(error = %err, "analysis aborted");
            Err((StatusCode::BAD_GATEWAY, error_body(err.to_string())))
        }
    }
}

#[derive(serde::Deserialize)]
struct DemoReq {
    #[serde(default = "default_num_files")]
    num_files: u32,
}

fn default_num_files() -> u32 {
    1
}

/// Demo mode: always the simulator, even when a real backend is configured.
async fn analyze_demo(
    State(state): State<AppState>,
    Json(req): Json<DemoReq>,
) -> Json<AnalysisResult> {
    let result = state.demo.run(req.num_files).await;
    counter!("analyses_total", "provider" => "simulated").increment(1);
    Json(result)
}

#[derive(serde::Serialize)]
struct DashboardData {
    bluff_score: f64,
    boxes: Vec<MetricBox>,
    interpretation: Vec<String>,
    breakdown: Vec<String>,
}

/// Metric boxes + score views for a supplied metric set.
async fn dashboard(Json(metrics): Json<MetricSet>) -> Json<DashboardData> {
    let features = ScoreFeatures::from_metrics(&metrics);
    Json(DashboardData {
        bluff_score: weighted_bluff_score(&features),
        boxes: metric_boxes(&metrics),
        interpretation: interpretation(&metrics),
        breakdown: score_breakdown(&metrics),
    })
}

#[derive(serde::Serialize)]
struct LeaderboardView {
    leaderboard: Vec<RankedEntry>,
    total_players: usize,
}

async fn leaderboard_view(State(state): State<AppState>) -> Json<LeaderboardView> {
    let ranked = state.leaderboard.ranked();
    let total_players = ranked.len();
    Json(LeaderboardView {
        leaderboard: ranked,
        total_players,
    })
}

async fn leaderboard_remove_last(
    State(state): State<AppState>,
) -> Json<Option<LeaderboardEntry>> {
    Json(state.leaderboard.remove_last())
}

#[derive(serde::Serialize)]
struct ResolvedProfile {
    name: String,
    favorite_color: String,
    color_hex: String,
}

async fn profile_resolve(State(state): State<AppState>) -> Json<ResolvedProfile> {
    let profile = match state.profile_endpoint.as_deref() {
        Some(endpoint) => colors::fetch_profile(&state.http, endpoint).await,
        None => Profile::fallback(),
    };
    let color_hex = colors::color_hex(&profile.favorite_color);
    Json(ResolvedProfile {
        name: profile.name,
        favorite_color: profile.favorite_color,
        color_hex,
    })
}
