//! Analysis result model shared by the remote backend and the simulator.
//!
//! The wire shape is fixed: the dashboard consumes it directly and the
//! remote inference backend produces the same JSON, so the simulator must
//! be indistinguishable from a real response.

use serde::{Deserialize, Serialize};

use crate::engine::metric::{MetricReading, MetricType};

/// Which synthesis/scoring policy produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisType {
    FullSessionBaseline,
    SingleFile,
}

/// The five aggregated acoustic metrics of one analysis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricSet {
    pub pause_ratio: f64,
    pub pause_count: u32,
    pub mean_f0: f64,
    pub mean_energy: f64,
    pub max_energy: f64,
}

impl MetricSet {
    /// All-zero metrics, shown while no player is active.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Readings for the normalizer/classifier, in dashboard display order.
    pub fn readings(&self) -> [MetricReading; 5] {
        [
            MetricReading::new(MetricType::PauseRatio, self.pause_ratio),
            MetricReading::new(MetricType::PauseCount, f64::from(self.pause_count)),
            MetricReading::new(MetricType::MeanF0, self.mean_f0),
            MetricReading::new(MetricType::MeanEnergy, self.mean_energy),
            MetricReading::new(MetricType::MaxEnergy, self.max_energy),
        ]
    }
}

/// One completed analysis as returned to the dashboard.
///
/// Immutable once returned. `error` is populated exactly when `success`
/// is false; such results never update the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub success: bool,
    /// 0–100, one decimal.
    pub bluff_score: f64,
    /// 0–1, two decimals.
    pub confidence: f64,
    /// Short explanations in selection order, never repeating.
    #[serde(default)]
    pub reasons: Vec<String>,
    pub metrics: MetricSet,
    pub analysis_type: AnalysisType,
    pub files_analyzed: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResult {
    /// Successful result skeleton; callers fill score/confidence/reasons.
    pub fn ok(analysis_type: AnalysisType, files_analyzed: u32) -> Self {
        Self {
            success: true,
            bluff_score: 0.0,
            confidence: 0.0,
            reasons: Vec::new(),
            metrics: MetricSet::zero(),
            analysis_type,
            files_analyzed: files_analyzed.max(1),
            error: None,
        }
    }
}

/// Round to one decimal place (scores, displayed metrics).
pub(crate) fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Round to two decimal places (confidence).
pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
