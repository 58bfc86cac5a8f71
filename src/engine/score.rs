//! Deterministic weighted bluff scoring.
//!
//! Each feature is min/max-normalized to [0, 1] over a fixed range, then
//! combined with calibrated weights and scaled to 0–100. Energy features
//! are scored in dB; the dashboard stores them as percentages, so the
//! conversions between the two scales live here as well.

use crate::analysis::{round1, MetricSet};

/// Aggregated feature vector for the weighted scorer.
///
/// Energies are RMS levels in dB (typically negative); the pause features
/// and mean f0 use the same units the metric set carries.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreFeatures {
    pub pause_ratio: f64,
    pub pause_count: f64,
    pub mean_f0: f64,
    pub max_rms_db: f64,
    pub mean_rms_db: f64,
}

impl ScoreFeatures {
    /// Build the feature vector from a dashboard metric set, converting
    /// the percent-scaled energies back to dB.
    pub fn from_metrics(m: &MetricSet) -> Self {
        Self {
            pause_ratio: m.pause_ratio,
            pause_count: f64::from(m.pause_count),
            mean_f0: m.mean_f0,
            max_rms_db: percent_to_db(m.max_energy),
            mean_rms_db: percent_to_db(m.mean_energy),
        }
    }
}

// Feature normalization ranges and weights. Weights sum to 1.0.
const PAUSE_RATIO_RANGE: (f64, f64) = (0.0, 3.0);
const PAUSE_COUNT_RANGE: (f64, f64) = (0.0, 10.0);
const MEAN_F0_RANGE: (f64, f64) = (75.0, 300.0);
const RMS_DB_RANGE: (f64, f64) = (-40.0, 0.0);

const W_PAUSE_RATIO: f64 = 0.25;
const W_PAUSE_COUNT: f64 = 0.20;
const W_MEAN_F0: f64 = 0.15;
const W_MAX_RMS: f64 = 0.20;
const W_MEAN_RMS: f64 = 0.20;

/// Weighted bluff score on the 0–100 scale, one decimal.
pub fn weighted_bluff_score(f: &ScoreFeatures) -> f64 {
    let score = unit_range(f.pause_ratio, PAUSE_RATIO_RANGE) * W_PAUSE_RATIO
        + unit_range(f.pause_count, PAUSE_COUNT_RANGE) * W_PAUSE_COUNT
        + unit_range(f.mean_f0, MEAN_F0_RANGE) * W_MEAN_F0
        + unit_range(f.max_rms_db, RMS_DB_RANGE) * W_MAX_RMS
        + unit_range(f.mean_rms_db, RMS_DB_RANGE) * W_MEAN_RMS;
    round1(score * 100.0)
}

/// RMS dB level → 0–100 percentage (−120 dB floor).
pub fn db_to_percent(db: f64) -> f64 {
    ((db + 120.0) / 120.0 * 100.0).clamp(0.0, 100.0)
}

/// 0–100 percentage → RMS dB level.
pub fn percent_to_db(pct: f64) -> f64 {
    pct / 100.0 * 120.0 - 120.0
}

fn unit_range(value: f64, (lo, hi): (f64, f64)) -> f64 {
    ((value - lo) / (hi - lo)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_and_ceiling() {
        let silent = ScoreFeatures {
            pause_ratio: 0.0,
            pause_count: 0.0,
            mean_f0: 75.0,
            max_rms_db: -40.0,
            mean_rms_db: -40.0,
        };
        assert_eq!(weighted_bluff_score(&silent), 0.0);

        let maxed = ScoreFeatures {
            pause_ratio: 3.0,
            pause_count: 10.0,
            mean_f0: 300.0,
            max_rms_db: 0.0,
            mean_rms_db: 0.0,
        };
        assert_eq!(weighted_bluff_score(&maxed), 100.0);
    }

    #[test]
    fn known_vector() {
        // Halfway on every feature -> exactly half of the weight mass.
        let mid = ScoreFeatures {
            pause_ratio: 1.5,
            pause_count: 5.0,
            mean_f0: 187.5,
            max_rms_db: -20.0,
            mean_rms_db: -20.0,
        };
        assert_eq!(weighted_bluff_score(&mid), 50.0);
    }

    #[test]
    fn out_of_range_features_clamp() {
        let wild = ScoreFeatures {
            pause_ratio: 99.0,
            pause_count: -5.0,
            mean_f0: 10_000.0,
            max_rms_db: 40.0,
            mean_rms_db: -200.0,
        };
        let s = weighted_bluff_score(&wild);
        assert!((0.0..=100.0).contains(&s));
    }

    #[test]
    fn db_percent_conversions_invert() {
        for pct in [0.0, 12.5, 50.0, 87.0, 100.0] {
            let back = db_to_percent(percent_to_db(pct));
            assert!((back - pct).abs() < 1e-9, "{} -> {}", pct, back);
        }
        assert_eq!(db_to_percent(-120.0), 0.0);
        assert_eq!(db_to_percent(0.0), 100.0);
        assert_eq!(db_to_percent(20.0), 100.0);
    }
}
