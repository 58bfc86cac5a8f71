//! Metric model and normalization.
//!
//! Each acoustic metric has its own linear mapping from raw value to a
//! 0–100 display percentage. The mapping is total: any finite input lands
//! in [0, 100] after clamping.

use serde::{Deserialize, Serialize};

/// The closed set of acoustic metrics the dashboard displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricType {
    PauseRatio,
    PauseCount,
    MeanF0,
    MeanEnergy,
    MaxEnergy,
}

impl MetricType {
    pub const ALL: [MetricType; 5] = [
        MetricType::PauseRatio,
        MetricType::PauseCount,
        MetricType::MeanF0,
        MetricType::MeanEnergy,
        MetricType::MaxEnergy,
    ];

    /// Kebab-case tag used in color classes and wire payloads.
    pub fn slug(self) -> &'static str {
        match self {
            MetricType::PauseRatio => "pause-ratio",
            MetricType::PauseCount => "pause-count",
            MetricType::MeanF0 => "mean-f0",
            MetricType::MeanEnergy => "mean-energy",
            MetricType::MaxEnergy => "max-energy",
        }
    }

    /// Parse a free-text tag. Accepts both the kebab-case wire form and the
    /// snake_case keys used in metric payloads.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "pause-ratio" | "pause_ratio" => Some(MetricType::PauseRatio),
            "pause-count" | "pause_count" => Some(MetricType::PauseCount),
            "mean-f0" | "mean_f0" => Some(MetricType::MeanF0),
            "mean-energy" | "mean_energy" => Some(MetricType::MeanEnergy),
            "max-energy" | "max_energy" => Some(MetricType::MaxEnergy),
            _ => None,
        }
    }
}

/// A raw metric value together with its derived display percentage.
///
/// Invariant: `0 <= percentage <= 100`, guaranteed by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricReading {
    pub metric: MetricType,
    pub raw_value: f64,
    pub percentage: f64,
}

impl MetricReading {
    pub fn new(metric: MetricType, raw_value: f64) -> Self {
        Self {
            metric,
            raw_value,
            percentage: normalize(metric, raw_value),
        }
    }
}

/// Map a raw metric value to a 0–100 percentage.
///
/// Formulas per metric:
/// - pause-ratio: `raw * 100` (raw is a 0–1-ish ratio)
/// - pause-count: `(raw / 50) * 100`
/// - mean-f0:     `((raw - 50) / 250) * 100`
/// - mean-energy / max-energy: already percentage-like, passed through
///
/// Output is clamped to [0, 100] in every case.
pub fn normalize(metric: MetricType, raw: f64) -> f64 {
    let pct = match metric {
        MetricType::PauseRatio => raw * 100.0,
        MetricType::PauseCount => (raw / 50.0) * 100.0,
        MetricType::MeanF0 => ((raw - 50.0) / 250.0) * 100.0,
        MetricType::MeanEnergy | MetricType::MaxEnergy => raw,
    };
    pct.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_always_in_range() {
        let inputs = [-1e9, -1.0, 0.0, 0.5, 1.0, 42.0, 99.9, 100.0, 350.0, 1e9];
        for metric in MetricType::ALL {
            for raw in inputs {
                let pct = normalize(metric, raw);
                assert!(
                    (0.0..=100.0).contains(&pct),
                    "{:?} raw {} -> {}",
                    metric,
                    raw,
                    pct
                );
            }
        }
    }

    #[test]
    fn pause_ratio_scales_from_unit_ratio() {
        assert!((normalize(MetricType::PauseRatio, 0.12) - 12.0).abs() < 1e-9);
        assert_eq!(normalize(MetricType::PauseRatio, 2.0), 100.0);
    }

    #[test]
    fn pause_count_uses_fifty_span() {
        assert!((normalize(MetricType::PauseCount, 25.0) - 50.0).abs() < 1e-9);
        assert_eq!(normalize(MetricType::PauseCount, 80.0), 100.0);
    }

    #[test]
    fn mean_f0_offsets_and_clamps() {
        assert_eq!(normalize(MetricType::MeanF0, 50.0), 0.0);
        assert!((normalize(MetricType::MeanF0, 175.0) - 50.0).abs() < 1e-9);
        assert_eq!(normalize(MetricType::MeanF0, 20.0), 0.0);
        assert_eq!(normalize(MetricType::MeanF0, 400.0), 100.0);
    }

    #[test]
    fn energies_pass_through() {
        assert_eq!(normalize(MetricType::MeanEnergy, 65.0), 65.0);
        assert_eq!(normalize(MetricType::MaxEnergy, 120.0), 100.0);
        assert_eq!(normalize(MetricType::MaxEnergy, -3.0), 0.0);
    }

    #[test]
    fn tag_parsing_accepts_both_forms() {
        assert_eq!(MetricType::parse("mean-f0"), Some(MetricType::MeanF0));
        assert_eq!(MetricType::parse("mean_f0"), Some(MetricType::MeanF0));
        assert_eq!(MetricType::parse("MAX_ENERGY"), Some(MetricType::MaxEnergy));
        assert_eq!(MetricType::parse("loudness"), None);
    }
}
