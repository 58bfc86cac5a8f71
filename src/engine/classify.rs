//! Severity tiers and the metric classifier.
//!
//! Every metric value falls into exactly one of five ordered buckets; the
//! bucket key doubles as the dashboard color class. Pause-ratio classifies
//! on the display percentage, the other four metrics on the raw value.
//!
//! The boundary comparisons mix `<` and `<=` on purpose: the first two
//! buckets of mean-f0/mean-energy/max-energy exclude their upper bound, so
//! exact boundary values (80 Hz, 10%, 30%, 15%, 35%) land in the second
//! bucket, while every other bound is inclusive.

use serde::{Deserialize, Serialize};

use super::metric::{MetricReading, MetricType};

/// Severity bucket key. The names span three label families (pause
/// metrics, f0 bands, energy bands); each metric uses exactly five of
/// them, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    Excellent,
    Good,
    Fair,
    Poor,
    Bad,
    Low,
    NormalLow,
    NormalMid,
    NormalHigh,
    High,
    VeryLow,
    Optimal,
    Normal,
    VeryHigh,
}

impl Tier {
    /// Kebab-case key, as consumed by the dashboard CSS.
    pub fn key(self) -> &'static str {
        match self {
            Tier::Excellent => "excellent",
            Tier::Good => "good",
            Tier::Fair => "fair",
            Tier::Poor => "poor",
            Tier::Bad => "bad",
            Tier::Low => "low",
            Tier::NormalLow => "normal-low",
            Tier::NormalMid => "normal-mid",
            Tier::NormalHigh => "normal-high",
            Tier::High => "high",
            Tier::VeryLow => "very-low",
            Tier::Optimal => "optimal",
            Tier::Normal => "normal",
            Tier::VeryHigh => "very-high",
        }
    }
}

/// Classify a reading into its severity tier.
pub fn classify(reading: &MetricReading) -> Tier {
    match reading.metric {
        MetricType::PauseRatio => pause_ratio_tier(reading.percentage),
        MetricType::PauseCount => pause_count_tier(reading.raw_value),
        MetricType::MeanF0 => mean_f0_tier(reading.raw_value),
        MetricType::MeanEnergy => mean_energy_tier(reading.raw_value),
        MetricType::MaxEnergy => max_energy_tier(reading.raw_value),
    }
}

/// String-tag boundary: classify where the metric kind arrives as free
/// text. Unrecognized tags get the safe mid default instead of an error.
pub fn classify_tag(tag: &str, raw_value: f64, percentage: f64) -> Tier {
    match MetricType::parse(tag) {
        Some(metric) => classify(&MetricReading {
            metric,
            raw_value,
            percentage: percentage.clamp(0.0, 100.0),
        }),
        None => Tier::Good,
    }
}

/// Dashboard color class, e.g. `mean-f0-normal-low`.
pub fn css_class(metric: MetricType, tier: Tier) -> String {
    format!("{}-{}", metric.slug(), tier.key())
}

fn pause_ratio_tier(pct: f64) -> Tier {
    if pct <= 10.0 {
        Tier::Excellent
    } else if pct <= 20.0 {
        Tier::Good
    } else if pct <= 30.0 {
        Tier::Fair
    } else if pct <= 40.0 {
        Tier::Poor
    } else {
        Tier::Bad
    }
}

fn pause_count_tier(count: f64) -> Tier {
    if count <= 5.0 {
        Tier::Excellent
    } else if count <= 15.0 {
        Tier::Good
    } else if count <= 25.0 {
        Tier::Fair
    } else if count <= 35.0 {
        Tier::Poor
    } else {
        Tier::Bad
    }
}

fn mean_f0_tier(hz: f64) -> Tier {
    if hz < 80.0 {
        Tier::Low
    } else if hz <= 120.0 {
        Tier::NormalLow
    } else if hz <= 180.0 {
        Tier::NormalMid
    } else if hz <= 250.0 {
        Tier::NormalHigh
    } else {
        Tier::High
    }
}

fn mean_energy_tier(pct: f64) -> Tier {
    if pct < 10.0 {
        Tier::VeryLow
    } else if pct < 30.0 {
        Tier::Low
    } else if pct <= 70.0 {
        Tier::Optimal
    } else if pct <= 85.0 {
        Tier::High
    } else {
        Tier::VeryHigh
    }
}

fn max_energy_tier(pct: f64) -> Tier {
    if pct < 15.0 {
        Tier::VeryLow
    } else if pct < 35.0 {
        Tier::Low
    } else if pct <= 75.0 {
        Tier::Normal
    } else if pct <= 90.0 {
        Tier::High
    } else {
        Tier::VeryHigh
    }
}
