// tests/classifier_boundaries.rs
//
// The documented threshold table, verified end to end: normalize feeds
// classify, and every finite input lands in exactly one tier.

use voice_bluff_analyzer::engine::{classify, css_class, normalize, Tier};
use voice_bluff_analyzer::{MetricReading, MetricType};

fn tier_of(metric: MetricType, raw: f64) -> Tier {
    classify(&MetricReading::new(metric, raw))
}

#[test]
fn pause_ratio_table() {
    // Classifies on the percentage (raw is a 0–1 ratio).
    let cases = [
        (0.05, Tier::Excellent),
        (0.10, Tier::Excellent),
        (0.101, Tier::Good),
        (0.20, Tier::Good),
        (0.30, Tier::Fair),
        (0.40, Tier::Poor),
        (0.401, Tier::Bad),
        (5.0, Tier::Bad),
    ];
    for (raw, want) in cases {
        assert_eq!(tier_of(MetricType::PauseRatio, raw), want, "raw {raw}");
    }
}

#[test]
fn pause_count_table() {
    let cases = [
        (0.0, Tier::Excellent),
        (5.0, Tier::Excellent),
        (5.0001, Tier::Good),
        (15.0, Tier::Good),
        (25.0, Tier::Fair),
        (35.0, Tier::Poor),
        (36.0, Tier::Bad),
    ];
    for (raw, want) in cases {
        assert_eq!(tier_of(MetricType::PauseCount, raw), want, "raw {raw}");
    }
}

#[test]
fn mean_f0_table() {
    let cases = [
        (60.0, Tier::Low),
        (79.99, Tier::Low),
        (80.0, Tier::NormalLow), // low bucket is strict `< 80`
        (120.0, Tier::NormalLow),
        (121.0, Tier::NormalMid),
        (180.0, Tier::NormalMid),
        (250.0, Tier::NormalHigh),
        (251.0, Tier::High),
    ];
    for (raw, want) in cases {
        assert_eq!(tier_of(MetricType::MeanF0, raw), want, "raw {raw}");
    }
}

#[test]
fn energy_tables() {
    let mean_cases = [
        (0.0, Tier::VeryLow),
        (10.0, Tier::Low), // very-low bucket is strict `< 10`
        (29.99, Tier::Low),
        (30.0, Tier::Optimal),
        (70.0, Tier::Optimal),
        (85.0, Tier::High),
        (86.0, Tier::VeryHigh),
    ];
    for (raw, want) in mean_cases {
        assert_eq!(tier_of(MetricType::MeanEnergy, raw), want, "mean {raw}");
    }

    let max_cases = [
        (0.0, Tier::VeryLow),
        (15.0, Tier::Low),
        (35.0, Tier::Normal),
        (75.0, Tier::Normal),
        (90.0, Tier::High),
        (91.0, Tier::VeryHigh),
    ];
    for (raw, want) in max_cases {
        assert_eq!(tier_of(MetricType::MaxEnergy, raw), want, "max {raw}");
    }
}

#[test]
fn classifier_is_total_over_hostile_inputs() {
    let hostile = [
        f64::MIN,
        -1e18,
        -42.0,
        -0.0,
        0.0,
        f64::EPSILON,
        1e18,
        f64::MAX,
    ];
    for metric in MetricType::ALL {
        for raw in hostile {
            let reading = MetricReading::new(metric, raw);
            assert!((0.0..=100.0).contains(&reading.percentage));
            // Must yield a tier, never panic.
            let tier = classify(&reading);
            assert!(!css_class(metric, tier).is_empty());
        }
    }
}

#[test]
fn normalize_then_classify_round_trip() {
    // A reading produced by the normalizer must classify to the tier a
    // human reads off the threshold table for the same raw value.
    let pct = normalize(MetricType::PauseRatio, 0.18);
    assert!((pct - 18.0).abs() < 1e-9);
    assert_eq!(tier_of(MetricType::PauseRatio, 0.18), Tier::Good);

    let pct = normalize(MetricType::MeanF0, 200.0);
    assert!((pct - 60.0).abs() < 1e-9);
    assert_eq!(tier_of(MetricType::MeanF0, 200.0), Tier::NormalHigh);
}
