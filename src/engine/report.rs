//! Presenter-facing derived views: metric boxes, interpretation lines,
//! and the score breakdown for the result panel.

use serde::Serialize;

use crate::analysis::MetricSet;

use super::classify::{classify, css_class};
use super::metric::MetricType;

/// One dashboard metric box: value, progress-bar percentage, color class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricBox {
    pub metric: MetricType,
    pub value: f64,
    pub percentage: f64,
    pub color_class: String,
}

/// Boxes for the five-box metric display, in dashboard order.
pub fn metric_boxes(metrics: &MetricSet) -> Vec<MetricBox> {
    metrics
        .readings()
        .iter()
        .map(|r| MetricBox {
            metric: r.metric,
            value: r.raw_value,
            percentage: r.percentage,
            color_class: css_class(r.metric, classify(r)),
        })
        .collect()
}

/// Human-readable interpretation of an aggregated metric set, one line per
/// metric. Pause-ratio bands use the display scale the metric set carries.
pub fn interpretation(m: &MetricSet) -> Vec<String> {
    let mut lines = Vec::with_capacity(5);

    lines.push(if m.pause_ratio > 2.5 {
        "Significant hesitation patterns detected; frequent pauses may indicate cognitive load"
            .to_string()
    } else if m.pause_ratio > 1.5 {
        "Moderate pause frequency observed; some hesitation present during responses".to_string()
    } else {
        "Minimal hesitation detected; speech flows relatively smoothly".to_string()
    });

    lines.push(if m.pause_count > 25 {
        format!(
            "High pause frequency with {} total pauses; indicates potential stress",
            m.pause_count
        )
    } else if m.pause_count > 15 {
        format!(
            "Moderate pause count of {} pauses; some verbal disfluencies present",
            m.pause_count
        )
    } else {
        format!(
            "Low pause count of {} pauses; relatively fluent speech delivery",
            m.pause_count
        )
    });

    lines.push(if m.mean_f0 > 180.0 {
        format!(
            "Elevated vocal pitch at {:.1} Hz; may indicate stress or emotional arousal",
            m.mean_f0
        )
    } else if m.mean_f0 < 120.0 {
        format!(
            "Lowered vocal pitch at {:.1} Hz; could suggest controlled speech or tension",
            m.mean_f0
        )
    } else {
        format!(
            "Normal vocal pitch range at {:.1} Hz; within typical conversational parameters",
            m.mean_f0
        )
    });

    lines.push(if m.mean_energy > 70.0 {
        format!(
            "High vocal energy at {:.1}%; may indicate heightened emotional state",
            m.mean_energy
        )
    } else if m.mean_energy < 30.0 {
        format!(
            "Low vocal energy at {:.1}%; could suggest subdued or controlled delivery",
            m.mean_energy
        )
    } else {
        format!(
            "Moderate vocal energy at {:.1}%; balanced speech delivery observed",
            m.mean_energy
        )
    });

    lines.push(if m.max_energy > 85.0 {
        format!(
            "Very high energy peaks at {:.1}%; sudden intensity changes detected",
            m.max_energy
        )
    } else if m.max_energy > 70.0 {
        format!(
            "Notable energy peaks at {:.1}%; some vocal intensity variation present",
            m.max_energy
        )
    } else {
        format!(
            "Stable energy levels with peaks at {:.1}%; consistent vocal delivery",
            m.max_energy
        )
    });

    lines
}

/// Per-metric contribution lines for the score explanation panel.
pub fn score_breakdown(m: &MetricSet) -> Vec<String> {
    vec![
        format!("{:.3} avg pause ratio across recordings", m.pause_ratio),
        format!("{} total pauses across recordings", m.pause_count),
        format!("{:.1} Hz avg fundamental frequency", m.mean_f0),
        format!("{:.1}% avg energy level", m.mean_energy),
        format!("{:.1}% highest energy peak", m.max_energy),
    ]
}
