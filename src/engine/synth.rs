//! Simulated session analysis.
//!
//! Stand-in for the real inference backend: generates a plausible
//! `AnalysisResult` from random ranges. Two policies exist, selected by
//! the number of uploaded files: a five-file session gets the
//! baseline-comparison ranges, anything else is scored as a single file
//! (the most recent one).

use rand::seq::SliceRandom;
use rand::Rng;

use crate::analysis::{round1, round2, AnalysisResult, AnalysisType, MetricSet};

/// Reason pool for a full five-file session.
pub const SESSION_REASONS: [&str; 4] = [
    "Pause patterns differ from conversational baseline",
    "Pitch variation exceeds reading baseline",
    "Energy levels show stress indicators",
    "Speech rhythm changes detected",
];

/// Reason pool for a single-file analysis.
pub const SINGLE_FILE_REASONS: [&str; 5] = [
    "High pause ratio detected",
    "Frequent pausing detected",
    "Unusual pitch patterns",
    "Energy levels indicate stress",
    "Speech patterns appear normal",
];

/// Produce a synthetic analysis for the given upload count.
pub fn synthesize(file_count: u32) -> AnalysisResult {
    let mut rng = rand::rng();
    if file_count == 5 {
        session_result(&mut rng)
    } else {
        single_file_result(&mut rng)
    }
}

fn session_result<R: Rng>(rng: &mut R) -> AnalysisResult {
    let mut result = AnalysisResult::ok(AnalysisType::FullSessionBaseline, 5);
    result.bluff_score = round1(rng.random_range(20.0..=80.0));
    result.confidence = round2(rng.random_range(0.70..=0.95));
    result.reasons = pick_reasons(rng, &SESSION_REASONS, 2, 3);
    result.metrics = MetricSet {
        pause_ratio: round1(rng.random_range(0.05..=0.35) * 10.0),
        pause_count: rng.random_range(3..=23),
        mean_f0: f64::from(rng.random_range(120..=200)),
        mean_energy: f64::from(rng.random_range(30..=80)),
        max_energy: f64::from(rng.random_range(50..=90)),
    };
    result
}

fn single_file_result<R: Rng>(rng: &mut R) -> AnalysisResult {
    let mut result = AnalysisResult::ok(AnalysisType::SingleFile, 1);
    result.bluff_score = round1(rng.random_range(10.0..=80.0));
    result.confidence = round2(rng.random_range(0.60..=0.80));
    result.reasons = pick_reasons(rng, &SINGLE_FILE_REASONS, 1, 2);
    result.metrics = MetricSet {
        pause_ratio: round1(rng.random_range(0.02..=0.27) * 10.0),
        pause_count: rng.random_range(1..=15),
        mean_f0: f64::from(rng.random_range(100..=200)),
        mean_energy: f64::from(rng.random_range(20..=80)),
        max_energy: f64::from(rng.random_range(40..=90)),
    };
    result
}

/// Shuffle the pool and take a random-length prefix, so the selection is
/// without replacement and the count varies run to run within bounds.
fn pick_reasons<R: Rng>(rng: &mut R, pool: &[&str], min: usize, max: usize) -> Vec<String> {
    let mut shuffled: Vec<&str> = pool.to_vec();
    shuffled.shuffle(rng);
    let take = rng.random_range(min..=max);
    shuffled.into_iter().take(take).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn reason_selection_is_distinct_and_bounded() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen_lengths = HashSet::new();
        for _ in 0..200 {
            let reasons = pick_reasons(&mut rng, &SESSION_REASONS, 2, 3);
            assert!(reasons.len() == 2 || reasons.len() == 3);
            seen_lengths.insert(reasons.len());
            let unique: HashSet<&String> = reasons.iter().collect();
            assert_eq!(unique.len(), reasons.len());
            for r in &reasons {
                assert!(SESSION_REASONS.contains(&r.as_str()));
            }
        }
        // Both lengths must actually occur; a fixed count would be wrong.
        assert_eq!(seen_lengths.len(), 2);
    }

    #[test]
    fn non_session_counts_fall_back_to_single_file() {
        for count in [0, 1, 2, 4, 6, 12] {
            let r = synthesize(count);
            assert_eq!(r.analysis_type, AnalysisType::SingleFile);
            assert_eq!(r.files_analyzed, 1);
        }
        assert_eq!(synthesize(5).analysis_type, AnalysisType::FullSessionBaseline);
    }

    #[test]
    fn session_pause_ratio_lands_in_display_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let r = session_result(&mut rng);
            assert!(
                (0.5..=3.5).contains(&r.metrics.pause_ratio),
                "pause_ratio {}",
                r.metrics.pause_ratio
            );
        }
    }
}
