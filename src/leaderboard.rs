//! In-memory leaderboard with recomputed ranks.
//!
//! Entries are stored in insertion order behind a mutex; the ranked view
//! is a computed snapshot (stable sort, descending score), so ranks are
//! never stored on entries and `remove_last` can honor insertion-order
//! semantics: it undoes the most recent insertion regardless of rank.

use std::cmp::Ordering;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: f64,
    pub recorded_at: DateTime<Utc>,
}

impl LeaderboardEntry {
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
            recorded_at: Utc::now(),
        }
    }
}

/// An entry together with its 1-based position in the ranked view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub rank: usize,
    #[serde(flatten)]
    pub entry: LeaderboardEntry,
}

#[derive(Debug, Default)]
pub struct Leaderboard {
    inner: Mutex<Vec<LeaderboardEntry>>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entry and return its rank in the resulting view.
    pub fn insert(&self, entry: LeaderboardEntry) -> usize {
        let mut v = self.inner.lock().expect("leaderboard mutex poisoned");
        let rank = 1 + v.iter().filter(|e| e.score > entry.score).count();
        v.push(entry);
        rank
    }

    /// Undo the most recent insertion (insertion-order, not lowest-score).
    pub fn remove_last(&self) -> Option<LeaderboardEntry> {
        self.inner
            .lock()
            .expect("leaderboard mutex poisoned")
            .pop()
    }

    /// Snapshot sorted by score descending; ties keep insertion order.
    pub fn ranked(&self) -> Vec<RankedEntry> {
        let mut entries = {
            let v = self.inner.lock().expect("leaderboard mutex poisoned");
            v.clone()
        };
        entries.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| RankedEntry { rank: i + 1, entry })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("leaderboard mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
