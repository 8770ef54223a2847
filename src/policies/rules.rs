//! Selection rules for the ready set.
//!
//! # Score Convention
//! **Lower score = selected first.** Among equal scores the process with the
//! lowest dispatch index (earliest arrival, then input order) wins.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use super::ProcessStore;

/// How the `priority` field is read by the priority policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriorityDirection {
    /// Lower number = higher priority.
    #[default]
    LowerIsHigher,
    /// Higher number = higher priority.
    HigherIsHigher,
}

impl PriorityDirection {
    /// Maps a priority onto the lower-wins score scale.
    #[inline]
    pub fn score(self, priority: i32) -> i64 {
        match self {
            PriorityDirection::LowerIsHigher => i64::from(priority),
            PriorityDirection::HigherIsHigher => -i64::from(priority),
        }
    }
}

/// A rule that scores ready processes.
pub trait SelectionRule: Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Scores the process at dispatch index `idx`. Lower = selected first.
    fn score(&self, store: &ProcessStore, idx: usize) -> i64;
}

/// Shortest total burst first.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn score(&self, store: &ProcessStore, idx: usize) -> i64 {
        store.process(idx).burst_time
    }
}

/// Shortest remaining burst first.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn score(&self, store: &ProcessStore, idx: usize) -> i64 {
        store.remaining(idx)
    }
}

/// Best priority first, in the configured direction.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityRule {
    pub direction: PriorityDirection,
}

impl PriorityRule {
    pub fn new(direction: PriorityDirection) -> Self {
        Self { direction }
    }
}

impl SelectionRule for PriorityRule {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn score(&self, store: &ProcessStore, idx: usize) -> i64 {
        self.direction.score(store.process(idx).priority)
    }
}

/// Returns the candidate with the lowest score; the first one wins ties.
pub fn select_best<R: SelectionRule + ?Sized>(
    rule: &R,
    store: &ProcessStore,
    candidates: impl IntoIterator<Item = usize>,
) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;
    for idx in candidates {
        let score = rule.score(store, idx);
        if best.map_or(true, |(_, best_score)| score < best_score) {
            best = Some((idx, score));
        }
    }
    best.map(|(idx, _)| idx)
}
