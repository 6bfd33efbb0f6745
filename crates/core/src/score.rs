//! Score tracking - current run score and the in-memory high-score list.

use arrayvec::ArrayVec;

use crate::types::LEADERBOARD_CAPACITY;

/// Best scores of past runs, highest first, at most five entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    entries: ArrayVec<u32, LEADERBOARD_CAPACITY>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a finished run's score, keep descending order, drop anything past capacity.
    pub fn insert(&mut self, score: u32) {
        if self.entries.is_full() {
            match self.entries.last_mut() {
                Some(lowest) if *lowest < score => *lowest = score,
                _ => return,
            }
        } else {
            self.entries.push(score);
        }
        self.entries.sort_unstable_by(|a, b| b.cmp(a));
    }

    pub fn entries(&self) -> &[u32] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn best(&self) -> Option<u32> {
        self.entries.first().copied()
    }
}

/// Tracks the score of the current run and records it when the run ends.
#[derive(Debug, Clone, Default)]
pub struct ScoreTracker {
    score: u32,
    leaderboard: Leaderboard,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// A full sequence was reproduced.
    pub fn on_round_complete(&mut self) {
        self.score = self.score.saturating_add(1);
    }

    /// The run ended on a wrong press.
    pub fn on_round_failed(&mut self, current_score: u32) {
        self.leaderboard.insert(current_score);
    }

    pub fn reset(&mut self) {
        self.score = 0;
    }
}
