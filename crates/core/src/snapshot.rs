use arrayvec::ArrayVec;

use crate::types::{DifficultyTier, Phase, RoundState, Symbol, LEADERBOARD_CAPACITY};

/// Read-only copy of everything the presentation layer draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub round_state: RoundState,
    pub tier: DifficultyTier,
    pub sequence_len: usize,
    pub input_len: usize,
    /// Symbols already replayed this round.
    pub shown: usize,
    pub highlighted: Option<Symbol>,
    pub score: u32,
    pub leaderboard: ArrayVec<u32, LEADERBOARD_CAPACITY>,
    /// Round number within the run, 0 before the first start.
    pub round: u32,
}

impl GameSnapshot {
    /// True when a button press would be accepted.
    pub fn accepts_input(&self) -> bool {
        self.round_state == RoundState::AwaitingInput
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            phase: Phase::NotStarted,
            round_state: RoundState::Idle,
            tier: DifficultyTier::default(),
            sequence_len: 0,
            input_len: 0,
            shown: 0,
            highlighted: None,
            score: 0,
            leaderboard: ArrayVec::new(),
            round: 0,
        }
    }
}
