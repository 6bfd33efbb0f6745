//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Buttons
//!
//! The board has four colored buttons laid out in a 2x2 grid:
//!
//! | Index | Symbol | Position |
//! |-------|--------|----------|
//! | 0 | Blue | top-left |
//! | 1 | Red | top-right |
//! | 2 | Green | bottom-left |
//! | 3 | Yellow | bottom-right |
//!
//! # Difficulty Tiers
//!
//! | Tier | Sequence length | Speed |
//! |------|-----------------|-------|
//! | Beginner | 4 | 1000ms |
//! | Medium | 6 | 800ms |
//! | Hard | 8 | 600ms |
//! | Pro | 10 | 400ms |
//!
//! Each symbol of a replay waits `speed` before it lights up and stays lit for
//! `speed / 2`.
//!
//! # Examples
//!
//! ```
//! use memory_master_types::{DifficultyTier, GameAction, Symbol};
//!
//! let tier = DifficultyTier::from_str("HARD").unwrap();
//! assert_eq!(tier.sequence_length(), 8);
//! assert_eq!(tier.speed_ms(), 600);
//! assert_eq!(tier.hold_ms(), 300);
//!
//! assert_eq!(Symbol::from_index(2), Some(Symbol::Green));
//! assert_eq!(Symbol::from_index(4), None);
//!
//! let action = GameAction::Press(Symbol::Red);
//! assert_eq!(action, GameAction::Press(Symbol::from_index(1).unwrap()));
//! ```

/// Number of distinct symbols (buttons).
pub const SYMBOL_COUNT: u8 = 4;

/// Longest sequence any tier produces.
pub const MAX_SEQUENCE_LEN: usize = 10;

/// Number of entries kept in the high-score list.
pub const LEADERBOARD_CAPACITY: usize = 5;

/// Pause between clearing a round and replaying the next one.
pub const ROUND_PAUSE_MS: u32 = 1000;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_table_matches_menu() {
        let table: Vec<(usize, u32)> = DifficultyTier::ALL
            .iter()
            .map(|t| (t.sequence_length(), t.speed_ms()))
            .collect();
        assert_eq!(table, vec![(4, 1000), (6, 800), (8, 600), (10, 400)]);
    }

    #[test]
    fn longest_tier_fits_sequence_capacity() {
        for tier in DifficultyTier::ALL {
            assert!(tier.sequence_length() <= MAX_SEQUENCE_LEN);
        }
        assert_eq!(DifficultyTier::Pro.sequence_length(), MAX_SEQUENCE_LEN);
    }

    #[test]
    fn symbol_index_round_trips() {
        for (i, symbol) in Symbol::ALL.iter().enumerate() {
            assert_eq!(symbol.index() as usize, i);
            assert_eq!(Symbol::from_index(i as u8), Some(*symbol));
        }
        assert_eq!(Symbol::from_index(SYMBOL_COUNT), None);
        assert_eq!(Symbol::from_index(u8::MAX), None);
    }

    #[test]
    fn phase_follows_round_state() {
        assert_eq!(RoundState::Idle.phase(), Phase::NotStarted);
        assert_eq!(RoundState::Playing.phase(), Phase::RoundInProgress);
        assert_eq!(RoundState::AwaitingInput.phase(), Phase::RoundInProgress);
        assert_eq!(RoundState::GameOver.phase(), Phase::GameOverDialog);
    }
}

/// One of the four colored buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Blue,
    Red,
    Green,
    Yellow,
}

impl Symbol {
    /// All symbols in index order.
    pub const ALL: [Symbol; 4] = [Symbol::Blue, Symbol::Red, Symbol::Green, Symbol::Yellow];

    /// Look up a symbol by button index (0-3).
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_master_types::Symbol;
    ///
    /// assert_eq!(Symbol::from_index(0), Some(Symbol::Blue));
    /// assert_eq!(Symbol::from_index(3), Some(Symbol::Yellow));
    /// assert_eq!(Symbol::from_index(7), None);
    /// ```
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(&self) -> u8 {
        match self {
            Symbol::Blue => 0,
            Symbol::Red => 1,
            Symbol::Green => 2,
            Symbol::Yellow => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::Blue => "blue",
            Symbol::Red => "red",
            Symbol::Green => "green",
            Symbol::Yellow => "yellow",
        }
    }
}

/// Named difficulty configuration.
///
/// The tier is chosen when a run starts and stays fixed until the run ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DifficultyTier {
    #[default]
    Beginner,
    Medium,
    Hard,
    Pro,
}

impl DifficultyTier {
    /// All tiers in menu order.
    pub const ALL: [DifficultyTier; 4] = [
        DifficultyTier::Beginner,
        DifficultyTier::Medium,
        DifficultyTier::Hard,
        DifficultyTier::Pro,
    ];

    /// Number of symbols in every sequence of this tier.
    pub fn sequence_length(&self) -> usize {
        match self {
            DifficultyTier::Beginner => 4,
            DifficultyTier::Medium => 6,
            DifficultyTier::Hard => 8,
            DifficultyTier::Pro => 10,
        }
    }

    /// Delay before each replayed symbol lights up.
    pub fn speed_ms(&self) -> u32 {
        match self {
            DifficultyTier::Beginner => 1000,
            DifficultyTier::Medium => 800,
            DifficultyTier::Hard => 600,
            DifficultyTier::Pro => 400,
        }
    }

    /// How long a replayed symbol stays lit.
    pub fn hold_ms(&self) -> u32 {
        self.speed_ms() / 2
    }

    /// Parse tier from its name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_master_types::DifficultyTier;
    ///
    /// assert_eq!(DifficultyTier::from_str("beginner"), Some(DifficultyTier::Beginner));
    /// assert_eq!(DifficultyTier::from_str("Pro"), Some(DifficultyTier::Pro));
    /// assert_eq!(DifficultyTier::from_str("expert"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Some(DifficultyTier::Beginner),
            "medium" => Some(DifficultyTier::Medium),
            "hard" => Some(DifficultyTier::Hard),
            "pro" => Some(DifficultyTier::Pro),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyTier::Beginner => "beginner",
            DifficultyTier::Medium => "medium",
            DifficultyTier::Hard => "hard",
            DifficultyTier::Pro => "pro",
        }
    }
}

impl std::fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fine-grained state of the current round.
///
/// - **Idle**: no run in progress
/// - **Playing**: the sequence is being replayed (or the next replay is scheduled); input is locked
/// - **AwaitingInput**: the player may press buttons
/// - **GameOver**: the last press was wrong; waiting for the player to acknowledge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundState {
    #[default]
    Idle,
    Playing,
    AwaitingInput,
    GameOver,
}

impl RoundState {
    pub fn phase(&self) -> Phase {
        match self {
            RoundState::Idle => Phase::NotStarted,
            RoundState::Playing | RoundState::AwaitingInput => Phase::RoundInProgress,
            RoundState::GameOver => Phase::GameOverDialog,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoundState::Idle => "idle",
            RoundState::Playing => "playing",
            RoundState::AwaitingInput => "awaitingInput",
            RoundState::GameOver => "gameOver",
        }
    }
}

/// Coarse lifecycle of the game as seen by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    NotStarted,
    RoundInProgress,
    GameOverDialog,
}

/// Result of a single accepted button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Matched so far; more symbols expected
    Correct,
    /// Did not match the symbol at this position; the run is over
    Wrong,
    /// The whole sequence was reproduced
    SequenceComplete,
}

/// Audio cue requested from the feedback collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Click,
    Failure,
}

/// Player intents accepted by the game.
///
/// These are produced by the terminal key map and dispatched through
/// the game state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Press one of the four buttons
    Press(Symbol),
    /// Start a run at the given tier
    Start(DifficultyTier),
    /// Dismiss the game-over dialog
    Acknowledge,
    /// Abandon the current run and return to the tier menu
    Restart,
}
