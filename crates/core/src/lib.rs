//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the whole memory game: sequence generation, timed
//! replay, input validation, scoring and the round lifecycle. It has
//! **no dependencies** on terminals, audio devices or real clocks, making it:
//!
//! - **Deterministic**: Same seed (or scripted source) produces identical games
//! - **Testable**: Time is a virtual clock advanced with `tick`
//! - **Portable**: Any front end plugs in through the [`GameHost`] trait
//!
//! # Module Structure
//!
//! - [`rng`]: Injectable symbol sources and the default LCG
//! - [`sequence`]: Random target sequences per difficulty tier
//! - [`playback`]: Timed, strictly sequential replay of a sequence
//! - [`validator`]: Positional comparison of player presses
//! - [`score`]: Run score and the bounded high-score list
//! - [`game_state`]: The state machine tying it all together
//! - [`host`]: Collaborator seam (highlights, feedback, dialogs)
//!
//! # Example
//!
//! ```
//! use memory_master_core::{EventLog, GameStateMachine};
//! use memory_master_types::{DifficultyTier, InputOutcome, RoundState};
//!
//! let mut game = GameStateMachine::new(12345);
//! let mut host = EventLog::new();
//!
//! game.start_game(DifficultyTier::Beginner, &mut host).unwrap();
//! assert_eq!(game.round_state(), RoundState::Playing);
//!
//! // Replay takes 4 * (1000 + 500) ms on beginner.
//! game.tick(6000, &mut host);
//! assert_eq!(game.round_state(), RoundState::AwaitingInput);
//!
//! // Reproduce the sequence.
//! let target = game.sequence().clone();
//! for symbol in target {
//!     game.press(symbol, &mut host);
//! }
//! assert_eq!(game.score(), 1);
//! ```
//!
//! # Timing
//!
//! - Each replayed symbol waits `speed` ms, lights up for `speed / 2` ms, then clears
//! - After a cleared round the next replay starts following a 1000ms pause
//! - Input is only accepted once the replay has finished

pub mod error;
pub mod game_state;
pub mod host;
pub mod playback;
pub mod rng;
pub mod score;
pub mod sequence;
pub mod snapshot;
pub mod validator;

pub use memory_master_types as types;

// Re-export commonly used types for convenience
pub use error::{FeedbackError, GameError};
pub use game_state::GameStateMachine;
pub use host::{EventLog, GameEvent, GameHost, NullHost};
pub use playback::Playback;
pub use rng::{SimpleRng, SymbolSource};
pub use score::{Leaderboard, ScoreTracker};
pub use sequence::{Sequence, SequenceEngine};
pub use snapshot::GameSnapshot;
pub use validator::{InputValidator, PlayerInput};
