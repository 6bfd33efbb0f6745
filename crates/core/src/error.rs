//! Error types raised by the game core.
//!
//! A wrong press is not an error; it is reported as [`InputOutcome::Wrong`].
//!
//! [`InputOutcome::Wrong`]: crate::types::InputOutcome::Wrong

use thiserror::Error;

/// Rejected game operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("symbol index {0} is outside 0..=3")]
    InvalidSymbol(u8),

    #[error("a run is already in progress")]
    RoundInProgress,
}

/// Failures reported by the audio feedback collaborator.
///
/// The core logs these and keeps playing.
#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("feedback unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
