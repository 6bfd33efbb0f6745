//! Input validator - checks player presses against the target sequence.

use arrayvec::ArrayVec;
use tracing::debug;

use crate::host::{fire_feedback, GameHost};
use crate::sequence::Sequence;
use crate::types::{FeedbackKind, InputOutcome, RoundState, Symbol, MAX_SEQUENCE_LEN};

/// Symbols the player has entered this round.
pub type PlayerInput = ArrayVec<Symbol, MAX_SEQUENCE_LEN>;

/// Accumulates presses and compares them position by position.
#[derive(Debug, Clone, Default)]
pub struct InputValidator {
    input: PlayerInput,
}

impl InputValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &PlayerInput {
        &self.input
    }

    pub fn clear(&mut self) {
        self.input.clear();
    }

    /// Handle one press.
    ///
    /// Returns `None` (and touches nothing) unless `state` is
    /// [`RoundState::AwaitingInput`]. A mismatch moves `state` to
    /// [`RoundState::GameOver`].
    pub fn submit<H: GameHost + ?Sized>(
        &mut self,
        state: &mut RoundState,
        target: &Sequence,
        symbol: Symbol,
        host: &mut H,
    ) -> Option<InputOutcome> {
        if *state != RoundState::AwaitingInput || self.input.len() >= target.len() {
            return None;
        }

        fire_feedback(host, FeedbackKind::Click);
        self.input.push(symbol);

        let index = self.input.len() - 1;
        if target[index] != symbol {
            debug!(
                position = index,
                expected = target[index].as_str(),
                pressed = symbol.as_str(),
                "wrong press"
            );
            fire_feedback(host, FeedbackKind::Failure);
            *state = RoundState::GameOver;
            host.round_state_changed(*state);
            return Some(InputOutcome::Wrong);
        }

        if self.input.len() == target.len() {
            Some(InputOutcome::SequenceComplete)
        } else {
            Some(InputOutcome::Correct)
        }
    }
}
