//! Collaborator seam between the game core and whatever presents it.
//!
//! The core never draws, plays sound or opens dialogs itself. It reports
//! through a [`GameHost`]: highlight signals during replay, round state
//! changes, score and leaderboard updates, the game-over announcement, and
//! audio feedback requests. Every method has a no-op default so a host only
//! implements what it cares about.

use tracing::warn;

use crate::error::FeedbackError;
use crate::score::Leaderboard;
use crate::types::{FeedbackKind, RoundState, Symbol};

/// Receiver for everything the core wants the outside world to show or play.
pub trait GameHost {
    fn highlight(&mut self, _symbol: Symbol) {}

    fn clear_highlight(&mut self) {}

    fn round_state_changed(&mut self, _state: RoundState) {}

    fn score_changed(&mut self, _score: u32) {}

    fn leaderboard_changed(&mut self, _leaderboard: &Leaderboard) {}

    fn announce_game_over(&mut self, _final_score: u32) {}

    /// Play an audio cue. Errors are logged by the core and otherwise ignored.
    fn play_feedback(&mut self, _kind: FeedbackKind) -> Result<(), FeedbackError> {
        Ok(())
    }
}

/// Fire-and-forget feedback: failures degrade to a warning.
pub(crate) fn fire_feedback<H: GameHost + ?Sized>(host: &mut H, kind: FeedbackKind) {
    if let Err(err) = host.play_feedback(kind) {
        warn!(?kind, error = %err, "feedback failed");
    }
}

/// Host that ignores every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHost;

impl GameHost for NullHost {}

/// One recorded [`GameHost`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Highlight(Symbol),
    ClearHighlight,
    RoundState(RoundState),
    Score(u32),
    Leaderboard(Vec<u32>),
    GameOver(u32),
    Feedback(FeedbackKind),
}

/// Host that records every call in order.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take and clear the recorded events.
    pub fn take(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl GameHost for EventLog {
    fn highlight(&mut self, symbol: Symbol) {
        self.events.push(GameEvent::Highlight(symbol));
    }

    fn clear_highlight(&mut self) {
        self.events.push(GameEvent::ClearHighlight);
    }

    fn round_state_changed(&mut self, state: RoundState) {
        self.events.push(GameEvent::RoundState(state));
    }

    fn score_changed(&mut self, score: u32) {
        self.events.push(GameEvent::Score(score));
    }

    fn leaderboard_changed(&mut self, leaderboard: &Leaderboard) {
        self.events
            .push(GameEvent::Leaderboard(leaderboard.entries().to_vec()));
    }

    fn announce_game_over(&mut self, final_score: u32) {
        self.events.push(GameEvent::GameOver(final_score));
    }

    fn play_feedback(&mut self, kind: FeedbackKind) -> Result<(), FeedbackError> {
        self.events.push(GameEvent::Feedback(kind));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenSpeaker {
        attempts: u32,
    }

    impl GameHost for BrokenSpeaker {
        fn play_feedback(&mut self, _kind: FeedbackKind) -> Result<(), FeedbackError> {
            self.attempts += 1;
            Err(FeedbackError::Unavailable("no audio device".into()))
        }
    }

    #[test]
    fn test_fire_feedback_swallows_errors() {
        let mut host = BrokenSpeaker { attempts: 0 };
        fire_feedback(&mut host, FeedbackKind::Click);
        fire_feedback(&mut host, FeedbackKind::Failure);
        assert_eq!(host.attempts, 2);
    }

    #[test]
    fn test_event_log_records_in_order() {
        let mut log = EventLog::new();
        log.highlight(Symbol::Red);
        fire_feedback(&mut log, FeedbackKind::Click);
        log.clear_highlight();

        assert_eq!(
            log.take(),
            vec![
                GameEvent::Highlight(Symbol::Red),
                GameEvent::Feedback(FeedbackKind::Click),
                GameEvent::ClearHighlight,
            ]
        );
        assert!(log.is_empty());
    }
}
