//! Game state module - the top-level state machine
//!
//! This module ties together the sequence engine, playback, input validation
//! and scoring. It owns all session state and drives the round lifecycle:
//!
//! ```text
//! NotStarted --start_game--> RoundInProgress (Playing -> AwaitingInput)
//!     ^                          |        ^
//!     |                          |        | sequence complete: score + 1,
//!     |                          |        | new sequence, replay after 1000ms
//!     |                          |        +------------------------------
//!     |                        wrong press
//!     |                          v
//!     +--acknowledge------- GameOverDialog
//! ```
//!
//! `restart` returns to NotStarted from anywhere.

use tracing::{debug, info};

use crate::error::GameError;
use crate::host::GameHost;
use crate::playback::Playback;
use crate::rng::{SimpleRng, SymbolSource};
use crate::score::{Leaderboard, ScoreTracker};
use crate::sequence::{Sequence, SequenceEngine};
use crate::snapshot::GameSnapshot;
use crate::types::*;
use crate::validator::{InputValidator, PlayerInput};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameStateMachine<S = SimpleRng> {
    source: S,
    tier: DifficultyTier,
    round_state: RoundState,
    sequence: Sequence,
    validator: InputValidator,
    scores: ScoreTracker,
    /// Replay in progress or scheduled (only while `Playing`).
    playback: Option<Playback>,
    /// Monotonic run id (increments on every start).
    run_id: u32,
    /// Round number within the current run, starting at 1.
    round: u32,
}

impl GameStateMachine<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_source(SimpleRng::new(seed))
    }
}

impl Default for GameStateMachine<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<S: SymbolSource> GameStateMachine<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            tier: DifficultyTier::default(),
            round_state: RoundState::Idle,
            sequence: Sequence::new(),
            validator: InputValidator::new(),
            scores: ScoreTracker::new(),
            playback: None,
            run_id: 0,
            round: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.round_state.phase()
    }

    pub fn round_state(&self) -> RoundState {
        self.round_state
    }

    pub fn tier(&self) -> DifficultyTier {
        self.tier
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn player_input(&self) -> &PlayerInput {
        self.validator.input()
    }

    pub fn score(&self) -> u32 {
        self.scores.score()
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        self.scores.leaderboard()
    }

    pub fn run_id(&self) -> u32 {
        self.run_id
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Symbol lit by the replay right now.
    pub fn highlighted(&self) -> Option<Symbol> {
        self.playback.as_ref().and_then(Playback::highlighted)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.phase = self.phase();
        out.round_state = self.round_state;
        out.tier = self.tier;
        out.sequence_len = self.sequence.len();
        out.input_len = self.validator.input().len();
        out.shown = match &self.playback {
            Some(pb) => pb.shown(),
            None => self.sequence.len(),
        };
        out.highlighted = self.highlighted();
        out.score = self.scores.score();
        out.leaderboard.clear();
        out.leaderboard
            .extend(self.scores.leaderboard().entries().iter().copied());
        out.round = self.round;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Start a run at `tier`: score 0, empty input, fresh sequence, replay begins.
    pub fn start_game<H: GameHost + ?Sized>(
        &mut self,
        tier: DifficultyTier,
        host: &mut H,
    ) -> Result<(), GameError> {
        if self.phase() == Phase::RoundInProgress {
            return Err(GameError::RoundInProgress);
        }

        self.tier = tier;
        self.scores.reset();
        self.validator.clear();
        self.run_id = self.run_id.wrapping_add(1);
        self.round = 1;
        host.score_changed(0);

        info!(%tier, run = self.run_id, "run started");
        self.begin_round(0, host);
        Ok(())
    }

    /// Feed one button press.
    ///
    /// Returns `None` when the press is discarded (anything but `AwaitingInput`).
    pub fn press<H: GameHost + ?Sized>(
        &mut self,
        symbol: Symbol,
        host: &mut H,
    ) -> Option<InputOutcome> {
        let outcome = self
            .validator
            .submit(&mut self.round_state, &self.sequence, symbol, host)?;

        match outcome {
            InputOutcome::Correct => {}
            InputOutcome::Wrong => self.end_run(host),
            InputOutcome::SequenceComplete => self.complete_round(host),
        }
        Some(outcome)
    }

    /// Like [`press`](Self::press) but takes a raw button index.
    ///
    /// Indices outside 0..=3 are rejected without touching any state.
    pub fn press_index<H: GameHost + ?Sized>(
        &mut self,
        index: u8,
        host: &mut H,
    ) -> Result<Option<InputOutcome>, GameError> {
        let symbol = Symbol::from_index(index).ok_or(GameError::InvalidSymbol(index))?;
        Ok(self.press(symbol, host))
    }

    /// Advance the virtual clock.
    ///
    /// Returns true when something visible changed (a symbol lit or cleared,
    /// or the replay finished and input opened).
    pub fn tick<H: GameHost + ?Sized>(&mut self, elapsed_ms: u32, host: &mut H) -> bool {
        let Some(playback) = self.playback.as_mut() else {
            return false;
        };

        let shown_before = playback.shown();
        let lit_before = playback.highlighted();
        let finished = playback.tick(elapsed_ms, host);
        let changed = finished
            || playback.shown() != shown_before
            || playback.highlighted() != lit_before;

        if finished {
            self.playback = None;
            self.set_round_state(RoundState::AwaitingInput, host);
            debug!(round = self.round, "replay finished, awaiting input");
        }

        changed
    }

    /// Dismiss the game-over dialog and return to the tier menu.
    pub fn acknowledge_game_over<H: GameHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.round_state != RoundState::GameOver {
            return false;
        }
        self.reset_to_menu(host);
        true
    }

    /// Abandon whatever is going on and return to the tier menu.
    ///
    /// The abandoned run is not recorded in the leaderboard.
    pub fn restart<H: GameHost + ?Sized>(&mut self, host: &mut H) {
        if let Some(mut playback) = self.playback.take() {
            playback.cancel(host);
        }
        if self.phase() == Phase::RoundInProgress {
            info!(score = self.scores.score(), "run abandoned");
        }
        self.reset_to_menu(host);
    }

    /// Apply a player action
    pub fn apply_action<H: GameHost + ?Sized>(&mut self, action: GameAction, host: &mut H) -> bool {
        match action {
            GameAction::Press(symbol) => self.press(symbol, host).is_some(),
            GameAction::Start(tier) => self.start_game(tier, host).is_ok(),
            GameAction::Acknowledge => self.acknowledge_game_over(host),
            GameAction::Restart => {
                self.restart(host);
                true
            }
        }
    }

    /// Generate a new sequence and schedule its replay after `delay_ms`.
    fn begin_round<H: GameHost + ?Sized>(&mut self, delay_ms: u32, host: &mut H) {
        self.sequence = SequenceEngine::generate(self.tier, &mut self.source);
        self.playback = Some(Playback::scheduled(&self.sequence, self.tier, delay_ms));
        self.set_round_state(RoundState::Playing, host);
        debug!(
            round = self.round,
            len = self.sequence.len(),
            delay_ms,
            "replay scheduled"
        );
    }

    fn complete_round<H: GameHost + ?Sized>(&mut self, host: &mut H) {
        self.scores.on_round_complete();
        host.score_changed(self.scores.score());
        self.validator.clear();

        debug!(score = self.scores.score(), round = self.round, "round cleared");
        self.round = self.round.wrapping_add(1);
        self.begin_round(ROUND_PAUSE_MS, host);
    }

    fn end_run<H: GameHost + ?Sized>(&mut self, host: &mut H) {
        // Game over preempts any replay still scheduled.
        if let Some(mut playback) = self.playback.take() {
            playback.cancel(host);
        }

        let final_score = self.scores.score();
        self.scores.on_round_failed(final_score);
        host.leaderboard_changed(self.scores.leaderboard());
        host.announce_game_over(final_score);
        info!(final_score, tier = %self.tier, run = self.run_id, "game over");
    }

    fn reset_to_menu<H: GameHost + ?Sized>(&mut self, host: &mut H) {
        self.scores.reset();
        self.validator.clear();
        self.sequence.clear();
        self.round = 0;
        host.score_changed(0);
        self.set_round_state(RoundState::Idle, host);
    }

    fn set_round_state<H: GameHost + ?Sized>(&mut self, state: RoundState, host: &mut H) {
        if self.round_state != state {
            debug!(from = self.round_state.as_str(), to = state.as_str(), "round state");
            self.round_state = state;
            host.round_state_changed(state);
        }
    }
}
