//! Playback controller - replays a sequence on a virtual clock.
//!
//! A [`Playback`] is a scheduled operation driven by [`Playback::tick`]. For
//! every symbol it waits `speed`, lights the symbol (plus a click), holds it
//! for `speed / 2`, then clears it before moving on. Leftover time carries
//! across step boundaries, so one 10s tick and 625 ticks of 16ms produce the
//! same signals in the same order.

use crate::host::{fire_feedback, GameHost};
use crate::sequence::Sequence;
use crate::types::{DifficultyTier, FeedbackKind, Symbol};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Waiting before symbol `index` lights up.
    Delay { index: usize },
    /// Symbol `index` is lit.
    Hold { index: usize },
    Done,
}

/// Replay of one sequence.
#[derive(Debug, Clone)]
pub struct Playback {
    sequence: Sequence,
    speed_ms: u32,
    hold_ms: u32,
    step: Step,
    /// Time left in the current step.
    remaining_ms: u32,
}

impl Playback {
    /// Replay starting now: the first symbol lights up after `tier.speed_ms()`.
    pub fn new(sequence: &Sequence, tier: DifficultyTier) -> Self {
        Self::scheduled(sequence, tier, 0)
    }

    /// Replay starting after an extra `delay_ms`.
    pub fn scheduled(sequence: &Sequence, tier: DifficultyTier, delay_ms: u32) -> Self {
        let step = if sequence.is_empty() {
            Step::Done
        } else {
            Step::Delay { index: 0 }
        };
        Self {
            sequence: sequence.clone(),
            speed_ms: tier.speed_ms(),
            hold_ms: tier.hold_ms(),
            step,
            remaining_ms: delay_ms.saturating_add(tier.speed_ms()),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.step == Step::Done
    }

    /// Symbol currently lit, if any.
    pub fn highlighted(&self) -> Option<Symbol> {
        match self.step {
            Step::Hold { index } => self.sequence.get(index).copied(),
            _ => None,
        }
    }

    /// Number of symbols already shown and cleared.
    pub fn shown(&self) -> usize {
        match self.step {
            Step::Delay { index } | Step::Hold { index } => index,
            Step::Done => self.sequence.len(),
        }
    }

    /// Advance the clock by `elapsed_ms`.
    ///
    /// Returns true once the last symbol has been cleared.
    pub fn tick<H: GameHost + ?Sized>(&mut self, elapsed_ms: u32, host: &mut H) -> bool {
        let mut budget = elapsed_ms;
        loop {
            if self.step == Step::Done {
                return true;
            }
            if budget < self.remaining_ms {
                self.remaining_ms -= budget;
                return false;
            }
            budget -= self.remaining_ms;

            match self.step {
                Step::Delay { index } => {
                    let symbol = self.sequence[index];
                    host.highlight(symbol);
                    fire_feedback(host, FeedbackKind::Click);
                    self.step = Step::Hold { index };
                    self.remaining_ms = self.hold_ms;
                }
                Step::Hold { index } => {
                    host.clear_highlight();
                    if index + 1 < self.sequence.len() {
                        self.step = Step::Delay { index: index + 1 };
                        self.remaining_ms = self.speed_ms;
                    } else {
                        self.step = Step::Done;
                        self.remaining_ms = 0;
                    }
                }
                Step::Done => {}
            }
        }
    }

    /// Stop the replay. A lit symbol is cleared first.
    pub fn cancel<H: GameHost + ?Sized>(&mut self, host: &mut H) {
        if matches!(self.step, Step::Hold { .. }) {
            host.clear_highlight();
        }
        self.step = Step::Done;
        self.remaining_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{EventLog, GameEvent};
    use crate::types::TICK_MS;

    fn seq(indices: &[u8]) -> Sequence {
        indices
            .iter()
            .map(|&i| Symbol::from_index(i).unwrap())
            .collect()
    }

    fn expected_events(indices: &[u8]) -> Vec<GameEvent> {
        let mut out = Vec::new();
        for &i in indices {
            out.push(GameEvent::Highlight(Symbol::from_index(i).unwrap()));
            out.push(GameEvent::Feedback(FeedbackKind::Click));
            out.push(GameEvent::ClearHighlight);
        }
        out
    }

    #[test]
    fn test_first_highlight_waits_full_speed() {
        let mut pb = Playback::new(&seq(&[2, 0, 3, 1]), DifficultyTier::Beginner);
        let mut log = EventLog::new();

        assert!(!pb.tick(999, &mut log));
        assert!(log.is_empty());
        assert_eq!(pb.highlighted(), None);

        pb.tick(1, &mut log);
        assert_eq!(
            log.take(),
            vec![
                GameEvent::Highlight(Symbol::Green),
                GameEvent::Feedback(FeedbackKind::Click)
            ]
        );
        assert_eq!(pb.highlighted(), Some(Symbol::Green));
    }

    #[test]
    fn test_highlight_held_for_half_speed() {
        let mut pb = Playback::new(&seq(&[1, 1]), DifficultyTier::Medium);
        let mut log = EventLog::new();

        pb.tick(800, &mut log);
        log.take();

        pb.tick(399, &mut log);
        assert!(log.is_empty());
        assert_eq!(pb.highlighted(), Some(Symbol::Red));

        pb.tick(1, &mut log);
        assert_eq!(log.take(), vec![GameEvent::ClearHighlight]);
        assert_eq!(pb.highlighted(), None);
        assert_eq!(pb.shown(), 1);
    }

    #[test]
    fn test_full_replay_duration() {
        // 4 * (1000 + 500) = 6000ms for beginner.
        let mut pb = Playback::new(&seq(&[0, 1, 2, 3]), DifficultyTier::Beginner);
        let mut log = EventLog::new();

        assert!(!pb.tick(5999, &mut log));
        assert!(pb.tick(1, &mut log));
        assert!(pb.is_finished());
        assert_eq!(log.take(), expected_events(&[0, 1, 2, 3]));
    }

    #[test]
    fn test_single_large_tick_matches_small_ticks() {
        let s = seq(&[3, 3, 0, 2, 1, 0]);

        let mut big = Playback::new(&s, DifficultyTier::Medium);
        let mut big_log = EventLog::new();
        assert!(big.tick(60_000, &mut big_log));

        let mut small = Playback::new(&s, DifficultyTier::Medium);
        let mut small_log = EventLog::new();
        while !small.tick(TICK_MS, &mut small_log) {}

        assert_eq!(big_log.events(), small_log.events());
        assert_eq!(big_log.take(), expected_events(&[3, 3, 0, 2, 1, 0]));
    }

    #[test]
    fn test_highlights_never_overlap() {
        let mut pb = Playback::new(&seq(&[0, 0, 1, 1, 2, 2, 3, 3]), DifficultyTier::Hard);
        let mut log = EventLog::new();
        while !pb.tick(7, &mut log) {}

        let mut lit = false;
        for ev in log.events() {
            match ev {
                GameEvent::Highlight(_) => {
                    assert!(!lit, "highlight while another symbol is lit");
                    lit = true;
                }
                GameEvent::ClearHighlight => {
                    assert!(lit);
                    lit = false;
                }
                _ => {}
            }
        }
        assert!(!lit);
    }

    #[test]
    fn test_scheduled_delay_adds_to_first_wait() {
        let mut pb = Playback::scheduled(&seq(&[1, 2, 3, 0]), DifficultyTier::Beginner, 1000);
        let mut log = EventLog::new();

        pb.tick(1999, &mut log);
        assert!(log.is_empty());
        pb.tick(1, &mut log);
        assert_eq!(log.events()[0], GameEvent::Highlight(Symbol::Red));
    }

    #[test]
    fn test_cancel_clears_lit_symbol() {
        let mut pb = Playback::new(&seq(&[0, 1, 2, 3]), DifficultyTier::Pro);
        let mut log = EventLog::new();

        pb.tick(400, &mut log);
        log.take();

        pb.cancel(&mut log);
        assert_eq!(log.take(), vec![GameEvent::ClearHighlight]);
        assert!(pb.is_finished());

        // Nothing more after cancel.
        assert!(pb.tick(10_000, &mut log));
        assert!(log.is_empty());
    }

    #[test]
    fn test_cancel_while_waiting_is_silent() {
        let mut pb = Playback::new(&seq(&[0, 1]), DifficultyTier::Pro);
        let mut log = EventLog::new();

        pb.tick(100, &mut log);
        pb.cancel(&mut log);
        assert!(log.is_empty());
    }

    #[test]
    fn test_empty_sequence_is_finished() {
        let mut pb = Playback::new(&Sequence::new(), DifficultyTier::Beginner);
        let mut log = EventLog::new();
        assert!(pb.is_finished());
        assert!(pb.tick(0, &mut log));
        assert!(log.is_empty());
    }
}
