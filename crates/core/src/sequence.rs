//! Sequence engine - builds the target pattern for a round.

use arrayvec::ArrayVec;

use crate::rng::SymbolSource;
use crate::types::{DifficultyTier, Symbol, MAX_SEQUENCE_LEN};

/// Ordered target pattern for one round (stack-only, at most 10 symbols).
pub type Sequence = ArrayVec<Symbol, MAX_SEQUENCE_LEN>;

/// Generates sequences of independently drawn symbols.
pub struct SequenceEngine;

impl SequenceEngine {
    /// Draw `tier.sequence_length()` symbols from `source`, with replacement.
    ///
    /// Every call produces a fresh sequence; nothing is carried over from earlier rounds.
    pub fn generate<S: SymbolSource + ?Sized>(tier: DifficultyTier, source: &mut S) -> Sequence {
        let mut sequence = Sequence::new();
        for _ in 0..tier.sequence_length() {
            sequence.push(source.next_symbol());
        }
        sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    struct Cycle(u8);

    impl SymbolSource for Cycle {
        fn next_symbol(&mut self) -> Symbol {
            let s = Symbol::from_index(self.0 % 4).unwrap();
            self.0 += 1;
            s
        }
    }

    #[test]
    fn test_generate_length_per_tier() {
        let mut rng = SimpleRng::new(12345);
        for tier in DifficultyTier::ALL {
            let seq = SequenceEngine::generate(tier, &mut rng);
            assert_eq!(seq.len(), tier.sequence_length());
            assert!(seq.iter().all(|s| s.index() < 4));
        }
    }

    #[test]
    fn test_generate_uses_injected_source() {
        let seq = SequenceEngine::generate(DifficultyTier::Medium, &mut Cycle(2));
        let idx: Vec<u8> = seq.iter().map(|s| s.index()).collect();
        assert_eq!(idx, vec![2, 3, 0, 1, 2, 3]);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a = SequenceEngine::generate(DifficultyTier::Pro, &mut SimpleRng::new(99));
        let b = SequenceEngine::generate(DifficultyTier::Pro, &mut SimpleRng::new(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_repeated_generation_is_not_cumulative() {
        let mut rng = SimpleRng::new(5);
        for _ in 0..1000 {
            let seq = SequenceEngine::generate(DifficultyTier::Beginner, &mut rng);
            assert_eq!(seq.len(), 4);
        }
    }
}
