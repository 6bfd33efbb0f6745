//! RNG module - random symbol sources
//!
//! The sequence engine draws symbols through the [`SymbolSource`] trait so
//! callers can inject their own randomness. The default source is a small LCG
//! that replays the same symbols for the same seed.

use crate::types::{Symbol, SYMBOL_COUNT};

/// Anything that can hand out symbols, one at a time.
pub trait SymbolSource {
    fn next_symbol(&mut self) -> Symbol;
}

impl<S: SymbolSource + ?Sized> SymbolSource for &mut S {
    fn next_symbol(&mut self) -> Symbol {
        (**self).next_symbol()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// The high bits are used; the low bits of a power-of-two LCG cycle with a
    /// very short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl SymbolSource for SimpleRng {
    fn next_symbol(&mut self) -> Symbol {
        // next_range(4) is always < 4.
        Symbol::from_index(self.next_range(SYMBOL_COUNT as u32) as u8).unwrap_or(Symbol::Blue)
    }
}
