//! RNG module - seedable randomness for tile spawning
//!
//! The engine draws two independent values per spawn: which empty cell,
//! then which tile value. Both go through [`RandomSource`], so tests can
//! inject scripted sequences and assert exact spawn outcomes.
//!
//! [`SimpleRng`] is the default source: a small deterministic LCG.

/// A source of uniform random draws.
///
/// Implementors only need [`next_u32`](RandomSource::next_u32). The provided
/// [`next_range`](RandomSource::next_range) maps it onto `[0, max)` using the
/// high bits of the draw, which are the well-mixed ones for an LCG.
pub trait RandomSource {
    /// Next raw 32-bit draw
    fn next_u32(&mut self) -> u32;

    /// Uniform draw in `[0, max)`; `max` must be non-zero
    fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0, "next_range called with max = 0");
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
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

    /// Resume from a value returned by [`state`](SimpleRng::state).
    ///
    /// Unlike [`new`](SimpleRng::new), 0 is taken as-is.
    pub fn from_state(state: u32) -> Self {
        Self { state }
    }

    /// Current internal state; [`from_state`](SimpleRng::from_state) resumes from it
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }
}
