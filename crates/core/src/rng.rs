//! RNG module - injectable random source for spawning
//!
//! The engine never touches ambient randomness. It draws shapes, offsets and colors
//! through [`PieceRng`], so a seeded [`SimpleRng`] gives reproducible games and tests
//! can script exact draws.

/// Source of uniform random numbers for piece generation
pub trait PieceRng {
    /// Next raw 32-bit value
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0, max)`; `max == 0` yields 0
    fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        // Multiply-shift keeps the high bits, which are the good ones for an LCG.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Uniform value in the inclusive range `[lo, hi]`; `lo` when the range is empty
    fn next_between(&mut self, lo: i16, hi: i16) -> i16 {
        if hi < lo {
            return lo;
        }
        let span = (hi as i32 - lo as i32 + 1) as u32;
        (lo as i32 + self.next_range(span) as i32) as i16
    }

    /// Pick one element uniformly
    fn choose<T: Copy>(&mut self, items: &[T]) -> T
    where
        Self: Sized,
    {
        debug_assert!(!items.is_empty(), "choose from an empty slice");
        items[self.next_range(items.len() as u32) as usize]
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

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl PieceRng for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // (a * state + c) mod 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
