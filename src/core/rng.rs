//! RNG module - deterministic position sampling
//!
//! A simple LCG keeps the simulation core free of OS entropy: the same seed
//! produces the same food and obstacle layout, which keeps sessions
//! replayable and tests deterministic.

use crate::types::Pos;

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
        // LCG formula: (a * state + c) mod m, a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Map through the high bits; the low bits of an LCG alternate with
        // a short period and would skip half the grid for even `max`.
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    /// Current generator state, usable as a seed for a follow-up session
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Sample a random grid-aligned position within the given pixel bounds.
///
/// Stateless with respect to the board: callers that need to avoid occupied
/// cells re-sample (see `FoodSpawner::respawn`).
pub fn random_cell(rng: &mut SimpleRng, grid_size: i32, width: i32, height: i32) -> Pos {
    let cols = (width / grid_size) as u32;
    let rows = (height / grid_size) as u32;
    let x = rng.next_range(cols) as i32 * grid_size;
    let y = rng.next_range(rows) as i32 * grid_size;
    Pos::new(x, y)
}
