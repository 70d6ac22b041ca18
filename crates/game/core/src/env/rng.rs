//! RNG oracle for deterministic random number generation.
//!
//! This module provides a trait-based RNG system that ensures deterministic
//! random number generation for hazard placement, bat flights, stray arrows
//! and wumpus movement.
//!
//! # Determinism
//!
//! All RNG implementations must be deterministic: given the same seed,
//! they must produce the same sequence of random numbers. Replaying a game
//! relies on this: the replay host is rebuilt from the recorded seed and must
//! make the same draws for the same decisions.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a d100 (1-100 inclusive).
    fn roll_d100(&self, seed: u64) -> u32 {
        (self.next_u32(seed) % 100) + 1
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32(seed) % range)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// This implementation uses PCG-XSH-RR, which produces 32-bit output from
/// 64-bit state.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Compute deterministic seed from game components.
///
/// # Arguments
///
/// * `game_seed` - Base seed set at game start (for replay/determinism)
/// * `nonce` - Draw sequence number (increments each draw)
/// * `stream` - Which part of the host is rolling (see [`RollStream`])
pub fn compute_seed(game_seed: u64, nonce: u64, stream: u32) -> u64 {
    // SplitMix64 / FxHash multipliers
    let mut hash = game_seed;

    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (stream as u64).wrapping_mul(0x517cc1b727220a95);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Host subsystem a draw belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum RollStream {
    Placement = 0,
    Bats = 1,
    Arrow = 2,
    Wumpus = 3,
}

/// Seeded random source owned by a single host.
///
/// Every draw advances an internal nonce, so the sequence of values depends
/// only on the seed and on the order of draws. Two hosts built from the same
/// seed and fed the same commands make identical draws.
#[derive(Clone, Debug)]
pub struct GameRng<R = PcgRng> {
    oracle: R,
    seed: u64,
    nonce: u64,
}

impl GameRng<PcgRng> {
    pub fn new(seed: u64) -> Self {
        Self::with_oracle(PcgRng, seed)
    }
}

impl<R: RngOracle> GameRng<R> {
    pub fn with_oracle(oracle: R, seed: u64) -> Self {
        Self {
            oracle,
            seed,
            nonce: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of draws made so far.
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// Uniform index in `0..bound`. Returns 0 when `bound` is 0.
    pub fn below(&mut self, stream: RollStream, bound: usize) -> usize {
        let seed = self.next_seed(stream);
        let Some(max) = bound.checked_sub(1) else {
            return 0;
        };
        let max = u32::try_from(max).unwrap_or(u32::MAX);
        self.oracle.range(seed, 0, max) as usize
    }

    /// True with the given percent chance.
    pub fn percent(&mut self, stream: RollStream, chance: u32) -> bool {
        let seed = self.next_seed(stream);
        self.oracle.roll_d100(seed) <= chance
    }

    /// Picks one element of `items` uniformly.
    pub fn pick<T: Copy>(&mut self, stream: RollStream, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let index = self.below(stream, items.len());
        items.get(index).copied()
    }

    fn next_seed(&mut self, stream: RollStream) -> u64 {
        let seed = compute_seed(self.seed, self.nonce, stream as u32);
        self.nonce += 1;
        seed
    }
}
