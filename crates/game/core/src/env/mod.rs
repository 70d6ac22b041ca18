//! Read-only world data and deterministic randomness owned by the host.
//!
//! [`CaveMap`] is the static tunnel graph; [`GameRng`] is the seeded random
//! source a host draws from. Both are reconstructed identically from
//! `(seed, map)` when a game is replayed.
mod map;
mod rng;

pub use map::{CaveMap, CaveMapError, MapRef};
pub use rng::{GameRng, PcgRng, RngOracle, RollStream, compute_seed};
