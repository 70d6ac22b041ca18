//! Game Host contract and reference engine for Hunt the Wumpus.
//!
//! `wumpus-core` defines the vocabulary shared by the host and the front-end
//! (rooms, senses, turn states, commands, results) together with the
//! [`GameHost`] trait the front-end drives. [`engine::WumpusHost`] is the
//! reference implementation of the classic rules; front-end crates only
//! depend on the trait and the types re-exported here.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod host;
pub mod state;

pub use action::{ActionResult, ArrowPath, Command, MoveOutcome, Outcome, PathError};
pub use config::GameConfig;
pub use engine::{HostError, WumpusHost};
pub use env::{
    CaveMap, CaveMapError, GameRng, MapRef, PcgRng, RngOracle, RollStream, compute_seed,
};
pub use host::{GameHost, HostFactory, HostOptions, TurnHandler};
pub use state::{HazardReveal, HostStep, RoomId, Senses, TurnDetail, TurnState, Verdict};
