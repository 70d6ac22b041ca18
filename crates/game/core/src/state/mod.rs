//! Values the host emits to describe the world between turns.
//!
//! Nothing in this module carries rules: a [`TurnState`] is a read-only view
//! built by the host, and [`Verdict`] is its final word on a finished game.
mod room;
mod senses;
mod turn;

pub use room::RoomId;
pub use senses::Senses;
pub use turn::{HazardReveal, HostStep, TurnDetail, TurnState, Verdict};
