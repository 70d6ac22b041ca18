//! Front-end runtime for Hunt the Wumpus.
//!
//! This crate records every decision the player makes during a live game and
//! can play the same game back against a fresh host built from the same seed
//! and map. It never applies game rules itself; everything it knows about the
//! world arrives through [`wumpus_core::GameHost`].
//!
//! Modules are organized by responsibility:
//! - [`decision`] holds the decision log and its sealed, read-only form
//! - [`controller`] turns host turn states into prompts and commands
//! - [`session`] drives a live game and collects its transcript
//! - [`replay`] re-runs a recorded game with full detail
//! - [`console`] abstracts the line-oriented terminal
pub mod console;
pub mod controller;
pub mod decision;
pub mod replay;
pub mod session;
pub mod transcript;

mod error;

pub use console::{Console, ScriptedConsole};
pub use controller::{InputError, Selector, TurnController};
pub use decision::{Decision, DecisionLog, DecisionReader, LogError, Recording};
pub use error::{Result, RuntimeError};
pub use replay::{ReplayDriver, ReplayReport};
pub use session::{GameReport, LiveReport, Session, play};
pub use transcript::{Transcript, TranscriptEntry};
