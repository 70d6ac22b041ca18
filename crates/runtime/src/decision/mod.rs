//! Decisions made by the player, in the order they were made.
//!
//! The log moves through three stages, each a separate type:
//! [`DecisionLog`] accepts new decisions during live play, [`Recording`] is the
//! sealed and immutable result, and [`DecisionReader`] hands the decisions
//! back one at a time during replay.
mod error;
mod log;
mod reader;

pub use error::LogError;
pub use log::{DecisionLog, Recording};
pub use reader::DecisionReader;

use serde::{Deserialize, Serialize};
use wumpus_core::Command;

/// One parsed command together with the text the player typed for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub command: Command,
    /// Answer to the move-or-shoot prompt, exactly as entered.
    pub selector: String,
    /// Answer to the room prompt, exactly as entered.
    pub raw: String,
}

impl Decision {
    /// Decision whose selector is the command's canonical letter.
    pub fn new(command: Command, raw: impl Into<String>) -> Self {
        let selector = command.selector().to_string();
        Self::typed(command, selector, raw)
    }

    /// Decision keeping both answers exactly as the player typed them.
    pub fn typed(command: Command, selector: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            command,
            selector: selector.into(),
            raw: raw.into(),
        }
    }
}
