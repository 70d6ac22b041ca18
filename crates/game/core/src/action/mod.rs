//! Commands the front-end dispatches and the results the host reports.
//!
//! A [`Command`] is the parsed form of a player decision; the host answers
//! every command with an [`ActionResult`] (wrapped in an [`Outcome`] so the
//! front-end knows which kind of action it rendered).
mod path;

pub use path::{ArrowPath, PathError};

use crate::state::RoomId;

/// One player action for the current turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Walk through a tunnel into the given room.
    Move(RoomId),
    /// Fire a crooked arrow along the given rooms.
    Shoot(ArrowPath),
}

impl Command {
    /// Selector character the player types to choose this command.
    pub const fn selector(&self) -> char {
        match self {
            Command::Move(_) => 'm',
            Command::Shoot(_) => 's',
        }
    }
}

/// Outcome code of a move or shoot, defined by the host.
///
/// The front-end consumes these values to pick a message; it never derives
/// win/lose decisions from them.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "kebab-case")]
pub enum ActionResult {
    /// Nothing notable happened; the game goes on.
    Continue,
    /// Walked into the wumpus.
    MetWumpus,
    /// Walked into a bottomless pit.
    FellInPit,
    /// Ran out of moves.
    Exhausted,
    /// Target room is not reachable from the current room.
    NotAnExit,
    /// Arrow path doubles back on itself; no arrow was spent.
    TooCrooked,
    /// Arrow missed and the wumpus woke up.
    WumpusMissed,
    /// Arrow hit the wumpus.
    WumpusKilled,
    /// Arrow missed and the woken wumpus wandered into the player.
    KilledByGroggyWumpus,
    /// Last arrow missed.
    OutOfArrows,
    /// Arrow came back around into the player's room.
    ShotSelf,
}

impl ActionResult {
    /// Stable identifier used in logs and transcript digests.
    pub fn code(self) -> &'static str {
        self.into()
    }
}

/// Result of `GameHost::move_to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub result: ActionResult,
    /// Super bats carried the player to another room during the move.
    pub snatched: bool,
}

impl MoveOutcome {
    pub const fn new(result: ActionResult, snatched: bool) -> Self {
        Self { result, snatched }
    }
}

/// Dispatched command paired with the host's answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Moved(MoveOutcome),
    Shot(ActionResult),
}

impl Outcome {
    pub const fn result(self) -> ActionResult {
        match self {
            Outcome::Moved(outcome) => outcome.result,
            Outcome::Shot(result) => result,
        }
    }

    pub const fn snatched(self) -> bool {
        matches!(self, Outcome::Moved(MoveOutcome { snatched: true, .. }))
    }
}
