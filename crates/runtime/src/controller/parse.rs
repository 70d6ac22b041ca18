//! Parsing of the player's answers.
//!
//! Room numbers are typed 1-indexed and converted with
//! [`RoomId::from_display`]. Nothing here knows the cave layout; whether a
//! room is reachable is for the host to decide.
use thiserror::Error;
use wumpus_core::{ArrowPath, RoomId};

/// Rejected player input. The display text is what the player sees.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("That's not an option in this game.")]
    Selector { raw: String },

    #[error("Invalid input room value: {raw}. Try again.")]
    RoomValue { raw: String },

    #[error("Invalid input room list: {raw}. Try again.")]
    RoomList { raw: String },
}

/// Answer to the move-or-shoot prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selector {
    Move,
    Shoot,
}

pub fn selector(raw: &str) -> Result<Selector, InputError> {
    match raw.trim() {
        "m" | "M" => Ok(Selector::Move),
        "s" | "S" => Ok(Selector::Shoot),
        _ => Err(InputError::Selector { raw: raw.to_owned() }),
    }
}

/// Parses a single room number.
pub fn room(raw: &str) -> Result<RoomId, InputError> {
    room_number(raw).ok_or_else(|| InputError::RoomValue { raw: raw.to_owned() })
}

/// Parses a comma separated list of one to five room numbers.
pub fn arrow_path(raw: &str) -> Result<ArrowPath, InputError> {
    let invalid = || InputError::RoomList { raw: raw.to_owned() };

    let rooms = raw
        .split(',')
        .map(room_number)
        .collect::<Option<Vec<_>>>()
        .ok_or_else(invalid)?;

    ArrowPath::new(rooms).map_err(|_| invalid())
}

fn room_number(token: &str) -> Option<RoomId> {
    token
        .trim()
        .parse::<u32>()
        .ok()
        .and_then(RoomId::from_display)
}
