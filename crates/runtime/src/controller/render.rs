//! Text shown to the player.
use std::io;

use wumpus_core::{ActionResult, Outcome, RoomId, TurnDetail, TurnState};

use crate::console::Console;

pub const SNATCHED: &str = "ZAP -- Super Bat snatch! Elsewhereville for you!";

/// Message for a host result; `None` for results that print nothing.
pub fn result_message(result: ActionResult) -> Option<&'static str> {
    let message = match result {
        ActionResult::Continue => return None,
        ActionResult::MetWumpus => "TSK TSK TSK - Wumpus got you!",
        ActionResult::FellInPit => "YYYIIIIEEEE . . . Fell in a pit.",
        ActionResult::Exhausted => "OOF! You collapse from exhaustion.",
        ActionResult::NotAnExit => "BONK! That's not a possible move.",
        ActionResult::TooCrooked => "Arrows aren't that crooked - try another room",
        ActionResult::WumpusMissed => {
            "SWISH! The wumpus didn't like that. He may have moved to a quieter room"
        }
        ActionResult::WumpusKilled => "AHA! You got the wumpus!",
        ActionResult::KilledByGroggyWumpus => "CLANG! Missed and a groggy wumpus just ate you!",
        ActionResult::OutOfArrows => {
            "WHIZZ! Oh no! Out of arrows. At night the ice weasels come for you..."
        }
        ActionResult::ShotSelf => "LOOK OUT! Thunk! You shot yourself!",
    };
    Some(message)
}

/// Formats rooms the way the player reads them: `[2, 5, 8]`.
pub fn room_list(rooms: impl IntoIterator<Item = RoomId>) -> String {
    let numbers: Vec<String> = rooms.into_iter().map(|room| room.to_string()).collect();
    format!("[{}]", numbers.join(", "))
}

pub(crate) fn status<C: Console>(console: &mut C, state: &TurnState) -> io::Result<()> {
    if let Some(detail) = &state.detail {
        self::detail(console, detail)?;
    }

    if state.senses.near_pit() {
        console.write_line("I feel a draft")?;
    }
    if state.senses.near_bats() {
        console.write_line("I hear bats!")?;
    }
    if state.senses.near_wumpus() {
        console.write_line("I smell a wumpus!")?;
    }

    console.write_line(&format!(
        "You are in room {}. Tunnels lead to {}.",
        state.room,
        room_list(state.exits.iter().copied())
    ))?;

    let visible: Vec<RoomId> = state.visible_but_unreachable().collect();
    if !visible.is_empty() {
        console.write_line(&format!(
            "You can also see (but cannot get to) {}",
            room_list(visible)
        ))?;
    }
    Ok(())
}

fn detail<C: Console>(console: &mut C, detail: &TurnDetail) -> io::Result<()> {
    console.write_line(&format!(
        "[Turn {}] Arrows: {}, moves left: {}",
        detail.turn, detail.arrows, detail.moves_left
    ))?;
    if let Some(hazards) = &detail.hazards {
        console.write_line(&format!(
            "[Hazards] Wumpus: {}, pits: {}, bats: {}",
            hazards.wumpus,
            room_list(hazards.pits.iter().copied()),
            room_list(hazards.bats.iter().copied())
        ))?;
    }
    Ok(())
}

pub(crate) fn outcome<C: Console>(console: &mut C, outcome: Outcome) -> io::Result<()> {
    if outcome.snatched() {
        console.write_line(SNATCHED)?;
    }
    if let Some(message) = result_message(outcome.result()) {
        console.write_line(message)?;
    }
    Ok(())
}
