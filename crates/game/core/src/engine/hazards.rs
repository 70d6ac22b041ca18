//! Initial placement of the player and every hazard.

use crate::config::GameConfig;
use crate::env::{CaveMap, GameRng, RollStream};
use crate::state::RoomId;

/// Starting positions drawn for one game. All rooms are distinct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Layout {
    pub player: RoomId,
    pub wumpus: RoomId,
    pub pits: Vec<RoomId>,
    pub bats: Vec<RoomId>,
}

/// Draws a layout with a partial Fisher-Yates shuffle of the rooms.
///
/// Callers must check `map.room_count() >= config.rooms_required()` first.
pub(crate) fn place(map: &CaveMap, config: &GameConfig, rng: &mut GameRng) -> Layout {
    let mut rooms: Vec<RoomId> = map.rooms().collect();
    let required = config.rooms_required().min(rooms.len());

    for i in 0..required {
        let j = i + rng.below(RollStream::Placement, rooms.len() - i);
        rooms.swap(i, j);
    }

    let pits_end = 2 + config.pits;
    Layout {
        player: rooms[0],
        wumpus: rooms[1],
        pits: rooms[2..pits_end].to_vec(),
        bats: rooms[pits_end..required].to_vec(),
    }
}
