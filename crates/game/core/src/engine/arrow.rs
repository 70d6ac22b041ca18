//! Flight of a single crooked arrow.

use crate::action::ArrowPath;
use crate::env::{CaveMap, GameRng, RollStream};
use crate::state::RoomId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Flight {
    HitWumpus,
    HitPlayer,
    Missed,
}

/// A path is too crooked when it doubles straight back (`A -> B -> A`).
pub(crate) fn doubles_back(path: &ArrowPath) -> bool {
    path.rooms().windows(3).any(|rooms| rooms[0] == rooms[2])
}

/// Flies an arrow from the player's room along `path`.
///
/// Each aimed room is entered when a tunnel leads there from the arrow's
/// current room; otherwise the arrow takes a random tunnel instead.
pub(crate) fn fly(
    map: &CaveMap,
    path: &ArrowPath,
    player: RoomId,
    wumpus: RoomId,
    rng: &mut GameRng,
) -> Flight {
    let mut current = player;

    for &aimed in path.rooms() {
        current = if map.is_exit(current, aimed) {
            aimed
        } else {
            match rng.pick(RollStream::Arrow, map.exits(current)) {
                Some(room) => room,
                None => break,
            }
        };

        if current == wumpus {
            return Flight::HitWumpus;
        }
        if current == player {
            return Flight::HitPlayer;
        }
    }

    Flight::Missed
}
