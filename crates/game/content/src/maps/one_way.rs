//! Twenty rooms joined by one-way tunnels.
//!
//! Room `i` leads to `i + 1`, `i + 4` and `i + 9` (wrapping), so most rooms
//! can be seen from places they cannot be walked back to.

use wumpus_core::{CaveMap, CaveMapError, RoomId};

pub(super) const NAME: &str = "one-way";

const ROOMS: u16 = 20;
const STRIDES: [u16; 3] = [1, 4, 9];

pub(super) fn build() -> Result<CaveMap, CaveMapError> {
    let exits = (0..ROOMS)
        .map(|room| {
            STRIDES
                .iter()
                .map(|stride| RoomId((room + stride) % ROOMS))
                .collect()
        })
        .collect();
    CaveMap::new(NAME, exits)
}
