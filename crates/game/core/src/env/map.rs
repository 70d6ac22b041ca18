use core::fmt;

use crate::state::RoomId;

/// Name of a cave map known to a host factory.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapRef(String);

impl MapRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MapRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MapRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CaveMapError {
    #[error("cave map has no rooms")]
    Empty,

    #[error("cave map has {count} rooms, more than a room id can address")]
    TooManyRooms { count: usize },

    #[error("room number {number} is not valid (rooms are numbered from 1)")]
    InvalidRoomNumber { number: u32 },

    #[error("tunnel from room {from} leads to room {to}, which does not exist")]
    TunnelOutOfRange { from: RoomId, to: RoomId },

    #[error("room {room} has a tunnel to itself")]
    SelfTunnel { room: RoomId },

    #[error("room {from} lists the tunnel to room {to} twice")]
    DuplicateTunnel { from: RoomId, to: RoomId },

    #[error("room {room} has no exits")]
    DeadEnd { room: RoomId },
}

/// Static tunnel graph of a cave.
///
/// Tunnels are directed: `exits(a)` containing `b` lets the player walk from
/// `a` to `b`, and makes `a` one of the `entrances(b)`. Symmetric caves list
/// every tunnel in both directions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaveMap {
    name: String,
    exits: Vec<Vec<RoomId>>,
    entrances: Vec<Vec<RoomId>>,
}

impl CaveMap {
    /// Builds a map from 0-indexed exit lists, one list per room.
    pub fn new(name: impl Into<String>, exits: Vec<Vec<RoomId>>) -> Result<Self, CaveMapError> {
        if exits.is_empty() {
            return Err(CaveMapError::Empty);
        }
        let count = exits.len();
        if u16::try_from(count).is_err() {
            return Err(CaveMapError::TooManyRooms { count });
        }

        let mut entrances = vec![Vec::new(); count];
        for (index, tunnels) in exits.iter().enumerate() {
            let from = RoomId(index as u16);
            if tunnels.is_empty() {
                return Err(CaveMapError::DeadEnd { room: from });
            }
            for (position, &to) in tunnels.iter().enumerate() {
                if to.index() >= count {
                    return Err(CaveMapError::TunnelOutOfRange { from, to });
                }
                if to == from {
                    return Err(CaveMapError::SelfTunnel { room: from });
                }
                if tunnels[..position].contains(&to) {
                    return Err(CaveMapError::DuplicateTunnel { from, to });
                }
                entrances[to.index()].push(from);
            }
        }

        Ok(Self {
            name: name.into(),
            exits,
            entrances,
        })
    }

    /// Builds a map from a 1-indexed table, as rooms are numbered for players.
    pub fn from_display_table(
        name: impl Into<String>,
        table: &[&[u32]],
    ) -> Result<Self, CaveMapError> {
        let exits = table
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&number| {
                        RoomId::from_display(number)
                            .ok_or(CaveMapError::InvalidRoomNumber { number })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(name, exits)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn room_count(&self) -> usize {
        self.exits.len()
    }

    pub fn rooms(&self) -> impl Iterator<Item = RoomId> + '_ {
        (0..self.exits.len()).map(|index| RoomId(index as u16))
    }

    pub fn contains(&self, room: RoomId) -> bool {
        room.index() < self.exits.len()
    }

    /// Rooms reachable from `room`; empty for rooms outside the map.
    pub fn exits(&self, room: RoomId) -> &[RoomId] {
        self.exits.get(room.index()).map_or(&[], Vec::as_slice)
    }

    /// Rooms with a tunnel into `room`; empty for rooms outside the map.
    pub fn entrances(&self, room: RoomId) -> &[RoomId] {
        self.entrances.get(room.index()).map_or(&[], Vec::as_slice)
    }

    pub fn is_exit(&self, from: RoomId, to: RoomId) -> bool {
        self.exits(from).contains(&to)
    }

    /// True when every tunnel can be walked both ways.
    pub fn is_symmetric(&self) -> bool {
        self.rooms()
            .all(|room| self.exits(room).iter().all(|&to| self.is_exit(to, room)))
    }
}
