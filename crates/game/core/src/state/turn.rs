use super::{RoomId, Senses};

/// Snapshot the host emits at the start of every turn.
///
/// The host suspends after emitting a turn state and resumes only when it
/// receives a command (or is asked for the next step again, in which case it
/// re-emits the same state).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnState {
    /// Room the player currently occupies.
    pub room: RoomId,

    /// Rooms reachable through a tunnel from `room`.
    pub exits: Vec<RoomId>,

    /// Rooms with a tunnel leading into `room`.
    ///
    /// On symmetric maps this equals `exits`; on directed maps some entrances
    /// are visible but cannot be reached.
    pub entrances: Vec<RoomId>,

    /// Hazards perceived from adjacent rooms.
    pub senses: Senses,

    /// Extra host state, present only when the host renders detail.
    pub detail: Option<TurnDetail>,
}

impl TurnState {
    /// Entrances that are not also exits.
    pub fn visible_but_unreachable(&self) -> impl Iterator<Item = RoomId> + '_ {
        self.entrances
            .iter()
            .copied()
            .filter(|room| !self.exits.contains(room))
    }
}

/// Internal host state exposed for review (replay) sessions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnDetail {
    /// 1-based turn counter.
    pub turn: u32,
    pub arrows: u8,
    pub moves_left: u32,
    /// Hazard positions, present only when the host reveals them.
    pub hazards: Option<HazardReveal>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HazardReveal {
    pub wumpus: RoomId,
    pub pits: Vec<RoomId>,
    pub bats: Vec<RoomId>,
}

/// Answer to "what happens next?" asked of the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostStep {
    /// The host awaits exactly one command for this turn.
    Turn(TurnState),
    /// The game is over.
    Finished(Verdict),
}

/// Final result of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    Won { score: u32 },
    Lost,
}

impl Verdict {
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Won { .. })
    }

    /// Score of a won game, `None` for a loss.
    pub const fn score(self) -> Option<u32> {
        match self {
            Self::Won { score } => Some(score),
            Self::Lost => None,
        }
    }
}
