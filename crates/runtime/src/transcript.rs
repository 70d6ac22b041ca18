//! What the player observed during one game.
//!
//! A transcript keeps, for every dispatched command, the turn state it was
//! answering and the outcome the host reported. Render detail is left out, so
//! a live game and its replay produce equal transcripts when the host is
//! deterministic.
use sha2::{Digest, Sha256};
use wumpus_core::{ActionResult, Outcome, RoomId, Senses, TurnState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub room: RoomId,
    pub senses: Senses,
    pub exits: Vec<RoomId>,
    pub entrances: Vec<RoomId>,
    pub result: ActionResult,
    pub snatched: bool,
}

impl TranscriptEntry {
    pub fn new(state: &TurnState, outcome: Outcome) -> Self {
        Self {
            room: state.room,
            senses: state.senses,
            exits: state.exits.clone(),
            entrances: state.entrances.clone(),
            result: outcome.result(),
            snatched: outcome.snatched(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, state: &TurnState, outcome: Outcome) {
        self.entries.push(TranscriptEntry::new(state, outcome));
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hex encoded SHA-256 over every entry, in order.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();

        for entry in &self.entries {
            hasher.update(entry.room.0.to_le_bytes());
            hasher.update([entry.senses.bits(), u8::from(entry.snatched)]);
            update_rooms(&mut hasher, &entry.exits);
            update_rooms(&mut hasher, &entry.entrances);
            hasher.update(entry.result.code().as_bytes());
            hasher.update([0]);
        }

        hex::encode(hasher.finalize())
    }
}

fn update_rooms(hasher: &mut Sha256, rooms: &[RoomId]) {
    hasher.update((rooms.len() as u32).to_le_bytes());
    for room in rooms {
        hasher.update(room.0.to_le_bytes());
    }
}
