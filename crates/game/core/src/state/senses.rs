use bitflags::bitflags;

bitflags! {
    /// Hazards the player can perceive from an adjacent room.
    ///
    /// Each flag is independent; any combination (including all three) can be
    /// reported for a single turn.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Senses: u8 {
        /// A bottomless pit is one tunnel away.
        const DRAFT  = 1 << 0;
        /// A super bat colony is one tunnel away.
        const BATS   = 1 << 1;
        /// The wumpus is one tunnel away.
        const WUMPUS = 1 << 2;
    }
}

impl Senses {
    pub fn near_pit(self) -> bool {
        self.contains(Self::DRAFT)
    }

    pub fn near_bats(self) -> bool {
        self.contains(Self::BATS)
    }

    pub fn near_wumpus(self) -> bool {
        self.contains(Self::WUMPUS)
    }
}
