/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Arrows in the quiver at game start.
    pub arrows: u8,

    /// Number of rooms with bottomless pits.
    pub pits: usize,

    /// Number of rooms with super bat colonies.
    pub bat_colonies: usize,

    /// Successful moves allowed before the player collapses from exhaustion.
    pub move_budget: u32,

    /// Chance (percent) that a woken wumpus moves to an adjacent room.
    pub wumpus_move_percent: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of rooms an arrow can be aimed through.
    pub const MAX_ARROW_PATH: usize = 5;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ARROWS: u8 = 5;
    pub const DEFAULT_PITS: usize = 2;
    pub const DEFAULT_BAT_COLONIES: usize = 2;
    pub const DEFAULT_MOVE_BUDGET: u32 = 50;
    pub const DEFAULT_WUMPUS_MOVE_PERCENT: u32 = 75;

    // ===== scoring =====
    pub const WIN_BASE_SCORE: u32 = 100;
    pub const SCORE_PER_ARROW: u32 = 25;

    pub fn new() -> Self {
        Self {
            arrows: Self::DEFAULT_ARROWS,
            pits: Self::DEFAULT_PITS,
            bat_colonies: Self::DEFAULT_BAT_COLONIES,
            move_budget: Self::DEFAULT_MOVE_BUDGET,
            wumpus_move_percent: Self::DEFAULT_WUMPUS_MOVE_PERCENT,
        }
    }

    #[must_use]
    pub fn with_arrows(mut self, arrows: u8) -> Self {
        self.arrows = arrows;
        self
    }

    #[must_use]
    pub fn with_move_budget(mut self, move_budget: u32) -> Self {
        self.move_budget = move_budget;
        self
    }

    /// Rooms that must exist to place the player and every hazard apart.
    pub fn rooms_required(&self) -> usize {
        // player + wumpus + pits + bats
        2 + self.pits + self.bat_colonies
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
