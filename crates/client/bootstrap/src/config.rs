//! Session configuration structures and loaders.
use std::env;

use wumpus_content::DEFAULT_MAP;
use wumpus_core::MapRef;
use wumpus_runtime::Session;

/// Configuration required to start a session and its optional replay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub seed: u64,
    pub map: String,
    pub offer_replay: bool,
    pub replay_pause: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: Self::DEFAULT_SEED,
            map: DEFAULT_MAP.to_owned(),
            offer_replay: true,
            replay_pause: true,
        }
    }
}

impl SessionConfig {
    pub const DEFAULT_SEED: u64 = 921;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `WUMPUS_SEED` - Seed for hazard placement and every random roll (default: 921)
    /// - `WUMPUS_MAP` - Built-in cave map name (default: standard)
    /// - `WUMPUS_OFFER_REPLAY` - Offer to review the game when it ends (default: true)
    /// - `WUMPUS_REPLAY_PAUSE` - Wait for Enter between replayed turns (default: true)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`SessionConfig::from_env`] with a custom variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_var::<u64>(&lookup, "WUMPUS_SEED") {
            config.seed = seed;
        }

        if let Some(map) = lookup("WUMPUS_MAP").filter(|map| !map.trim().is_empty()) {
            config.map = map.trim().to_owned();
        }

        if let Some(enable) = read_var::<bool>(&lookup, "WUMPUS_OFFER_REPLAY") {
            config.offer_replay = enable;
        }

        if let Some(enable) = read_var::<bool>(&lookup, "WUMPUS_REPLAY_PAUSE") {
            config.replay_pause = enable;
        }

        config
    }

    pub fn map_ref(&self) -> MapRef {
        MapRef::new(self.map.clone())
    }

    pub fn session(&self) -> Session {
        Session::new(self.seed, self.map_ref()).with_replay(self.offer_replay)
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let raw = lookup(key)?;
    let parsed = raw.trim().parse().ok();
    if parsed.is_none() {
        tracing::warn!(target: "wumpus::config", key, value = %raw, "ignoring unparsable variable");
    }
    parsed
}
