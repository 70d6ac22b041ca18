//! Named cave layouts.

mod one_way;
mod standard;

use wumpus_core::{CaveMap, MapRef};

/// Map used when a session does not name one.
pub const DEFAULT_MAP: &str = standard::NAME;

/// Lookup of the built-in cave maps.
pub struct MapCatalog;

impl MapCatalog {
    /// Names of every built-in map, default first.
    pub fn names() -> &'static [&'static str] {
        &[standard::NAME, one_way::NAME]
    }

    /// Builds the map named by `map`, or `None` for an unknown name.
    pub fn load(map: &MapRef) -> Option<CaveMap> {
        let built = match map.name() {
            standard::NAME => standard::build(),
            one_way::NAME => one_way::build(),
            other => {
                tracing::debug!(target: "wumpus::content", map = other, "unknown map requested");
                return None;
            }
        };

        match built {
            Ok(cave) => Some(cave),
            Err(error) => {
                tracing::error!(target: "wumpus::content", map = map.name(), %error, "built-in map is invalid");
                None
            }
        }
    }

    pub fn default_ref() -> MapRef {
        MapRef::new(DEFAULT_MAP)
    }
}
