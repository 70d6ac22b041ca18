//! Error types for host construction.
//!
//! Once a host exists nothing it does can fail: every in-game problem is
//! reported as an [`crate::ActionResult`]. Only building a host can go wrong.

use crate::env::{CaveMapError, MapRef};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("unknown cave map '{map}'")]
    UnknownMap { map: MapRef },

    #[error("cave map has {rooms} rooms but {required} are needed to place every hazard")]
    MapTooSmall { rooms: usize, required: usize },

    #[error("invalid cave map")]
    InvalidMap(#[from] CaveMapError),
}
