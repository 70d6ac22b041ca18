use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::state::RoomId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("arrow path needs at least one room")]
    Empty,

    #[error("arrow path can name at most {max} rooms")]
    TooLong { max: usize },
}

/// Ordered rooms an arrow is aimed through (1 to 5 entries).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<RoomId>"))]
pub struct ArrowPath(ArrayVec<RoomId, { GameConfig::MAX_ARROW_PATH }>);

impl ArrowPath {
    pub fn new(rooms: impl IntoIterator<Item = RoomId>) -> Result<Self, PathError> {
        let mut path = ArrayVec::new();
        for room in rooms {
            path.try_push(room).map_err(|_| PathError::TooLong {
                max: GameConfig::MAX_ARROW_PATH,
            })?;
        }

        if path.is_empty() {
            return Err(PathError::Empty);
        }

        Ok(Self(path))
    }

    pub fn rooms(&self) -> &[RoomId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; an empty path cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<RoomId>> for ArrowPath {
    type Error = PathError;

    fn try_from(rooms: Vec<RoomId>) -> Result<Self, Self::Error> {
        Self::new(rooms)
    }
}
