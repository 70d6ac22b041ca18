use core::fmt;

/// Identifier of a cave room.
///
/// Rooms are 0-indexed inside the host and 1-indexed whenever a number is
/// shown to, or typed by, the player. [`RoomId::from_display`] and
/// [`RoomId::display_number`] are the only places that cross that boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomId(pub u16);

impl RoomId {
    /// Position of the room in map tables.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Converts a 1-indexed room number as typed by the player.
    ///
    /// Returns `None` for `0` and for numbers that do not fit a room index.
    pub fn from_display(number: u32) -> Option<Self> {
        let index = number.checked_sub(1)?;
        u16::try_from(index).ok().map(Self)
    }

    /// 1-indexed number shown to the player.
    pub const fn display_number(self) -> u32 {
        self.0 as u32 + 1
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_numbers_are_one_indexed() {
        assert_eq!(RoomId::from_display(5), Some(RoomId(4)));
        assert_eq!(RoomId(4).display_number(), 5);
        assert_eq!(RoomId(0).to_string(), "1");
    }

    #[test]
    fn rejects_zero_and_oversized_numbers() {
        assert_eq!(RoomId::from_display(0), None);
        assert_eq!(RoomId::from_display(u32::from(u16::MAX) + 2), None);
        assert_eq!(
            RoomId::from_display(u32::from(u16::MAX) + 1),
            Some(RoomId(u16::MAX))
        );
    }
}
