//! Identifiers for dice and players

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a rolled die
///
/// Assigned when a die is rolled into a pool and never reused within a game,
/// so a frontend can address one of several dice showing the same face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DieId(u32);

impl DieId {
    pub fn new(id: u32) -> Self {
        DieId(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for DieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Seat of one of the two players (0 or 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    pub const FIRST: PlayerId = PlayerId(0);
    pub const SECOND: PlayerId = PlayerId(1);

    /// Seat for an index; anything other than 0 or 1 is rejected
    pub fn from_index(idx: usize) -> Option<Self> {
        match idx {
            0 => Some(PlayerId::FIRST),
            1 => Some(PlayerId::SECOND),
            _ => None,
        }
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// The opponent's seat
    pub fn other(&self) -> PlayerId {
        PlayerId(1 - self.0)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_rotation() {
        assert_eq!(PlayerId::FIRST.other(), PlayerId::SECOND);
        assert_eq!(PlayerId::SECOND.other(), PlayerId::FIRST);
        assert_eq!(PlayerId::FIRST.other().other(), PlayerId::FIRST);
    }

    #[test]
    fn test_player_from_index() {
        assert_eq!(PlayerId::from_index(0), Some(PlayerId::FIRST));
        assert_eq!(PlayerId::from_index(1), Some(PlayerId::SECOND));
        assert_eq!(PlayerId::from_index(2), None);
        assert_eq!(PlayerId::SECOND.index(), 1);
        assert_eq!(PlayerId::SECOND.to_string(), "P2");
    }

    #[test]
    fn test_die_id_ordering() {
        let a = DieId::new(3);
        let b = DieId::new(7);
        assert!(a < b);
        assert_eq!(b.as_u32(), 7);
        assert_eq!(a.to_string(), "3");
    }
}
