//! Player representation

use crate::core::PlayerId;
use serde::{Deserialize, Serialize};

/// Represents a player in the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Seat of this player
    pub id: PlayerId,

    /// Player name
    pub name: String,

    /// Permanent score, only ever increased by a successful bank
    pub banked_score: u32,

    /// Points of the most recent hold this turn (not the round total)
    pub last_round_score: u32,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Player {
            id,
            name: name.into(),
            banked_score: 0,
            last_round_score: 0,
        }
    }

    pub fn bank(&mut self, points: u32) {
        self.banked_score += points;
    }

    pub fn record_hold(&mut self, points: u32) {
        self.last_round_score = points;
    }

    pub fn clear_last_round(&mut self) {
        self.last_round_score = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_creation() {
        let player = Player::new(PlayerId::FIRST, "Alice");

        assert_eq!(player.id, PlayerId::FIRST);
        assert_eq!(player.name, "Alice");
        assert_eq!(player.banked_score, 0);
        assert_eq!(player.last_round_score, 0);
    }

    #[test]
    fn test_last_round_overwrites() {
        let mut player = Player::new(PlayerId::SECOND, "Bob");

        player.record_hold(300);
        player.record_hold(50);
        // Only the latest hold is kept
        assert_eq!(player.last_round_score, 50);

        player.clear_last_round();
        assert_eq!(player.last_round_score, 0);
    }

    #[test]
    fn test_bank_accumulates() {
        let mut player = Player::new(PlayerId::FIRST, "Charlie");
        player.bank(350);
        player.bank(1000);
        assert_eq!(player.banked_score, 1350);
    }
}
