//! Game configuration

use crate::{FarkleError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_WIN_THRESHOLD: u32 = 10_000;
pub const DEFAULT_DICE_PER_ROLL: usize = 6;

/// Tunable parameters of a game
///
/// Every field has a default, so a config file only needs the fields it
/// changes, e.g. `{"win_threshold": 5000}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Banked score that ends the game
    pub win_threshold: u32,

    /// Dice rolled at the start of a turn and after hot dice
    pub dice_per_roll: usize,

    /// Names of the two players, in seat order
    pub player_names: [String; 2],
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            win_threshold: DEFAULT_WIN_THRESHOLD,
            dice_per_roll: DEFAULT_DICE_PER_ROLL,
            player_names: ["Player 1".to_string(), "Player 2".to_string()],
        }
    }
}

impl GameConfig {
    pub fn with_win_threshold(mut self, win_threshold: u32) -> Self {
        self.win_threshold = win_threshold;
        self
    }

    pub fn with_player_names(mut self, p1: impl Into<String>, p2: impl Into<String>) -> Self {
        self.player_names = [p1.into(), p2.into()];
        self
    }

    /// Check the values the rules engine depends on
    pub fn validate(&self) -> Result<()> {
        if self.win_threshold == 0 {
            return Err(FarkleError::InvalidConfig(
                "win_threshold must be greater than 0".to_string(),
            ));
        }
        if !(1..=DEFAULT_DICE_PER_ROLL).contains(&self.dice_per_roll) {
            return Err(FarkleError::InvalidConfig(format!(
                "dice_per_roll must be between 1 and {DEFAULT_DICE_PER_ROLL}, got {}",
                self.dice_per_roll
            )));
        }
        Ok(())
    }

    /// Load and validate a JSON config file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config: GameConfig = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }
}
