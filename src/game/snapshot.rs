//! Game snapshots for stop-and-resume play
//!
//! A snapshot is the config plus the published `GameState`, written as pretty
//! JSON. The dice source is not saved; a resumed game rolls from whatever
//! source it is given.

use crate::game::{DiceSource, GameConfig, GameState, TurnPhase, TurnStateMachine};
use crate::scoring::is_bust;
use std::collections::HashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: GameConfig,
    pub state: GameState,
}

impl GameSnapshot {
    pub fn new(config: GameConfig, state: GameState) -> Self {
        GameSnapshot { config, state }
    }

    /// Capture the machine's current state
    pub fn from_machine(machine: &TurnStateMachine) -> Self {
        Self::new(machine.config().clone(), machine.state().clone())
    }

    /// Build a machine that continues from this snapshot
    pub fn into_machine(
        self,
        dice: impl DiceSource + 'static,
    ) -> Result<TurnStateMachine, SnapshotError> {
        self.validate()?;
        TurnStateMachine::resume(self.config, self.state, dice)
            .map_err(|e| SnapshotError::InvalidState(e.to_string()))
    }

    /// Reject states the machine could never have published
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let state = &self.state;
        if state.active_dice.len() + state.held_dice.len() > self.config.dice_per_roll {
            return Err(SnapshotError::InvalidState(format!(
                "{} dice on the table but only {} per roll",
                state.active_dice.len() + state.held_dice.len(),
                self.config.dice_per_roll
            )));
        }
        if state.phase == TurnPhase::AwaitingSelection && state.active_dice.is_empty() {
            return Err(SnapshotError::InvalidState(
                "awaiting selection with no active dice".to_string(),
            ));
        }
        if state.phase == TurnPhase::AwaitingSelection && is_bust(&state.active_faces()) {
            return Err(SnapshotError::InvalidState(
                "awaiting selection but the active dice do not score".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for die in state.active_dice.iter().chain(state.held_dice.iter()) {
            if !seen.insert(die.id) {
                return Err(SnapshotError::InvalidState(format!("die {} appears twice", die.id)));
            }
            if die.id.as_u32() >= state.next_die_id() {
                return Err(SnapshotError::InvalidState(format!(
                    "die {} not below next die id {}",
                    die.id,
                    state.next_die_id()
                )));
            }
        }
        if state.winner.is_some() != (state.phase == TurnPhase::GameOver) {
            return Err(SnapshotError::InvalidState(format!(
                "winner {:?} does not match phase {}",
                state.winner, state.phase
            )));
        }
        Ok(())
    }

    /// Save this snapshot to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SnapshotError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::Serialization(e.to_string()))?;

        std::fs::write(path.as_ref(), json).map_err(|e| SnapshotError::Io(e.to_string()))?;

        Ok(())
    }

    /// Load a snapshot from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SnapshotError> {
        let json =
            std::fs::read_to_string(path.as_ref()).map_err(|e| SnapshotError::Io(e.to_string()))?;

        let snapshot: GameSnapshot = serde_json::from_str(&json)
            .map_err(|e| SnapshotError::Deserialization(e.to_string()))?;

        snapshot.validate()?;
        Ok(snapshot)
    }
}

/// Errors that can occur during snapshot operations
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to serialize snapshot: {0}")]
    Serialization(String),

    #[error("Failed to deserialize snapshot: {0}")]
    Deserialization(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Invalid snapshot state: {0}")]
    InvalidState(String),
}
