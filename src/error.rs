//! Error types for Farkle

use crate::game::{IntentError, SnapshotError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FarkleError {
    #[error("Invalid die face: {0} (expected 1-6)")]
    InvalidFace(u8),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Intent rejected: {0}")]
    Intent(#[from] IntentError),

    #[error("Controller for player {player} stalled after {attempts} rejected actions")]
    ControllerStalled { player: usize, attempts: usize },

    #[error("Player {player} was asked to select from dice with no scoring options")]
    NoScoringOptions { player: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),
}

impl From<serde_json::Error> for FarkleError {
    fn from(e: serde_json::Error) -> Self {
        FarkleError::SerializationError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FarkleError>;
