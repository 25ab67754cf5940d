//! Turn phases and the intents that drive them

use crate::core::DieId;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Where the current turn stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for the current player to roll a fresh set of dice
    #[default]
    AwaitingRoll,
    /// Dice are on the table; the player must hold or bank a scoring selection
    AwaitingSelection,
    /// The last roll had no scoring combination; the round is lost
    Busted,
    /// A player reached the win threshold
    GameOver,
}

impl TurnPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TurnPhase::GameOver)
    }
}

impl fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnPhase::AwaitingRoll => write!(f, "awaiting roll"),
            TurnPhase::AwaitingSelection => write!(f, "awaiting selection"),
            TurnPhase::Busted => write!(f, "busted"),
            TurnPhase::GameOver => write!(f, "game over"),
        }
    }
}

/// A player intent submitted to the state machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    StartTurn,
    HoldAndContinue(SmallVec<[DieId; 6]>),
    EndTurn(SmallVec<[DieId; 6]>),
    AdvanceAfterBust,
    NewGame,
}

impl Intent {
    pub fn kind(&self) -> IntentKind {
        match self {
            Intent::StartTurn => IntentKind::StartTurn,
            Intent::HoldAndContinue(_) => IntentKind::HoldAndContinue,
            Intent::EndTurn(_) => IntentKind::EndTurn,
            Intent::AdvanceAfterBust => IntentKind::AdvanceAfterBust,
            Intent::NewGame => IntentKind::NewGame,
        }
    }
}

/// Intent without its payload, for diagnostics and phase tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntentKind {
    StartTurn,
    HoldAndContinue,
    EndTurn,
    AdvanceAfterBust,
    NewGame,
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntentKind::StartTurn => write!(f, "start turn"),
            IntentKind::HoldAndContinue => write!(f, "hold and continue"),
            IntentKind::EndTurn => write!(f, "end turn"),
            IntentKind::AdvanceAfterBust => write!(f, "advance after bust"),
            IntentKind::NewGame => write!(f, "new game"),
        }
    }
}
