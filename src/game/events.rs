//! Log of what each applied intent did
//!
//! Collaborators that react to transitions (audio cues, animations, replays)
//! read these events instead of diffing snapshots.

use crate::core::{DieFace, PlayerId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Something that happened while applying an intent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Fresh dice were rolled for a player
    Rolled {
        player: PlayerId,
        faces: Vec<DieFace>,
    },

    /// A scoring selection was set aside
    Held {
        player: PlayerId,
        faces: Vec<DieFace>,
        points: u32,
        round_score: u32,
    },

    /// Every active die scored; a full set comes back
    HotDice { player: PlayerId },

    /// A roll had no scoring combination
    Busted { player: PlayerId, lost: u32 },

    /// The round was added to the player's total
    Banked {
        player: PlayerId,
        points: u32,
        total: u32,
    },

    /// A bank reached the win threshold
    Won { player: PlayerId, total: u32 },

    /// The dice moved to the other player
    TurnPassed {
        from: PlayerId,
        to: PlayerId,
        turn_number: u32,
    },

    /// The game was reset
    NewGame,
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::Rolled { player, faces } => {
                let faces: Vec<String> = faces.iter().map(|f| f.to_string()).collect();
                write!(f, "{player} rolled [{}]", faces.join(" "))
            }
            GameEvent::Held {
                player,
                faces,
                points,
                round_score,
            } => {
                let faces: Vec<String> = faces.iter().map(|f| f.to_string()).collect();
                write!(
                    f,
                    "{player} held [{}] for {points} (round: {round_score})",
                    faces.join(" ")
                )
            }
            GameEvent::HotDice { player } => write!(f, "{player} has hot dice"),
            GameEvent::Busted { player, lost } => write!(f, "{player} busted, losing {lost}"),
            GameEvent::Banked {
                player,
                points,
                total,
            } => write!(f, "{player} banked {points} (total: {total})"),
            GameEvent::Won { player, total } => write!(f, "{player} wins with {total}"),
            GameEvent::TurnPassed {
                from,
                to,
                turn_number,
            } => write!(f, "turn {turn_number}: {from} passes to {to}"),
            GameEvent::NewGame => write!(f, "new game"),
        }
    }
}

/// Event history of a game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLog {
    /// Every recorded event, oldest first (empty when disabled)
    history: Vec<GameEvent>,

    /// Events of the most recently applied intent, kept even when disabled
    last_intent: Vec<GameEvent>,

    enabled: bool,
}

impl EventLog {
    pub fn new() -> Self {
        EventLog {
            history: Vec::new(),
            last_intent: Vec::new(),
            enabled: true,
        }
    }

    /// Log that keeps no history (for bulk simulation)
    pub fn disabled() -> Self {
        EventLog {
            history: Vec::new(),
            last_intent: Vec::new(),
            enabled: false,
        }
    }

    /// Record the events of one applied intent
    pub fn record_intent(&mut self, events: Vec<GameEvent>) {
        if self.enabled {
            self.history.extend(events.iter().cloned());
        }
        self.last_intent = events;
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Stop recording history; events already recorded are kept
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn last_intent(&self) -> &[GameEvent] {
        &self.last_intent
    }

    pub fn history(&self) -> &[GameEvent] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn clear(&mut self) {
        self.history.clear();
        self.last_intent.clear();
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}
