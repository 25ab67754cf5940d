//! Which intents a frontend should offer in each phase
//!
//! The state machine itself accepts any intent and rejects the ones that do
//! not fit; this table is for UIs that want to enable or hide controls.

use crate::game::{IntentKind, TurnPhase};

/// Intents that can succeed in `phase`
pub fn allowed_intents(phase: TurnPhase) -> &'static [IntentKind] {
    match phase {
        TurnPhase::AwaitingRoll => &[IntentKind::StartTurn, IntentKind::NewGame],
        TurnPhase::AwaitingSelection => &[
            IntentKind::HoldAndContinue,
            IntentKind::EndTurn,
            IntentKind::NewGame,
        ],
        TurnPhase::Busted => &[IntentKind::AdvanceAfterBust, IntentKind::NewGame],
        TurnPhase::GameOver => &[IntentKind::NewGame],
    }
}

/// Button-style label for an intent
pub fn intent_label(intent: IntentKind) -> &'static str {
    match intent {
        IntentKind::StartTurn => "Roll",
        IntentKind::HoldAndContinue => "Hold & roll again",
        IntentKind::EndTurn => "Bank",
        IntentKind::AdvanceAfterBust => "Next player",
        IntentKind::NewGame => "New game",
    }
}

pub fn is_allowed(phase: TurnPhase, intent: IntentKind) -> bool {
    allowed_intents(phase).contains(&intent)
}
