//! Player controller trait and game state view
//!
//! The game loop asks a controller what to do whenever its player has dice
//! waiting for selection. Controllers only see a read-only view of the state
//! plus the scoring options available for the current roll.

use crate::core::{Die, DieId, PlayerId};
use crate::game::{GameConfig, GameLogger, GameState, Intent};
use crate::scoring::ScoringOption;
use smallvec::SmallVec;

/// What a player does with the current roll
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnAction {
    /// Set the dice aside and roll the rest
    Hold(SmallVec<[DieId; 6]>),

    /// Score the dice (if any) and bank the round
    Bank(SmallVec<[DieId; 6]>),
}

impl TurnAction {
    pub fn hold(option: &ScoringOption) -> Self {
        TurnAction::Hold(option.dice.clone())
    }

    pub fn bank(option: &ScoringOption) -> Self {
        TurnAction::Bank(option.dice.clone())
    }

    pub fn dice(&self) -> &[DieId] {
        match self {
            TurnAction::Hold(dice) | TurnAction::Bank(dice) => dice,
        }
    }

    pub fn into_intent(self) -> Intent {
        match self {
            TurnAction::Hold(dice) => Intent::HoldAndContinue(dice),
            TurnAction::Bank(dice) => Intent::EndTurn(dice),
        }
    }
}

/// Read-only view of game state for controllers
pub struct GameStateView<'a> {
    game: &'a GameState,
    config: &'a GameConfig,
    player_id: PlayerId,
    logger: Option<&'a GameLogger>,
}

impl<'a> GameStateView<'a> {
    pub fn new(game: &'a GameState, config: &'a GameConfig, player_id: PlayerId) -> Self {
        GameStateView {
            game,
            config,
            player_id,
            logger: None,
        }
    }

    /// Attach the machine's logger so controllers can explain their choices
    pub fn with_logger(mut self, logger: &'a GameLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn player_id(&self) -> PlayerId {
        self.player_id
    }

    pub fn state(&self) -> &GameState {
        self.game
    }

    pub fn is_my_turn(&self) -> bool {
        self.game.current_player == self.player_id
    }

    /// Unbanked points of the turn in progress
    pub fn round_score(&self) -> u32 {
        self.game.round_score
    }

    pub fn banked_score(&self) -> u32 {
        self.game.player(self.player_id).banked_score
    }

    pub fn opponent_score(&self) -> u32 {
        self.game.player(self.player_id.other()).banked_score
    }

    pub fn player_name(&self) -> &str {
        &self.game.player(self.player_id).name
    }

    pub fn active_dice(&self) -> &[Die] {
        &self.game.active_dice
    }

    pub fn held_dice(&self) -> &[Die] {
        &self.game.held_dice
    }

    pub fn win_threshold(&self) -> u32 {
        self.config.win_threshold
    }

    pub fn dice_per_roll(&self) -> usize {
        self.config.dice_per_roll
    }

    /// Would banking `extra` more points on top of the round win the game?
    pub fn bank_wins(&self, extra: u32) -> bool {
        self.banked_score() + self.round_score() + extra >= self.win_threshold()
    }

    /// Log a controller decision at Verbose level
    pub fn log_choice(&self, controller_name: &str, message: &str) {
        if let Some(logger) = self.logger {
            logger.controller_choice(controller_name, message);
        }
    }
}

/// Player controller trait
///
/// Implement this to plug an AI or a UI into the game loop.
pub trait PlayerController {
    fn player_id(&self) -> PlayerId;

    /// Short name used in logs
    fn name(&self) -> &str {
        "player"
    }

    /// Choose what to do with the current roll
    ///
    /// `options` lists every distinct scoring selection of the active dice,
    /// best first. The game loop only asks when the list is non-empty.
    fn choose_action(&mut self, view: &GameStateView, options: &[ScoringOption]) -> TurnAction;

    /// Called after this player's roll busted
    fn on_bust(&mut self, _view: &GameStateView, _lost: u32) {}

    /// Called when the game ends
    fn on_game_end(&mut self, _view: &GameStateView, _won: bool) {}
}
