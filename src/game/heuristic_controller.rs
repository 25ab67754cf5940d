//! Heuristic AI controller
//!
//! Always takes the highest scoring option, then decides between rolling on
//! and banking with a few fixed thresholds:
//! - bank whenever banking wins the game
//! - keep rolling on hot dice
//! - bank once the round reaches the target
//! - bank when too few dice would be left to roll

use crate::core::PlayerId;
use crate::game::controller::{GameStateView, PlayerController, TurnAction};
use crate::scoring::ScoringOption;

/// Round score at which the default controller stops rolling
pub const DEFAULT_BANK_TARGET: u32 = 350;

/// Fewest dice the default controller is willing to roll
pub const DEFAULT_MIN_DICE: usize = 3;

/// Threshold-based AI controller
pub struct HeuristicController {
    player_id: PlayerId,
    bank_target: u32,
    min_dice: usize,
}

impl HeuristicController {
    pub fn new(player_id: PlayerId) -> Self {
        HeuristicController {
            player_id,
            bank_target: DEFAULT_BANK_TARGET,
            min_dice: DEFAULT_MIN_DICE,
        }
    }

    pub fn with_bank_target(mut self, target: u32) -> Self {
        self.bank_target = target;
        self
    }

    pub fn with_min_dice(mut self, min_dice: usize) -> Self {
        self.min_dice = min_dice;
        self
    }

    fn should_bank(&self, view: &GameStateView, option: &ScoringOption) -> bool {
        if view.bank_wins(option.points) {
            return true;
        }
        if option.hot_dice {
            return false;
        }

        let round_after = view.round_score() + option.points;
        let dice_left = view.active_dice().len().saturating_sub(option.dice.len());
        round_after >= self.bank_target || dice_left < self.min_dice
    }
}

impl PlayerController for HeuristicController {
    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn name(&self) -> &str {
        "HEURISTIC"
    }

    fn choose_action(&mut self, view: &GameStateView, options: &[ScoringOption]) -> TurnAction {
        // options are sorted best first
        let best = &options[0];
        if self.should_bank(view, best) {
            view.log_choice(
                self.name(),
                &format!("bank {} (round {})", best, view.round_score() + best.points),
            );
            TurnAction::bank(best)
        } else {
            view.log_choice(self.name(), &format!("hold {best}"));
            TurnAction::hold(best)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Die, DieFace, DieId};
    use crate::game::{GameConfig, GameState};
    use crate::scoring::scoring_selections;
    use smallvec::SmallVec;

    fn game_with_roll(config: &GameConfig, faces: &[u8]) -> GameState {
        let mut game = GameState::new(config);
        game.active_dice = faces
            .iter()
            .enumerate()
            .map(|(i, &v)| Die::new(DieId::new(i as u32), DieFace::new(v)))
            .collect();
        game
    }

    fn decide(game: &GameState, config: &GameConfig) -> TurnAction {
        let options = scoring_selections(&game.active_dice);
        let view = GameStateView::new(game, config, PlayerId::FIRST);
        HeuristicController::new(PlayerId::FIRST).choose_action(&view, &options)
    }

    #[test]
    fn test_holds_small_score_with_many_dice() {
        let config = GameConfig::default();
        let game = game_with_roll(&config, &[1, 2, 3, 4, 6, 6]);
        assert_eq!(
            decide(&game, &config),
            TurnAction::Hold(SmallVec::from_slice(&[DieId::new(0)]))
        );
    }

    #[test]
    fn test_banks_at_target() {
        let config = GameConfig::default();
        let mut game = game_with_roll(&config, &[5, 2, 3, 4]);
        game.round_score = 300;
        assert!(matches!(decide(&game, &config), TurnAction::Bank(_)));
    }

    #[test]
    fn test_banks_with_few_dice_left() {
        let config = GameConfig::default();
        let game = game_with_roll(&config, &[5, 2, 6]);
        assert!(matches!(decide(&game, &config), TurnAction::Bank(_)));
    }

    #[test]
    fn test_continues_on_hot_dice() {
        let config = GameConfig::default();
        let mut game = game_with_roll(&config, &[1, 5]);
        game.round_score = 2000;
        let action = decide(&game, &config);
        assert!(matches!(action, TurnAction::Hold(_)));
        assert_eq!(action.dice().len(), 2);
    }

    #[test]
    fn test_banks_when_it_wins() {
        let config = GameConfig::default().with_win_threshold(500);
        let mut game = game_with_roll(&config, &[1, 5]);
        game.player_mut(PlayerId::FIRST).bank(350);
        assert!(matches!(decide(&game, &config), TurnAction::Bank(_)));
    }
}
