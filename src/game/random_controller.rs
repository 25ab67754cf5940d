//! Random AI controller for testing and baseline gameplay
//!
//! Picks a random scoring option, then flips a weighted coin to decide
//! between rolling on and banking.

use crate::core::PlayerId;
use crate::game::controller::{GameStateView, PlayerController, TurnAction};
use crate::scoring::ScoringOption;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// A controller that makes random choices
pub struct RandomController {
    player_id: PlayerId,
    rng: Xoshiro256PlusPlus,
    bank_probability: f64,
}

impl RandomController {
    pub fn new(player_id: PlayerId) -> Self {
        RandomController {
            player_id,
            rng: Xoshiro256PlusPlus::from_entropy(),
            bank_probability: 0.5,
        }
    }

    /// Create a random controller with a seeded RNG (for deterministic testing)
    pub fn with_seed(player_id: PlayerId, seed: u64) -> Self {
        RandomController {
            player_id,
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            bank_probability: 0.5,
        }
    }

    /// Chance of banking instead of holding, clamped to [0, 1]
    pub fn with_bank_probability(mut self, probability: f64) -> Self {
        self.bank_probability = probability.clamp(0.0, 1.0);
        self
    }
}

impl PlayerController for RandomController {
    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn name(&self) -> &str {
        "RANDOM"
    }

    fn choose_action(&mut self, view: &GameStateView, options: &[ScoringOption]) -> TurnAction {
        let option = &options[self.rng.gen_range(0..options.len())];
        let action = if self.rng.gen_bool(self.bank_probability) {
            TurnAction::bank(option)
        } else {
            TurnAction::hold(option)
        };

        let verb = match action {
            TurnAction::Bank(_) => "bank",
            TurnAction::Hold(_) => "hold",
        };
        view.log_choice(self.name(), &format!("{verb} {option}"));
        action
    }
}
