//! Game state snapshot
//!
//! A `GameState` is the single externally visible value describing a game.
//! The state machine builds a new one for every applied intent; renderers and
//! controllers only ever read it.

use crate::core::{Die, DieFace, DieId, Player, PlayerId};
use crate::game::{GameConfig, TurnPhase};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub type DicePool = SmallVec<[Die; 6]>;

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Both players, indexed by `PlayerId::index`
    pub players: [Player; 2],

    /// Whose turn it is
    pub current_player: PlayerId,

    pub phase: TurnPhase,

    /// Dice waiting to be selected or rerolled
    pub active_dice: DicePool,

    /// Dice scored so far this turn
    pub held_dice: DicePool,

    /// Unbanked points of the current turn
    pub round_score: u32,

    pub winner: Option<PlayerId>,

    /// Turn counter, starting at 1 and advanced on every rotation
    pub turn_number: u32,

    /// Latest status line or rejection diagnostic
    pub message: String,

    next_die_id: u32,
}

impl GameState {
    /// Fresh game: first player to roll, nothing scored
    pub fn new(config: &GameConfig) -> Self {
        let [p1, p2] = &config.player_names;
        GameState {
            players: [
                Player::new(PlayerId::FIRST, p1.clone()),
                Player::new(PlayerId::SECOND, p2.clone()),
            ],
            current_player: PlayerId::FIRST,
            phase: TurnPhase::AwaitingRoll,
            active_dice: SmallVec::new(),
            held_dice: SmallVec::new(),
            round_score: 0,
            winner: None,
            turn_number: 1,
            message: format!("{} to roll", p1),
            next_die_id: 0,
        }
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    pub fn current(&self) -> &Player {
        self.player(self.current_player)
    }

    pub fn current_mut(&mut self) -> &mut Player {
        let id = self.current_player;
        self.player_mut(id)
    }

    pub fn active_faces(&self) -> Vec<DieFace> {
        self.active_dice.iter().map(|d| d.face).collect()
    }

    pub fn held_faces(&self) -> Vec<DieFace> {
        self.held_dice.iter().map(|d| d.face).collect()
    }

    /// Id the next rolled die will receive
    pub fn next_die_id(&self) -> u32 {
        self.next_die_id
    }

    pub fn find_active(&self, id: DieId) -> Option<&Die> {
        self.active_dice.iter().find(|d| d.id == id)
    }

    /// Wrap freshly rolled faces into dice with new ids
    pub(crate) fn make_dice(&mut self, faces: &[DieFace]) -> DicePool {
        faces
            .iter()
            .map(|&face| {
                let id = DieId::new(self.next_die_id);
                self.next_die_id += 1;
                Die::new(id, face)
            })
            .collect()
    }

    /// Drop the turn's dice and round score
    pub(crate) fn clear_turn(&mut self) {
        self.active_dice.clear();
        self.held_dice.clear();
        self.round_score = 0;
    }

    /// Pass the dice to the other player
    pub(crate) fn rotate(&mut self) {
        self.current_player = self.current_player.other();
        self.turn_number += 1;
        self.clear_turn();
        self.phase = TurnPhase::AwaitingRoll;
    }

    /// Names and banked scores, for summaries
    pub fn scoreboard(&self) -> String {
        self.players
            .iter()
            .map(|p| format!("{}: {}", p.name, p.banked_score))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new(&GameConfig::default());
        assert_eq!(state.phase, TurnPhase::AwaitingRoll);
        assert_eq!(state.current_player, PlayerId::FIRST);
        assert_eq!(state.round_score, 0);
        assert!(state.active_dice.is_empty());
        assert!(state.held_dice.is_empty());
        assert_eq!(state.winner, None);
        assert_eq!(state.turn_number, 1);
        assert_eq!(state.current().name, "Player 1");
    }

    #[test]
    fn test_die_ids_never_repeat() {
        let mut state = GameState::new(&GameConfig::default());
        let first = state.make_dice(&[DieFace::new(1), DieFace::new(1)]);
        let second = state.make_dice(&[DieFace::new(1)]);
        assert_eq!(first[0].id, DieId::new(0));
        assert_eq!(first[1].id, DieId::new(1));
        assert_eq!(second[0].id, DieId::new(2));
    }

    #[test]
    fn test_rotate_clears_turn() {
        let mut state = GameState::new(&GameConfig::default());
        state.active_dice = state.make_dice(&[DieFace::new(5)]);
        state.round_score = 250;
        state.rotate();
        assert_eq!(state.current_player, PlayerId::SECOND);
        assert_eq!(state.turn_number, 2);
        assert_eq!(state.round_score, 0);
        assert!(state.active_dice.is_empty());
    }

    #[test]
    fn test_scoreboard() {
        let mut state = GameState::new(&GameConfig::default().with_player_names("Ann", "Ben"));
        state.player_mut(PlayerId::SECOND).bank(450);
        assert_eq!(state.scoreboard(), "Ann: 0 | Ben: 450");
    }
}
