//! Game loop implementation
//!
//! Drives a `TurnStateMachine` with two player controllers. The loop issues
//! the intents that need no decision (rolling, passing after a bust) itself
//! and asks the current player's controller everything else.

use crate::core::PlayerId;
use crate::game::controller::{GameStateView, PlayerController};
use crate::game::{GameEvent, TurnPhase, TurnStateMachine};
use crate::scoring::scoring_selections;
use crate::{FarkleError, Result};

/// Default cap on turns before a game is abandoned
pub const DEFAULT_MAX_TURNS: u32 = 1000;

/// Consecutive rejected actions tolerated from one controller
pub const DEFAULT_MAX_REJECTIONS: usize = 10;

/// Verbosity level for game output
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum VerbosityLevel {
    /// Silent - no output during game
    Silent = 0,
    /// Minimal - only game outcome
    Minimal = 1,
    /// Normal - rolls, holds, banks and busts (default)
    #[default]
    Normal = 2,
    /// Verbose - available combinations and controller reasoning
    Verbose = 3,
}

impl std::str::FromStr for VerbosityLevel {
    type Err = FarkleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "0" | "silent" => Ok(VerbosityLevel::Silent),
            "1" | "minimal" => Ok(VerbosityLevel::Minimal),
            "2" | "normal" => Ok(VerbosityLevel::Normal),
            "3" | "verbose" => Ok(VerbosityLevel::Verbose),
            _ => Err(FarkleError::ParseError(format!(
                "invalid verbosity level: {s} (expected 0-3 or silent/minimal/normal/verbose)"
            ))),
        }
    }
}

/// Result of running a game loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// Winner of the game (None if it did not finish)
    pub winner: Option<PlayerId>,
    /// Turns completed during this run
    pub turns_played: u32,
    /// Banked scores of both players when the loop stopped
    pub final_scores: [u32; 2],
    pub end_reason: GameEndReason,
}

/// Reason the game loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEndReason {
    /// A player banked past the win threshold
    Won(PlayerId),
    /// Game reached the maximum turn limit
    TurnLimit,
    /// The requested number of turns was played (for snapshots)
    Stopped,
}

/// Game loop manager
pub struct GameLoop<'a> {
    pub machine: &'a mut TurnStateMachine,
    max_turns: u32,
    max_rejections: usize,
}

impl<'a> GameLoop<'a> {
    pub fn new(machine: &'a mut TurnStateMachine) -> Self {
        GameLoop {
            machine,
            max_turns: DEFAULT_MAX_TURNS,
            max_rejections: DEFAULT_MAX_REJECTIONS,
        }
    }

    /// Set maximum turn number before the game is abandoned
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Set verbosity on the machine's logger, which controllers also log through
    pub fn with_verbosity(self, verbosity: VerbosityLevel) -> Self {
        self.machine.logger_mut().set_verbosity(verbosity);
        self
    }

    pub fn with_max_rejections(mut self, max_rejections: usize) -> Self {
        self.max_rejections = max_rejections.max(1);
        self
    }

    /// Run until someone wins or the turn limit is reached
    pub fn run_game(
        &mut self,
        controller1: &mut dyn PlayerController,
        controller2: &mut dyn PlayerController,
    ) -> Result<GameResult> {
        self.run(controller1, controller2, None)
    }

    /// Run at most `turns_to_run` turns, stopping early if the game ends
    ///
    /// The machine is left at the start of the next turn, ready to snapshot.
    pub fn run_turns(
        &mut self,
        controller1: &mut dyn PlayerController,
        controller2: &mut dyn PlayerController,
        turns_to_run: u32,
    ) -> Result<GameResult> {
        self.run(controller1, controller2, Some(turns_to_run))
    }

    fn run(
        &mut self,
        controller1: &mut dyn PlayerController,
        controller2: &mut dyn PlayerController,
        turns_to_run: Option<u32>,
    ) -> Result<GameResult> {
        if controller1.player_id() != PlayerId::FIRST || controller2.player_id() != PlayerId::SECOND
        {
            return Err(FarkleError::InvalidConfig(
                "controllers must be given in seat order".to_string(),
            ));
        }

        let first_turn = self.machine.state().turn_number;
        let mut rejections = 0;

        loop {
            let turns_played = self.machine.state().turn_number - first_turn;
            let phase = self.machine.state().phase;

            if phase == TurnPhase::GameOver {
                let result = self.result(turns_played, None);
                self.notify_game_end(&mut *controller1, &mut *controller2, result.winner);
                self.machine.logger().minimal(&format!(
                    "Game over after {} turns: {}",
                    self.machine.state().turn_number,
                    self.machine.state().scoreboard()
                ));
                return Ok(result);
            }

            if phase == TurnPhase::AwaitingRoll {
                if turns_to_run.is_some_and(|n| turns_played >= n) {
                    return Ok(self.result(turns_played, Some(GameEndReason::Stopped)));
                }
                if self.machine.state().turn_number > self.max_turns {
                    self.machine
                        .logger()
                        .minimal(&format!("Turn limit ({}) reached", self.max_turns));
                    return Ok(self.result(turns_played, Some(GameEndReason::TurnLimit)));
                }
            }

            match phase {
                TurnPhase::AwaitingRoll => {
                    let state = self.machine.state();
                    self.machine.logger().normal(&format!(
                        "Turn {}: {} to roll ({})",
                        state.turn_number,
                        state.current().name,
                        state.scoreboard()
                    ));
                    self.machine.start_turn()?;
                }
                TurnPhase::Busted => {
                    let lost = self
                        .machine
                        .events()
                        .last_intent()
                        .iter()
                        .find_map(|e| match e {
                            GameEvent::Busted { lost, .. } => Some(*lost),
                            _ => None,
                        })
                        .unwrap_or(0);
                    let player = self.machine.state().current_player;
                    let controller = pick(&mut *controller1, &mut *controller2, player);
                    let view = GameStateView::new(
                        self.machine.state(),
                        self.machine.config(),
                        player,
                    )
                    .with_logger(self.machine.logger());
                    controller.on_bust(&view, lost);

                    self.machine.advance_after_bust()?;
                }
                TurnPhase::AwaitingSelection => {
                    let player = self.machine.state().current_player;
                    let controller = pick(&mut *controller1, &mut *controller2, player);
                    let options = scoring_selections(&self.machine.state().active_dice);
                    if options.is_empty() {
                        return Err(FarkleError::NoScoringOptions {
                            player: player.index(),
                        });
                    }
                    let action = {
                        let view = GameStateView::new(
                            self.machine.state(),
                            self.machine.config(),
                            player,
                        )
                        .with_logger(self.machine.logger());
                        controller.choose_action(&view, &options)
                    };

                    match self.machine.apply(action.into_intent()) {
                        Ok(_) => rejections = 0,
                        Err(e) => {
                            rejections += 1;
                            self.machine.logger().normal(&format!(
                                "{} action rejected: {}",
                                controller.name(),
                                e
                            ));
                            if rejections >= self.max_rejections {
                                return Err(FarkleError::ControllerStalled {
                                    player: player.index(),
                                    attempts: rejections,
                                });
                            }
                        }
                    }
                }
                TurnPhase::GameOver => unreachable!("handled above"),
            }
        }
    }

    fn result(&self, turns_played: u32, reason: Option<GameEndReason>) -> GameResult {
        let state = self.machine.state();
        let winner = state.winner;
        let end_reason = match (winner, reason) {
            (Some(player), _) => GameEndReason::Won(player),
            (None, Some(reason)) => reason,
            (None, None) => GameEndReason::Stopped,
        };
        GameResult {
            winner,
            turns_played,
            final_scores: [state.players[0].banked_score, state.players[1].banked_score],
            end_reason,
        }
    }

    fn notify_game_end(
        &self,
        controller1: &mut dyn PlayerController,
        controller2: &mut dyn PlayerController,
        winner: Option<PlayerId>,
    ) {
        self.notify_one(controller1, winner);
        self.notify_one(controller2, winner);
    }

    fn notify_one(&self, controller: &mut dyn PlayerController, winner: Option<PlayerId>) {
        let player = controller.player_id();
        let view = GameStateView::new(self.machine.state(), self.machine.config(), player)
            .with_logger(self.machine.logger());
        controller.on_game_end(&view, winner == Some(player));
    }
}

fn pick<'c>(
    controller1: &'c mut dyn PlayerController,
    controller2: &'c mut dyn PlayerController,
    player: PlayerId,
) -> &'c mut dyn PlayerController {
    if player == PlayerId::FIRST {
        controller1
    } else {
        controller2
    }
}
