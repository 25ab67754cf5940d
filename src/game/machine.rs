//! Turn state machine
//!
//! The machine is the only writer of `GameState`. Each intent is computed
//! against a copy of the current snapshot; the copy is published only if the
//! intent succeeds, so a rejected intent never leaves a half-applied state.

use crate::core::{Die, DieId};
use crate::game::{
    DiceSource, EventLog, GameConfig, GameEvent, GameLogger, GameState, Intent, IntentKind,
    SeededDice, TurnPhase,
};
use crate::scoring::{enumerate_combinations, is_bust, validate_selection, SelectionError};
use crate::Result;
use smallvec::SmallVec;
use thiserror::Error;

/// Why an intent was refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntentError {
    #[error("cannot {intent} while {phase}")]
    WrongPhase { intent: IntentKind, phase: TurnPhase },

    #[error("the game is over; start a new game")]
    GameOver,

    #[error("invalid selection: {0}")]
    InvalidSelection(#[from] SelectionError),

    #[error("die {0} is not among the active dice")]
    UnknownDie(DieId),

    #[error("die {0} was selected more than once")]
    DuplicateDie(DieId),

    #[error("nothing scored this turn, there is nothing to bank")]
    NothingToBank,
}

type Transition = std::result::Result<GameState, IntentError>;

/// Owns the authoritative game state and advances it one intent at a time
pub struct TurnStateMachine {
    config: GameConfig,
    state: GameState,
    dice: Box<dyn DiceSource>,
    events: EventLog,
    logger: GameLogger,
}

impl TurnStateMachine {
    /// New game with the given dice source
    pub fn new(config: GameConfig, dice: impl DiceSource + 'static) -> Result<Self> {
        config.validate()?;
        let state = GameState::new(&config);
        Ok(TurnStateMachine {
            config,
            state,
            dice: Box::new(dice),
            events: EventLog::new(),
            logger: GameLogger::new(),
        })
    }

    /// New game rolling from a seeded RNG
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(config, SeededDice::new(seed))
    }

    /// Continue from a previously saved state
    pub fn resume(config: GameConfig, state: GameState, dice: impl DiceSource + 'static) -> Result<Self> {
        let mut machine = Self::new(config, dice)?;
        machine.state = state;
        Ok(machine)
    }

    pub fn with_logger(mut self, logger: GameLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_event_log(mut self, events: EventLog) -> Self {
        self.events = events;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    pub fn logger(&self) -> &GameLogger {
        &self.logger
    }

    pub fn logger_mut(&mut self) -> &mut GameLogger {
        &mut self.logger
    }

    /// Apply one intent and publish the resulting snapshot
    ///
    /// On rejection the previous snapshot stays in place with the diagnostic
    /// stored in its `message`.
    pub fn apply(&mut self, intent: Intent) -> std::result::Result<&GameState, IntentError> {
        let mut events = Vec::new();
        let outcome = transition(
            &self.state,
            &self.config,
            self.dice.as_mut(),
            &intent,
            &mut events,
        );

        match outcome {
            Ok(next) => {
                for event in &events {
                    self.logger.event(event);
                    if let GameEvent::Rolled { faces, .. } = event {
                        for combo in enumerate_combinations(faces) {
                            self.logger.verbose(&format!("  available: {combo}"));
                        }
                    }
                }
                self.events.record_intent(events);
                self.state = next;
                Ok(&self.state)
            }
            Err(e) => {
                self.logger
                    .verbose(&format!("rejected {}: {}", intent.kind(), e));
                self.state.message = e.to_string();
                Err(e)
            }
        }
    }

    pub fn start_turn(&mut self) -> std::result::Result<&GameState, IntentError> {
        self.apply(Intent::StartTurn)
    }

    pub fn hold_and_continue(&mut self, dice: &[DieId]) -> std::result::Result<&GameState, IntentError> {
        self.apply(Intent::HoldAndContinue(SmallVec::from_slice(dice)))
    }

    pub fn end_turn(&mut self, dice: &[DieId]) -> std::result::Result<&GameState, IntentError> {
        self.apply(Intent::EndTurn(SmallVec::from_slice(dice)))
    }

    pub fn advance_after_bust(&mut self) -> std::result::Result<&GameState, IntentError> {
        self.apply(Intent::AdvanceAfterBust)
    }

    pub fn new_game(&mut self) -> std::result::Result<&GameState, IntentError> {
        self.apply(Intent::NewGame)
    }
}

fn transition(
    state: &GameState,
    config: &GameConfig,
    dice: &mut dyn DiceSource,
    intent: &Intent,
    events: &mut Vec<GameEvent>,
) -> Transition {
    if let Intent::NewGame = intent {
        events.push(GameEvent::NewGame);
        return Ok(GameState::new(config));
    }
    if state.phase.is_terminal() {
        return Err(IntentError::GameOver);
    }

    match intent {
        Intent::StartTurn => {
            require_phase(state, TurnPhase::AwaitingRoll, IntentKind::StartTurn)?;
            let mut next = state.clone();
            start_turn(&mut next, config, dice, events);
            Ok(next)
        }
        Intent::HoldAndContinue(ids) => {
            require_phase(state, TurnPhase::AwaitingSelection, IntentKind::HoldAndContinue)?;
            let mut next = state.clone();
            hold_and_continue(&mut next, config, dice, ids, events)?;
            Ok(next)
        }
        Intent::EndTurn(ids) => {
            require_phase(state, TurnPhase::AwaitingSelection, IntentKind::EndTurn)?;
            let mut next = state.clone();
            end_turn(&mut next, config, dice, ids, events)?;
            Ok(next)
        }
        Intent::AdvanceAfterBust => {
            require_phase(state, TurnPhase::Busted, IntentKind::AdvanceAfterBust)?;
            let mut next = state.clone();
            next.current_mut().clear_last_round();
            pass_turn(&mut next, config, dice, events);
            Ok(next)
        }
        Intent::NewGame => unreachable!("handled above"),
    }
}

fn require_phase(
    state: &GameState,
    expected: TurnPhase,
    intent: IntentKind,
) -> std::result::Result<(), IntentError> {
    if state.phase == expected {
        Ok(())
    } else {
        Err(IntentError::WrongPhase {
            intent,
            phase: state.phase,
        })
    }
}

/// Replace the active pool with `count` fresh dice and classify the roll
fn roll_active(
    next: &mut GameState,
    count: usize,
    dice: &mut dyn DiceSource,
    events: &mut Vec<GameEvent>,
) {
    let faces = dice.roll(count);
    next.active_dice = next.make_dice(&faces);
    events.push(GameEvent::Rolled {
        player: next.current_player,
        faces: faces.clone(),
    });

    if is_bust(&faces) {
        let lost = next.round_score;
        next.round_score = 0;
        next.held_dice.clear();
        next.phase = TurnPhase::Busted;
        next.message = format!("{} busted and loses {} points", next.current().name, lost);
        events.push(GameEvent::Busted {
            player: next.current_player,
            lost,
        });
    } else {
        next.phase = TurnPhase::AwaitingSelection;
        next.message = format!("{}: select scoring dice", next.current().name);
    }
}

fn start_turn(
    next: &mut GameState,
    config: &GameConfig,
    dice: &mut dyn DiceSource,
    events: &mut Vec<GameEvent>,
) {
    next.clear_turn();
    roll_active(next, config.dice_per_roll, dice, events);
}

/// Give the dice to the other player and roll their opening set
fn pass_turn(
    next: &mut GameState,
    config: &GameConfig,
    dice: &mut dyn DiceSource,
    events: &mut Vec<GameEvent>,
) {
    let from = next.current_player;
    next.rotate();
    events.push(GameEvent::TurnPassed {
        from,
        to: next.current_player,
        turn_number: next.turn_number,
    });
    start_turn(next, config, dice, events);
}

/// Score the selected active dice and move them to the held pool
fn fold_selection(
    next: &mut GameState,
    ids: &[DieId],
    events: &mut Vec<GameEvent>,
) -> std::result::Result<u32, IntentError> {
    let mut chosen: SmallVec<[Die; 6]> = SmallVec::new();
    for &id in ids {
        if chosen.iter().any(|d| d.id == id) {
            return Err(IntentError::DuplicateDie(id));
        }
        let die = next.find_active(id).ok_or(IntentError::UnknownDie(id))?;
        chosen.push(*die);
    }

    let chosen_faces: Vec<_> = chosen.iter().map(|d| d.face).collect();
    let scored = validate_selection(&next.active_faces(), &chosen_faces)?;

    next.active_dice.retain(|d| !ids.contains(&d.id));
    next.held_dice.extend(chosen);
    next.round_score += scored.points;
    next.current_mut().record_hold(scored.points);

    events.push(GameEvent::Held {
        player: next.current_player,
        faces: chosen_faces,
        points: scored.points,
        round_score: next.round_score,
    });
    Ok(scored.points)
}

fn hold_and_continue(
    next: &mut GameState,
    config: &GameConfig,
    dice: &mut dyn DiceSource,
    ids: &[DieId],
    events: &mut Vec<GameEvent>,
) -> std::result::Result<(), IntentError> {
    fold_selection(next, ids, events)?;

    let to_roll = if next.active_dice.is_empty() {
        // Hot dice: held points are already in the round score
        next.held_dice.clear();
        events.push(GameEvent::HotDice {
            player: next.current_player,
        });
        config.dice_per_roll
    } else {
        next.active_dice.len()
    };

    roll_active(next, to_roll, dice, events);
    Ok(())
}

fn end_turn(
    next: &mut GameState,
    config: &GameConfig,
    dice: &mut dyn DiceSource,
    ids: &[DieId],
    events: &mut Vec<GameEvent>,
) -> std::result::Result<(), IntentError> {
    if !ids.is_empty() {
        fold_selection(next, ids, events)?;
    }
    if next.round_score == 0 {
        return Err(IntentError::NothingToBank);
    }

    let player = next.current_player;
    let points = next.round_score;
    next.current_mut().bank(points);
    next.round_score = 0;
    let total = next.current().banked_score;
    events.push(GameEvent::Banked {
        player,
        points,
        total,
    });

    if total >= config.win_threshold {
        next.phase = TurnPhase::GameOver;
        next.winner = Some(player);
        next.message = format!("{} wins with {} points", next.current().name, total);
        events.push(GameEvent::Won { player, total });
        return Ok(());
    }

    next.current_mut().clear_last_round();
    pass_turn(next, config, dice, events);
    Ok(())
}
