//! End-to-end turn flows driven through the public state machine API

use farkle_rs::core::{DieId, PlayerId};
use farkle_rs::frontend::allowed_intents;
use farkle_rs::game::{
    GameConfig, GameEvent, GameLoop, GameState, HeuristicController, IntentError, IntentKind,
    ScriptedDice, TurnPhase, TurnStateMachine,
};
use similar_asserts::assert_eq;

fn machine(config: GameConfig, script: &[u8]) -> TurnStateMachine {
    let mut machine = TurnStateMachine::new(config, ScriptedDice::from_values(script)).unwrap();
    machine.logger_mut().enable_capture();
    machine
}

fn ids_with_faces(state: &GameState, wanted: &[u8]) -> Vec<DieId> {
    let mut remaining = wanted.to_vec();
    let mut ids = Vec::new();
    for die in &state.active_dice {
        if let Some(pos) = remaining.iter().position(|&v| v == die.face.value()) {
            remaining.remove(pos);
            ids.push(die.id);
        }
    }
    assert!(remaining.is_empty(), "faces {remaining:?} not on the table");
    ids
}

#[test]
fn test_bank_zero_then_bank_350() {
    let mut m = machine(
        GameConfig::default().with_player_names("Ann", "Ben"),
        &[3, 3, 3, 5, 2, 4, 6, 6, 2, 3, 4, 2],
    );
    m.start_turn().unwrap();

    assert_eq!(m.end_turn(&[]).unwrap_err(), IntentError::NothingToBank);
    assert_eq!(m.state().current_player, PlayerId::FIRST);
    assert_eq!(m.state().message, IntentError::NothingToBank.to_string());

    let ids = ids_with_faces(m.state(), &[3, 3, 3, 5]);
    let state = m.end_turn(&ids).unwrap().clone();

    assert_eq!(state.players[0].banked_score, 350);
    assert_eq!(state.current_player, PlayerId::SECOND);
    assert_eq!(state.scoreboard(), "Ann: 350 | Ben: 0");
    // Ben's opening roll busts
    assert_eq!(state.phase, TurnPhase::Busted);

    let kinds: Vec<_> = m
        .events()
        .last_intent()
        .iter()
        .map(|e| std::mem::discriminant(e))
        .collect();
    let expected: Vec<_> = [
        GameEvent::Held {
            player: PlayerId::FIRST,
            faces: vec![],
            points: 0,
            round_score: 0,
        },
        GameEvent::Banked {
            player: PlayerId::FIRST,
            points: 0,
            total: 0,
        },
        GameEvent::TurnPassed {
            from: PlayerId::FIRST,
            to: PlayerId::SECOND,
            turn_number: 0,
        },
        GameEvent::Rolled {
            player: PlayerId::SECOND,
            faces: vec![],
        },
        GameEvent::Busted {
            player: PlayerId::SECOND,
            lost: 0,
        },
    ]
    .iter()
    .map(std::mem::discriminant)
    .collect();
    assert_eq!(kinds, expected);
}

#[test]
fn test_hold_hold_bust_loses_round() {
    let mut m = machine(GameConfig::default(), &[1, 5, 2, 3, 3, 6, 5, 2, 2, 4, 6, 4, 6]);
    m.start_turn().unwrap();

    let ids = ids_with_faces(m.state(), &[1, 5]);
    assert_eq!(m.hold_and_continue(&ids).unwrap().round_score, 150);

    // 4 6 6 on the third roll
    let ids = ids_with_faces(m.state(), &[5]);
    let state = m.hold_and_continue(&ids).unwrap();
    assert_eq!(state.phase, TurnPhase::Busted);
    assert_eq!(state.round_score, 0);
    assert!(state.held_dice.is_empty());
    assert_eq!(state.active_dice.len(), 3);
    assert_eq!(state.current().last_round_score, 50);
    assert!(m
        .events()
        .last_intent()
        .contains(&GameEvent::Busted {
            player: PlayerId::FIRST,
            lost: 200
        }));
}

#[test]
fn test_bust_after_holding() {
    let mut m = machine(GameConfig::default(), &[1, 2, 3, 4, 6, 6, 2, 3, 4, 6, 6]);
    m.start_turn().unwrap();
    let ids = ids_with_faces(m.state(), &[1]);

    let state = m.hold_and_continue(&ids).unwrap().clone();
    assert_eq!(state.phase, TurnPhase::Busted);
    assert_eq!(state.round_score, 0);
    assert!(state.held_dice.is_empty());
    assert_eq!(state.players[0].banked_score, 0);
    assert_eq!(allowed_intents(state.phase), &[IntentKind::AdvanceAfterBust, IntentKind::NewGame]);

    let state = m.advance_after_bust().unwrap();
    assert_eq!(state.current_player, PlayerId::SECOND);
    assert_eq!(state.players[0].last_round_score, 0);
}

#[test]
fn test_advance_into_another_bust() {
    let mut m = machine(
        GameConfig::default(),
        &[1, 2, 3, 4, 6, 6, 2, 3, 4, 6, 6, 2, 2, 3, 3, 4, 6, 5, 2, 3, 4, 6, 6],
    );
    m.start_turn().unwrap();
    let ids = ids_with_faces(m.state(), &[1]);
    let state = m.hold_and_continue(&ids).unwrap();
    assert_eq!(state.phase, TurnPhase::Busted);
    assert_eq!(state.current().last_round_score, 100);

    // the second player's opening roll busts straight away
    let state = m.advance_after_bust().unwrap().clone();
    assert_eq!(state.phase, TurnPhase::Busted);
    assert_eq!(state.current_player, PlayerId::SECOND);
    assert_eq!(state.turn_number, 2);
    assert_eq!(state.players[0].last_round_score, 0);
    assert_eq!(state.players[0].banked_score, 0);
    assert!(m.events().last_intent().contains(&GameEvent::Busted {
        player: PlayerId::SECOND,
        lost: 0
    }));

    let state = m.advance_after_bust().unwrap();
    assert_eq!(state.current_player, PlayerId::FIRST);
    assert_eq!(state.turn_number, 3);
    assert_eq!(state.phase, TurnPhase::AwaitingSelection);
}

#[test]
fn test_hot_dice_keeps_round() {
    let mut m = machine(GameConfig::default(), &[5, 5, 5, 1, 1, 1, 2, 3, 4, 6, 6, 1]);
    m.start_turn().unwrap();
    let ids: Vec<DieId> = m.state().active_dice.iter().map(|d| d.id).collect();

    let state = m.hold_and_continue(&ids).unwrap().clone();
    assert_eq!(state.round_score, 1500);
    assert_eq!(state.active_dice.len(), 6);
    assert!(state.held_dice.is_empty());

    let ids = ids_with_faces(&state, &[1]);
    let state = m.end_turn(&ids).unwrap();
    assert_eq!(state.players[0].banked_score, 1600);
}

#[test]
fn test_partial_selection_rejected() {
    let mut m = machine(GameConfig::default(), &[5, 5, 5, 2, 3, 4]);
    m.start_turn().unwrap();
    let before = m.state().clone();

    let ids = ids_with_faces(m.state(), &[5, 5, 2]);
    assert!(matches!(
        m.hold_and_continue(&ids),
        Err(IntentError::InvalidSelection(_))
    ));
    assert_eq!(m.state().active_dice, before.active_dice);
    assert_eq!(m.state().held_dice, before.held_dice);
    assert_eq!(m.state().round_score, before.round_score);
}

#[test]
fn test_game_over_only_accepts_new_game() {
    let config = GameConfig::default().with_win_threshold(500);
    let mut m = machine(config, &[1, 1, 1, 1, 5, 2]);
    m.start_turn().unwrap();
    let ids = ids_with_faces(m.state(), &[1, 1, 1, 1, 5]);

    let state = m.end_turn(&ids).unwrap();
    assert_eq!(state.phase, TurnPhase::GameOver);
    assert_eq!(state.winner, Some(PlayerId::FIRST));
    assert_eq!(state.players[0].banked_score, 2050);

    for result in [
        m.start_turn().map(|_| ()),
        m.hold_and_continue(&[]).map(|_| ()),
        m.end_turn(&[]).map(|_| ()),
        m.advance_after_bust().map(|_| ()),
    ] {
        assert_eq!(result, Err(IntentError::GameOver));
    }

    let state = m.new_game().unwrap();
    assert_eq!(state.phase, TurnPhase::AwaitingRoll);
    assert_eq!(state.turn_number, 1);
}

#[test]
fn test_full_ai_game_to_default_threshold() {
    let mut m = TurnStateMachine::with_seed(GameConfig::default(), 2024).unwrap();
    m.logger_mut().enable_capture();
    let mut p1 = HeuristicController::new(PlayerId::FIRST);
    let mut p2 = HeuristicController::new(PlayerId::SECOND).with_bank_target(500);

    let result = GameLoop::new(&mut m).run_game(&mut p1, &mut p2).unwrap();
    let winner = result.winner.expect("game finishes well within the turn limit");
    assert!(result.final_scores[winner.index()] >= 10_000);
    assert!(result.final_scores[winner.other().index()] < 10_000);

    let banked: u32 = m
        .events()
        .history()
        .iter()
        .filter_map(|e| match e {
            GameEvent::Banked { player, points, .. } if *player == winner => Some(*points),
            _ => None,
        })
        .sum();
    assert_eq!(banked, result.final_scores[winner.index()]);
}
