//! Tournament mode for running many AI games in parallel
//!
//! Games run on rayon's thread pool. Each game gets its own dice seed and
//! controller seeds derived from the tournament seed, so a tournament is
//! reproducible regardless of scheduling.

use crate::core::PlayerId;
use crate::game::{
    GameConfig, GameEndReason, GameLoop, HeuristicController, PlayerController, RandomController,
    TurnStateMachine, VerbosityLevel,
};
use crate::{FarkleError, Result};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

/// Controller type for tournament games
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerType {
    Random,
    Heuristic,
}

impl ControllerType {
    fn build(self, player: PlayerId, seed: u64) -> Box<dyn PlayerController> {
        match self {
            ControllerType::Random => Box::new(RandomController::with_seed(player, seed)),
            ControllerType::Heuristic => Box::new(HeuristicController::new(player)),
        }
    }
}

/// Aggregated results of a tournament
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TournamentStats {
    pub games: usize,
    pub p1_wins: usize,
    pub p2_wins: usize,
    /// Games that hit the turn limit
    pub unfinished: usize,
    /// Games that ended with an error
    pub failed: usize,
    pub total_turns: u64,
    pub total_winning_score: u64,
}

impl TournamentStats {
    fn record(&mut self, outcome: &Result<(Option<PlayerId>, u32, [u32; 2])>) {
        self.games += 1;
        match outcome {
            Ok((Some(winner), turns, scores)) => {
                if *winner == PlayerId::FIRST {
                    self.p1_wins += 1;
                } else {
                    self.p2_wins += 1;
                }
                self.total_turns += u64::from(*turns);
                self.total_winning_score += u64::from(scores[winner.index()]);
            }
            Ok((None, turns, _)) => {
                self.unfinished += 1;
                self.total_turns += u64::from(*turns);
            }
            Err(_) => self.failed += 1,
        }
    }

    pub fn decided(&self) -> usize {
        self.p1_wins + self.p2_wins
    }

    pub fn average_turns(&self) -> f64 {
        let played = self.games - self.failed;
        if played == 0 {
            0.0
        } else {
            self.total_turns as f64 / played as f64
        }
    }

    pub fn average_winning_score(&self) -> f64 {
        if self.decided() == 0 {
            0.0
        } else {
            self.total_winning_score as f64 / self.decided() as f64
        }
    }

    fn percent(&self, count: usize) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            100.0 * count as f64 / self.games as f64
        }
    }
}

/// Seed for game `game_idx` of a tournament
fn game_seed(seed: u64, game_idx: usize) -> u64 {
    seed.wrapping_add((game_idx as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

fn play_one(
    config: &GameConfig,
    p1_type: ControllerType,
    p2_type: ControllerType,
    seed: u64,
    max_turns: u32,
) -> Result<(Option<PlayerId>, u32, [u32; 2])> {
    let mut machine = TurnStateMachine::with_seed(config.clone(), seed)?;
    let mut controller1 = p1_type.build(PlayerId::FIRST, seed.wrapping_add(0x1234_5678_9ABC_DEF0));
    let mut controller2 = p2_type.build(PlayerId::SECOND, seed.wrapping_add(0xFEDC_BA98_7654_3210));

    let result = GameLoop::new(&mut machine)
        .with_verbosity(VerbosityLevel::Silent)
        .with_max_turns(max_turns)
        .run_game(&mut *controller1, &mut *controller2)?;

    let winner = match result.end_reason {
        GameEndReason::Won(player) => Some(player),
        GameEndReason::TurnLimit | GameEndReason::Stopped => None,
    };
    Ok((winner, result.turns_played, result.final_scores))
}

/// Play `games` games in parallel and collect statistics
pub fn run_tourney(
    games: usize,
    p1_type: ControllerType,
    p2_type: ControllerType,
    seed: u64,
    config: &GameConfig,
    max_turns: u32,
) -> Result<TournamentStats> {
    if games == 0 {
        return Err(FarkleError::InvalidConfig(
            "tournament needs at least one game".to_string(),
        ));
    }
    config.validate()?;

    let completed = AtomicUsize::new(0);
    let outcomes: Vec<_> = (0..games)
        .into_par_iter()
        .map(|game_idx| {
            let outcome = play_one(config, p1_type, p2_type, game_seed(seed, game_idx), max_turns);
            if let Err(e) = &outcome {
                eprintln!("Warning: Game {} failed: {}", game_idx, e);
            }
            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
            if done % 1000 == 0 {
                println!("Completed {} games", done);
            }
            outcome
        })
        .collect();

    let mut stats = TournamentStats::default();
    for outcome in &outcomes {
        stats.record(outcome);
    }
    Ok(stats)
}

/// Run a tournament and print the report
pub fn run_and_report(
    games: usize,
    p1_type: ControllerType,
    p2_type: ControllerType,
    seed: u64,
    config: &GameConfig,
    max_turns: u32,
) -> Result<TournamentStats> {
    println!("=== Farkle - Tournament Mode ===\n");
    println!("Running {games} games to {} points", config.win_threshold);
    println!("Using tournament seed: {seed}");
    println!("Controllers: P1={:?}, P2={:?}\n", p1_type, p2_type);

    let start = Instant::now();
    let stats = run_tourney(games, p1_type, p2_type, seed, config, max_turns)?;
    let elapsed = start.elapsed();

    println!("\n=== Tournament Complete ===");
    println!("Total games played: {}", stats.games);
    println!("Elapsed time: {:.2}s", elapsed.as_secs_f64());
    println!(
        "Games per second: {:.2}\n",
        stats.games as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
    );

    println!("=== Results ===");
    println!("P1 wins: {} ({:.1}%)", stats.p1_wins, stats.percent(stats.p1_wins));
    println!("P2 wins: {} ({:.1}%)", stats.p2_wins, stats.percent(stats.p2_wins));
    if stats.unfinished > 0 {
        println!("Unfinished: {} ({:.1}%)", stats.unfinished, stats.percent(stats.unfinished));
    }
    if stats.failed > 0 {
        println!("Failed: {}", stats.failed);
    }
    println!("Average turns: {:.1}", stats.average_turns());
    println!("Average winning score: {:.0}", stats.average_winning_score());

    Ok(stats)
}
