//! Farkle - Main Binary
//!
//! Play games between AI and human controllers, score dice from the command
//! line, or run AI tournaments.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use farkle_rs::{
    core::{parse_faces, Die, DieId, PlayerId},
    game::{
        GameConfig, GameEndReason, GameLoop, GameSnapshot, HeuristicController,
        InteractiveController, PlayerController, RandomController, SeededDice, TurnStateMachine,
        VerbosityLevel,
    },
    scoring::{
        enumerate_combinations, is_bust, max_score, scoring_selections, validate_selection,
        SelectionValidation,
    },
    tournament,
};
use std::path::{Path, PathBuf};

/// Controller type for players
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ControllerType {
    /// Makes random choices
    Random,
    /// Threshold-based AI
    Heuristic,
    /// Text UI controller for human play via stdin
    Tui,
}

#[derive(Parser)]
#[command(name = "farkle")]
#[command(about = "Farkle - dice game rules engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game
    Play {
        /// Player 1 controller type
        #[arg(long, value_enum, default_value = "tui")]
        p1: ControllerType,

        /// Player 2 controller type
        #[arg(long, value_enum, default_value = "heuristic")]
        p2: ControllerType,

        /// Player 1 name
        #[arg(long)]
        p1_name: Option<String>,

        /// Player 2 name
        #[arg(long)]
        p2_name: Option<String>,

        /// Set random seed for deterministic games
        #[arg(long)]
        seed: Option<u64>,

        /// Score needed to win (overrides the config file)
        #[arg(long)]
        win_score: Option<u32>,

        /// JSON config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Verbosity level for game output (0=silent, 1=minimal, 2=normal, 3=verbose)
        #[arg(long, default_value = "normal", short = 'v')]
        verbosity: VerbosityLevel,

        /// Abandon the game after this many turns
        #[arg(long, default_value = "1000")]
        max_turns: u32,

        /// Stop after this many turns and save a snapshot
        #[arg(long)]
        stop_after_turns: Option<u32>,

        /// Where to write the snapshot when stopping early
        #[arg(long, value_name = "FILE", default_value = "game.snapshot")]
        snapshot_output: PathBuf,

        /// Resume from a snapshot file
        #[arg(long, value_name = "FILE")]
        start_from: Option<PathBuf>,
    },

    /// Score a set of dice, e.g. `farkle score 1,1,5,2,3,4`
    Score {
        /// Dice faces, comma or space separated
        dice: String,

        /// Check this selection from the dice
        #[arg(long)]
        select: Option<String>,
    },

    /// Run AI games in parallel and report statistics
    Tourney {
        /// Number of games
        #[arg(long, default_value = "1000")]
        games: usize,

        #[arg(long, value_enum, default_value = "heuristic")]
        p1: ControllerType,

        #[arg(long, value_enum, default_value = "random")]
        p2: ControllerType,

        #[arg(long)]
        seed: Option<u64>,

        #[arg(long)]
        win_score: Option<u32>,

        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        #[arg(long, default_value = "1000")]
        max_turns: u32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            p1,
            p2,
            p1_name,
            p2_name,
            seed,
            win_score,
            config,
            verbosity,
            max_turns,
            stop_after_turns,
            snapshot_output,
            start_from,
        } => {
            let mut game_config = load_config(config.as_deref(), win_score)?;
            if let Some(name) = p1_name {
                game_config.player_names[0] = name;
            }
            if let Some(name) = p2_name {
                game_config.player_names[1] = name;
            }
            run_play(
                game_config,
                p1,
                p2,
                seed,
                verbosity,
                max_turns,
                stop_after_turns,
                &snapshot_output,
                start_from.as_deref(),
            )
        }
        Commands::Score { dice, select } => run_score(&dice, select.as_deref()),
        Commands::Tourney {
            games,
            p1,
            p2,
            seed,
            win_score,
            config,
            max_turns,
        } => {
            let game_config = load_config(config.as_deref(), win_score)?;
            let seed = seed.unwrap_or_else(rand::random);
            tournament::run_and_report(
                games,
                tourney_controller(p1)?,
                tourney_controller(p2)?,
                seed,
                &game_config,
                max_turns,
            )?;
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>, win_score: Option<u32>) -> anyhow::Result<GameConfig> {
    let mut config = match path {
        Some(path) => GameConfig::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(score) = win_score {
        config.win_threshold = score;
    }
    config.validate()?;
    Ok(config)
}

fn build_controller(kind: ControllerType, player: PlayerId, seed: u64) -> Box<dyn PlayerController> {
    match kind {
        ControllerType::Random => Box::new(RandomController::with_seed(player, seed)),
        ControllerType::Heuristic => Box::new(HeuristicController::new(player)),
        ControllerType::Tui => Box::new(InteractiveController::new(player)),
    }
}

fn tourney_controller(kind: ControllerType) -> anyhow::Result<tournament::ControllerType> {
    match kind {
        ControllerType::Random => Ok(tournament::ControllerType::Random),
        ControllerType::Heuristic => Ok(tournament::ControllerType::Heuristic),
        ControllerType::Tui => bail!("tournaments only run AI controllers"),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_play(
    config: GameConfig,
    p1_type: ControllerType,
    p2_type: ControllerType,
    seed: Option<u64>,
    verbosity: VerbosityLevel,
    max_turns: u32,
    stop_after_turns: Option<u32>,
    snapshot_output: &Path,
    start_from: Option<&Path>,
) -> anyhow::Result<()> {
    println!("=== Farkle ===\n");

    let seed = seed.unwrap_or_else(rand::random);
    println!("Using random seed: {seed}");

    let mut machine = match start_from {
        Some(path) => {
            println!("Loading game from snapshot: {}", path.display());
            let snapshot = GameSnapshot::load_from_file(path)
                .with_context(|| format!("loading snapshot {}", path.display()))?;
            println!("  Resuming at turn {}\n", snapshot.state.turn_number);
            snapshot.into_machine(SeededDice::new(seed))?
        }
        None => TurnStateMachine::with_seed(config, seed)?,
    };

    let names = machine.config().player_names.clone();
    println!("  {}: ({p1_type:?})", names[0]);
    println!("  {}: ({p2_type:?})", names[1]);
    println!("  Playing to {}\n", machine.config().win_threshold);

    let mut controller1 = build_controller(p1_type, PlayerId::FIRST, seed.wrapping_add(1));
    let mut controller2 = build_controller(p2_type, PlayerId::SECOND, seed.wrapping_add(2));

    let mut game_loop = GameLoop::new(&mut machine)
        .with_verbosity(verbosity)
        .with_max_turns(max_turns);
    let result = match stop_after_turns {
        Some(turns) => game_loop.run_turns(&mut *controller1, &mut *controller2, turns)?,
        None => game_loop.run_game(&mut *controller1, &mut *controller2)?,
    };

    match result.end_reason {
        GameEndReason::Won(player) => {
            println!(
                "\n{} wins after {} turns ({} - {})",
                names[player.index()],
                result.turns_played,
                result.final_scores[0],
                result.final_scores[1]
            );
        }
        GameEndReason::TurnLimit => {
            println!("\nNo winner after {} turns", result.turns_played);
        }
        GameEndReason::Stopped => {
            GameSnapshot::from_machine(&machine)
                .save_to_file(snapshot_output)
                .with_context(|| format!("saving snapshot {}", snapshot_output.display()))?;
            println!(
                "\nStopped after {} turns, snapshot saved to {}",
                result.turns_played,
                snapshot_output.display()
            );
        }
    }
    Ok(())
}

fn run_score(dice: &str, select: Option<&str>) -> anyhow::Result<()> {
    let faces = parse_faces(dice)?;
    if faces.is_empty() || faces.len() > 6 {
        bail!("expected 1 to 6 dice, got {}", faces.len());
    }

    let shown: Vec<String> = faces.iter().map(|f| f.to_string()).collect();
    println!("Dice: {}", shown.join(" "));

    if is_bust(&faces) {
        println!("Bust! No scoring combinations.");
    } else {
        println!("Combinations:");
        for combo in enumerate_combinations(&faces) {
            println!("  {combo}");
        }
        println!("Best total: {}", max_score(&faces));

        let pool: Vec<Die> = faces
            .iter()
            .enumerate()
            .map(|(i, &face)| Die::new(DieId::new(i as u32), face))
            .collect();
        println!("Selections:");
        for option in scoring_selections(&pool) {
            println!("  {option}");
        }
    }

    if let Some(select) = select {
        let chosen = parse_faces(select)?;
        let validation = SelectionValidation::from(&validate_selection(&faces, &chosen));
        println!(
            "Selection: {}, {} dice, {} pts ({})",
            if validation.valid { "valid" } else { "invalid" },
            validation.dice_used,
            validation.points,
            validation.reason
        );
    }
    Ok(())
}
