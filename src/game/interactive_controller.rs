//! Interactive text controller for human players
//!
//! Shows the roll and the scoring options, then reads a choice from stdin
//! (or any other line reader).

use crate::core::PlayerId;
use crate::frontend::{allowed_intents, intent_label};
use crate::game::controller::{GameStateView, PlayerController, TurnAction};
use crate::scoring::ScoringOption;
use std::io::{self, BufRead, Write};

/// One parsed line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Help,
    Scores,
    Choose { index: usize, bank: bool },
}

/// Parse `"2"`, `"2 b"`, `"?"` or `"s"`; `None` for anything else
fn parse_command(input: &str, num_options: usize) -> Option<Command> {
    let mut words = input.split_whitespace();
    let first = words.next()?;
    match first {
        "?" | "h" | "help" => return Some(Command::Help),
        "s" | "scores" => return Some(Command::Scores),
        _ => {}
    }

    let index: usize = first.parse().ok()?;
    if index >= num_options {
        return None;
    }
    let bank = match words.next() {
        None | Some("r") | Some("roll") => false,
        Some("b") | Some("bank") => true,
        Some(_) => return None,
    };
    if words.next().is_some() {
        return None;
    }
    Some(Command::Choose { index, bank })
}

/// A controller that prompts a human player for decisions
pub struct InteractiveController {
    player_id: PlayerId,
    input: Box<dyn BufRead>,
}

impl InteractiveController {
    pub fn new(player_id: PlayerId) -> Self {
        Self::with_input(player_id, Box::new(io::BufReader::new(io::stdin())))
    }

    /// Read choices from another source (scripts, tests)
    pub fn with_input(player_id: PlayerId, input: Box<dyn BufRead>) -> Self {
        InteractiveController { player_id, input }
    }

    fn display_help(&self, view: &GameStateView) {
        println!("\n=== Help ===");
        let labels: Vec<&str> = allowed_intents(view.state().phase)
            .iter()
            .map(|&intent| intent_label(intent))
            .collect();
        println!("Allowed now: {}", labels.join(", "));
        println!("  <n>     - hold option n and roll the remaining dice");
        println!("  <n> b   - score option n and bank the round");
        println!("  s       - show scores");
        println!("  ?       - show this help");
        println!();
    }

    fn display_roll(&self, view: &GameStateView, options: &[ScoringOption]) {
        println!(
            "\n=== {} | round {} | banked {} (opponent {}) ===",
            view.player_name(),
            view.round_score(),
            view.banked_score(),
            view.opponent_score()
        );
        let active: Vec<String> = view.active_dice().iter().map(|d| d.to_string()).collect();
        println!("Rolled: {}", active.join(" "));
        if !view.held_dice().is_empty() {
            let held: Vec<String> = view.held_dice().iter().map(|d| d.to_string()).collect();
            println!("Held:   {}", held.join(" "));
        }
        println!("Options:");
        for (i, option) in options.iter().enumerate() {
            println!("  [{i}] {option}");
        }
    }

    /// `None` on end of input or a read error
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }
}

impl PlayerController for InteractiveController {
    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn name(&self) -> &str {
        "HUMAN"
    }

    fn choose_action(&mut self, view: &GameStateView, options: &[ScoringOption]) -> TurnAction {
        self.display_roll(view, options);

        loop {
            print!("Choice (? for help): ");
            let _ = io::stdout().flush();

            let Some(line) = self.read_line() else {
                println!("\nInput closed, banking the best option");
                return TurnAction::bank(&options[0]);
            };

            match parse_command(line.trim(), options.len()) {
                Some(Command::Help) => self.display_help(view),
                Some(Command::Scores) => println!("{}", view.state().scoreboard()),
                Some(Command::Choose { index, bank: true }) => {
                    return TurnAction::bank(&options[index])
                }
                Some(Command::Choose { index, bank: false }) => {
                    return TurnAction::hold(&options[index])
                }
                None => eprintln!("Invalid choice. Enter 0-{} or ? for help.", options.len() - 1),
            }
        }
    }

    fn on_bust(&mut self, view: &GameStateView, lost: u32) {
        println!("{} busted and lost {} points", view.player_name(), lost);
    }

    fn on_game_end(&mut self, view: &GameStateView, won: bool) {
        if won {
            println!("You win with {} points!", view.banked_score());
        } else {
            println!("You lose, {}.", view.state().scoreboard());
        }
    }
}
