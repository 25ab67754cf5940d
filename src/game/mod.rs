//! Turn structure, game state and the players that drive it

pub mod config;
pub mod controller;
pub mod dice;
pub mod events;
pub mod game_loop;
pub mod heuristic_controller;
pub mod interactive_controller;
pub mod logger;
pub mod machine;
pub mod phase;
pub mod random_controller;
pub mod snapshot;
pub mod state;

pub use config::{GameConfig, DEFAULT_DICE_PER_ROLL, DEFAULT_WIN_THRESHOLD};
pub use controller::{GameStateView, PlayerController, TurnAction};
pub use dice::{DiceSource, ScriptedDice, SeededDice};
pub use events::{EventLog, GameEvent};
pub use game_loop::{GameEndReason, GameLoop, GameResult, VerbosityLevel};
pub use heuristic_controller::HeuristicController;
pub use interactive_controller::InteractiveController;
pub use logger::{GameLogger, LogEntry, OutputMode};
pub use machine::{IntentError, TurnStateMachine};
pub use phase::{Intent, IntentKind, TurnPhase};
pub use random_controller::RandomController;
pub use snapshot::{GameSnapshot, SnapshotError};
pub use state::{DicePool, GameState};
