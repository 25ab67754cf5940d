//! Farkle rules engine
//!
//! A scoring engine for six-sided dice combinations and a turn state machine
//! that turns player intents into immutable game snapshots, plus the
//! controllers, game loop and tournament runner built on top of them.

pub mod core;
pub mod error;
pub mod frontend;
pub mod game;
pub mod scoring;
pub mod tournament;

pub use error::{FarkleError, Result};
