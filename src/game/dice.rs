//! Sources of die rolls
//!
//! The state machine draws every face from a `DiceSource`, so games can run
//! on a seeded RNG for reproducible play or on a fixed script in tests.

use crate::core::DieFace;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Something that can produce die faces
pub trait DiceSource {
    fn roll_face(&mut self) -> DieFace;

    fn roll(&mut self, count: usize) -> Vec<DieFace> {
        (0..count).map(|_| self.roll_face()).collect()
    }
}

/// Uniform dice backed by a seedable ChaCha RNG
///
/// The RNG state is serializable, so a paused game can keep its exact
/// upcoming rolls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeededDice {
    rng: ChaCha12Rng,
}

impl SeededDice {
    pub fn new(seed: u64) -> Self {
        SeededDice {
            rng: ChaCha12Rng::seed_from_u64(seed),
        }
    }

    /// Seed from OS entropy for casual play
    pub fn from_entropy() -> Self {
        SeededDice {
            rng: ChaCha12Rng::from_entropy(),
        }
    }
}

impl DiceSource for SeededDice {
    fn roll_face(&mut self) -> DieFace {
        DieFace::new(self.rng.gen_range(1..=6))
    }
}

/// Dice that replay a fixed list of faces
///
/// Once the script runs out, rolls continue from a seeded RNG so long games
/// in tests do not have to script every die.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    script: VecDeque<DieFace>,
    fallback: SeededDice,
}

impl ScriptedDice {
    pub fn new(faces: impl IntoIterator<Item = DieFace>) -> Self {
        ScriptedDice {
            script: faces.into_iter().collect(),
            fallback: SeededDice::new(0),
        }
    }

    /// Script from raw values.
    ///
    /// # Panics
    /// Panics on values outside 1..=6.
    pub fn from_values(values: &[u8]) -> Self {
        Self::new(values.iter().map(|&v| DieFace::new(v)))
    }

    /// Append more faces to the end of the script
    pub fn push(&mut self, values: &[u8]) {
        self.script.extend(values.iter().map(|&v| DieFace::new(v)));
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl DiceSource for ScriptedDice {
    fn roll_face(&mut self) -> DieFace {
        self.script
            .pop_front()
            .unwrap_or_else(|| self.fallback.roll_face())
    }
}
