//! Scoring engine: pure functions over multisets of die faces

pub mod combination;
pub mod engine;
pub mod options;
pub mod selection;

pub use combination::{CombinationKind, ScoreCombination, ScoringRules};
pub use engine::{enumerate_combinations, is_bust, max_score};
pub use options::{scoring_selections, ScoringOption};
pub use selection::{validate_selection, ScoredSelection, SelectionError, SelectionValidation};
