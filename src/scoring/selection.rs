//! Validation of a player's chosen dice

use crate::core::{DieFace, FaceCounts};
use crate::scoring::engine::{partition, Partition};
use crate::scoring::ScoreCombination;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Why a selection cannot be scored
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionError {
    #[error("nothing selected")]
    Empty,

    #[error("selection exceeds the available dice")]
    ExceedsAvailable,

    #[error("some selected dice cannot score: {}", format_faces(.unscored))]
    Unscorable { unscored: Vec<DieFace> },
}

fn format_faces(faces: &[DieFace]) -> String {
    faces
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A selection that is covered exactly by scoring combinations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredSelection {
    pub points: u32,
    pub dice_used: usize,
    pub combinations: Vec<ScoreCombination>,
}

impl fmt::Display for ScoredSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.combinations.iter().map(|c| c.kind.to_string()).collect();
        write!(f, "{} = {} pts", parts.join(" + "), self.points)
    }
}

/// Flat pass/fail view of a validation for display layers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionValidation {
    pub valid: bool,
    pub points: u32,
    pub dice_used: usize,
    pub reason: String,
}

impl From<&Result<ScoredSelection, SelectionError>> for SelectionValidation {
    fn from(result: &Result<ScoredSelection, SelectionError>) -> Self {
        match result {
            Ok(scored) => SelectionValidation {
                valid: true,
                points: scored.points,
                dice_used: scored.dice_used,
                reason: scored.to_string(),
            },
            Err(e) => SelectionValidation {
                valid: false,
                points: 0,
                dice_used: 0,
                reason: e.to_string(),
            },
        }
    }
}

/// Check that `chosen` can be taken from `rolled` and scores with no die left over
///
/// Only the chosen dice are considered when matching patterns, so a straight
/// counts only if all of its faces were selected.
pub fn validate_selection(
    rolled: &[DieFace],
    chosen: &[DieFace],
) -> Result<ScoredSelection, SelectionError> {
    if chosen.is_empty() {
        return Err(SelectionError::Empty);
    }

    let chosen_counts = FaceCounts::from_faces(chosen);
    if !FaceCounts::from_faces(rolled).contains(&chosen_counts) {
        return Err(SelectionError::ExceedsAvailable);
    }

    let Partition {
        combinations,
        leftover,
    } = partition(chosen_counts);

    if !leftover.is_empty() {
        return Err(SelectionError::Unscorable {
            unscored: leftover.to_faces(),
        });
    }

    Ok(ScoredSelection {
        points: combinations.iter().map(|c| c.points).sum(),
        dice_used: chosen.len(),
        combinations,
    })
}
