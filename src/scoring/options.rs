//! Legal selections over a concrete pool of dice
//!
//! Controllers and menus need actual die ids to submit, not just face
//! patterns. With at most six dice there are only 63 non-empty subsets, so
//! they are simply all tried.

use crate::core::{Die, DieFace, DieId};
use crate::scoring::validate_selection;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashSet;
use std::fmt;

/// A selection of active dice that would be accepted by a hold or bank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringOption {
    pub dice: SmallVec<[DieId; 6]>,
    pub faces: SmallVec<[DieFace; 6]>,
    pub points: u32,
    /// Every active die is used, so holding these earns a fresh set of dice
    pub hot_dice: bool,
}

impl fmt::Display for ScoringOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let faces: Vec<String> = self.faces.iter().map(|f| f.to_string()).collect();
        write!(f, "[{}] for {} pts", faces.join(" "), self.points)?;
        if self.hot_dice {
            write!(f, " (hot dice)")?;
        }
        Ok(())
    }
}

/// All distinct scoring selections in `pool`, best first
///
/// Selections with the same faces are reported once, using the lowest die
/// ids. Ordering is by points, then by number of dice used.
pub fn scoring_selections(pool: &[Die]) -> Vec<ScoringOption> {
    let rolled: Vec<DieFace> = pool.iter().map(|d| d.face).collect();
    let n = pool.len().min(6);
    let mut seen: HashSet<SmallVec<[DieFace; 6]>> = HashSet::new();
    let mut options = Vec::new();

    for mask in 1u32..(1 << n) {
        let chosen: SmallVec<[Die; 6]> = (0..n)
            .filter(|&i| mask & (1 << i) != 0)
            .map(|i| pool[i])
            .collect();

        let mut faces: SmallVec<[DieFace; 6]> = chosen.iter().map(|d| d.face).collect();
        faces.sort();
        if !seen.insert(faces.clone()) {
            continue;
        }

        if let Ok(scored) = validate_selection(&rolled, &faces) {
            options.push(ScoringOption {
                dice: chosen.iter().map(|d| d.id).collect(),
                faces,
                points: scored.points,
                hot_dice: scored.dice_used == pool.len(),
            });
        }
    }

    options.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.dice.len().cmp(&a.dice.len()))
    });
    options
}
