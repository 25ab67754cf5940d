//! Combination enumeration and bust detection
//!
//! Patterns are matched in priority order. Each match removes its dice from
//! the working counts, so lower-priority rules only see what is left:
//! straights first, then four/five/six of a kind, then triples, then loose
//! 1s and 5s.

use crate::core::{DieFace, FaceCounts};
use crate::scoring::{CombinationKind, ScoreCombination, ScoringRules};
use std::collections::HashSet;

/// Result of matching every rule against a set of faces
#[derive(Debug, Clone)]
pub(crate) struct Partition {
    /// Non-overlapping matches, in the order the rules found them
    pub combinations: Vec<ScoreCombination>,
    /// Faces no rule claimed
    pub leftover: FaceCounts,
}

fn faces(values: &[u8]) -> Vec<DieFace> {
    values.iter().map(|&v| DieFace::new(v)).collect()
}

fn has_run(counts: &FaceCounts, run: &[u8]) -> bool {
    run.iter().all(|&v| counts[DieFace::new(v)] >= 1)
}

/// Greedily claim faces with the highest-priority rule that matches
pub(crate) fn partition(counts: FaceCounts) -> Partition {
    let mut remaining = counts;
    let mut combinations = Vec::new();

    if remaining.total() == 6 && DieFace::ALL.iter().all(|&f| remaining[f] == 1) {
        combinations.push(ScoreCombination::new(
            CombinationKind::FullStraight,
            ScoringRules::FULL_STRAIGHT,
            remaining.to_faces(),
        ));
        return Partition {
            combinations,
            leftover: FaceCounts::new(),
        };
    }

    // With at most six dice only one small straight can be present; both
    // would need all six faces, which is the full straight above.
    const HIGH_RUN: [u8; 5] = [2, 3, 4, 5, 6];
    const LOW_RUN: [u8; 5] = [1, 2, 3, 4, 5];
    let straight = if has_run(&remaining, &HIGH_RUN) {
        Some((CombinationKind::StraightTwoToSix, ScoringRules::STRAIGHT_TWO_TO_SIX, &HIGH_RUN))
    } else if has_run(&remaining, &LOW_RUN) {
        Some((CombinationKind::StraightOneToFive, ScoringRules::STRAIGHT_ONE_TO_FIVE, &LOW_RUN))
    } else {
        None
    };
    if let Some((kind, points, run)) = straight {
        for face in faces(run) {
            remaining.remove(face, 1);
        }
        combinations.push(ScoreCombination::new(kind, points, faces(run)));
    }

    for face in DieFace::ALL {
        let count = remaining[face];
        if count >= 4 {
            combinations.push(ScoreCombination::new(
                CombinationKind::OfAKind { face, count },
                ScoringRules::n_of_a_kind(face, count),
                vec![face; count as usize],
            ));
            remaining.remove(face, count);
        }
    }

    for face in DieFace::ALL {
        if remaining[face] == 3 {
            combinations.push(ScoreCombination::new(
                CombinationKind::Triple(face),
                ScoringRules::triple(face),
                vec![face; 3],
            ));
            remaining.remove(face, 3);
        }
    }

    for face in DieFace::ALL {
        let count = remaining[face];
        let per_die = ScoringRules::single(face);
        if count > 0 && per_die > 0 {
            combinations.push(ScoreCombination::new(
                CombinationKind::Singles { face, count },
                per_die * count as u32,
                vec![face; count as usize],
            ));
            remaining.remove(face, count);
        }
    }

    Partition {
        combinations,
        leftover: remaining,
    }
}

/// Every scoring pattern present in `faces`, best first
///
/// Rows are deduplicated by (faces, points) and zero-point rows are never
/// produced. An empty result means the roll is a bust.
pub fn enumerate_combinations(faces: &[DieFace]) -> Vec<ScoreCombination> {
    let Partition { combinations, .. } = partition(FaceCounts::from_faces(faces));

    let mut seen = HashSet::new();
    let mut unique: Vec<ScoreCombination> = combinations
        .into_iter()
        .filter(|c| c.points > 0)
        .filter(|c| seen.insert((c.faces_consumed.clone(), c.points)))
        .collect();

    // Stable sort keeps rule order among equal scores
    unique.sort_by(|a, b| b.points.cmp(&a.points));
    unique
}

/// True when no combination can be scored from `faces`
pub fn is_bust(faces: &[DieFace]) -> bool {
    enumerate_combinations(faces).is_empty()
}

/// Best total a set of faces can bank if every scoring die is kept
pub fn max_score(faces: &[DieFace]) -> u32 {
    enumerate_combinations(faces).iter().map(|c| c.points).sum()
}
