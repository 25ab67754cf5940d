//! Scoring combinations and the point table

use crate::core::DieFace;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Point values of the canonical ruleset
pub struct ScoringRules;

impl ScoringRules {
    pub const FULL_STRAIGHT: u32 = 1500;
    pub const STRAIGHT_TWO_TO_SIX: u32 = 600;
    pub const STRAIGHT_ONE_TO_FIVE: u32 = 500;
    pub const TRIPLE_ONES: u32 = 1000;
    pub const TRIPLE_FACE_MULTIPLIER: u32 = 100;
    pub const SINGLE_ONE: u32 = 100;
    pub const SINGLE_FIVE: u32 = 50;

    /// Score of exactly three dice showing `face`
    pub fn triple(face: DieFace) -> u32 {
        match face.value() {
            1 => Self::TRIPLE_ONES,
            v => v as u32 * Self::TRIPLE_FACE_MULTIPLIER,
        }
    }

    /// Score of four, five or six of a kind: the triple doubled per extra die
    pub fn n_of_a_kind(face: DieFace, count: u8) -> u32 {
        match count {
            4 => Self::triple(face) * 2,
            5 => Self::triple(face) * 4,
            6 => Self::triple(face) * 8,
            _ => 0,
        }
    }

    /// Score of a lone die; only 1s and 5s score on their own
    pub fn single(face: DieFace) -> u32 {
        match face.value() {
            1 => Self::SINGLE_ONE,
            5 => Self::SINGLE_FIVE,
            _ => 0,
        }
    }
}

/// Which rule a combination matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombinationKind {
    /// One each of 1..=6
    FullStraight,
    /// One each of 2..=6
    StraightTwoToSix,
    /// One each of 1..=5
    StraightOneToFive,
    /// Four, five or six of a face
    OfAKind { face: DieFace, count: u8 },
    /// Exactly three of a face
    Triple(DieFace),
    /// Loose 1s or 5s
    Singles { face: DieFace, count: u8 },
}

impl fmt::Display for CombinationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombinationKind::FullStraight => write!(f, "full straight"),
            CombinationKind::StraightTwoToSix => write!(f, "small straight 2-6"),
            CombinationKind::StraightOneToFive => write!(f, "small straight 1-5"),
            CombinationKind::OfAKind { face, count } => write!(f, "{count} {face}s"),
            CombinationKind::Triple(face) => write!(f, "three {face}s"),
            CombinationKind::Singles { face, count: 1 } => write!(f, "single {face}"),
            CombinationKind::Singles { face, count } => write!(f, "{count} single {face}s"),
        }
    }
}

/// A rule match: the faces it accounts for and what they score
///
/// This describes face values with multiplicity, not specific dice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCombination {
    pub kind: CombinationKind,
    pub points: u32,
    /// Sorted faces this combination consumes
    pub faces_consumed: Vec<DieFace>,
}

impl ScoreCombination {
    pub fn new(kind: CombinationKind, points: u32, mut faces_consumed: Vec<DieFace>) -> Self {
        faces_consumed.sort();
        ScoreCombination {
            kind,
            points,
            faces_consumed,
        }
    }

    pub fn label(&self) -> String {
        self.kind.to_string()
    }

    pub fn dice_count(&self) -> usize {
        self.faces_consumed.len()
    }
}

impl fmt::Display for ScoreCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} pts)", self.kind, self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triple_scores() {
        assert_eq!(ScoringRules::triple(DieFace::new(1)), 1000);
        assert_eq!(ScoringRules::triple(DieFace::new(2)), 200);
        assert_eq!(ScoringRules::triple(DieFace::new(5)), 500);
        assert_eq!(ScoringRules::triple(DieFace::new(6)), 600);
    }

    #[test]
    fn test_n_of_a_kind_multipliers() {
        let one = DieFace::new(1);
        let four = DieFace::new(4);
        assert_eq!(ScoringRules::n_of_a_kind(one, 4), 2000);
        assert_eq!(ScoringRules::n_of_a_kind(one, 5), 4000);
        assert_eq!(ScoringRules::n_of_a_kind(one, 6), 8000);
        assert_eq!(ScoringRules::n_of_a_kind(four, 4), 800);
        assert_eq!(ScoringRules::n_of_a_kind(four, 3), 0);
    }

    #[test]
    fn test_singles() {
        assert_eq!(ScoringRules::single(DieFace::new(1)), 100);
        assert_eq!(ScoringRules::single(DieFace::new(5)), 50);
        assert_eq!(ScoringRules::single(DieFace::new(3)), 0);
    }

    #[test]
    fn test_labels() {
        let five = DieFace::new(5);
        assert_eq!(CombinationKind::FullStraight.to_string(), "full straight");
        assert_eq!(CombinationKind::Triple(five).to_string(), "three 5s");
        assert_eq!(
            CombinationKind::Singles { face: five, count: 1 }.to_string(),
            "single 5"
        );
        assert_eq!(
            CombinationKind::OfAKind { face: five, count: 4 }.to_string(),
            "4 5s"
        );
    }
}
