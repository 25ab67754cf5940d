//! Die faces, rolled dice, and face-count buckets

use crate::core::DieId;
use crate::{FarkleError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// The value showing on a die, always in 1..=6
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DieFace(u8);

impl DieFace {
    pub const ALL: [DieFace; 6] = [
        DieFace(1),
        DieFace(2),
        DieFace(3),
        DieFace(4),
        DieFace(5),
        DieFace(6),
    ];

    /// Build a face from a value known to be in range.
    ///
    /// # Panics
    /// Panics if `value` is outside 1..=6. Use [`DieFace::try_new`] for
    /// untrusted input.
    pub fn new(value: u8) -> Self {
        assert!((1..=6).contains(&value), "die face out of range: {value}");
        DieFace(value)
    }

    pub fn try_new(value: u8) -> Result<Self> {
        if (1..=6).contains(&value) {
            Ok(DieFace(value))
        } else {
            Err(FarkleError::InvalidFace(value))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Zero-based bucket index used by [`FaceCounts`]
    fn bucket(&self) -> usize {
        (self.0 - 1) as usize
    }
}

impl TryFrom<u8> for DieFace {
    type Error = FarkleError;

    fn try_from(value: u8) -> Result<Self> {
        DieFace::try_new(value)
    }
}

impl From<DieFace> for u8 {
    fn from(face: DieFace) -> u8 {
        face.0
    }
}

impl fmt::Display for DieFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DieFace {
    type Err = FarkleError;

    fn from_str(s: &str) -> Result<Self> {
        let value: u8 = s
            .trim()
            .parse()
            .map_err(|_| FarkleError::ParseError(format!("Invalid die face: '{}'", s.trim())))?;
        DieFace::try_new(value)
    }
}

/// Parse a comma or space separated list of faces like "1,1,5,2,3,4"
pub fn parse_faces(s: &str) -> Result<Vec<DieFace>> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(DieFace::from_str)
        .collect()
}

/// A die sitting in the active or held pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    pub id: DieId,
    pub face: DieFace,
}

impl Die {
    pub fn new(id: DieId, face: DieFace) -> Self {
        Die { id, face }
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}:{}", self.id, self.face)
    }
}

/// Number of dice showing each face, one bucket per face 1..=6
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FaceCounts([u8; 6]);

impl FaceCounts {
    pub fn new() -> Self {
        FaceCounts([0; 6])
    }

    pub fn from_faces(faces: &[DieFace]) -> Self {
        let mut counts = FaceCounts::new();
        for face in faces {
            counts.add(*face, 1);
        }
        counts
    }

    pub fn add(&mut self, face: DieFace, n: u8) {
        self.0[face.bucket()] += n;
    }

    /// Remove `n` dice of `face`, saturating at zero
    pub fn remove(&mut self, face: DieFace, n: u8) {
        let bucket = &mut self.0[face.bucket()];
        *bucket = bucket.saturating_sub(n);
    }

    pub fn total(&self) -> usize {
        self.0.iter().map(|&c| c as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// True if every face in `other` is present here at least as often
    pub fn contains(&self, other: &FaceCounts) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(have, want)| have >= want)
    }

    /// Iterate `(face, count)` over all six buckets in face order
    pub fn iter(&self) -> impl Iterator<Item = (DieFace, u8)> + '_ {
        DieFace::ALL.iter().map(move |&face| (face, self[face]))
    }

    /// Expand back into a sorted face list
    pub fn to_faces(&self) -> Vec<DieFace> {
        self.iter()
            .flat_map(|(face, count)| std::iter::repeat(face).take(count as usize))
            .collect()
    }
}

impl Index<DieFace> for FaceCounts {
    type Output = u8;

    fn index(&self, face: DieFace) -> &u8 {
        &self.0[face.bucket()]
    }
}
