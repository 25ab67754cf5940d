//! Core game types: dice, faces, players

pub mod die;
pub mod entity;
pub mod player;

pub use die::{parse_faces, Die, DieFace, FaceCounts};
pub use entity::{DieId, PlayerId};
pub use player::Player;
