use thiserror::Error;

use crate::rules::face::{Face, FaceKind};

pub type Result<T> = std::result::Result<T, Error>;

/// Contract violations surfaced by dice, games, and analyzers.
///
/// Each variant is raised immediately at the call that violates the contract,
/// before any state is mutated. None of these are transient faults, so
/// nothing is retried internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("a die needs at least one face")]
    EmptyFaceList,
    #[error("faces must all be {expected:?}, found {found:?}")]
    MixedFaceKinds { expected: FaceKind, found: FaceKind },
    #[error("duplicate face: {0}")]
    DuplicateFace(Face),
    #[error("face {0} is not on this die")]
    UnknownFace(Face),
    #[error("weight must be finite and non-negative, got {0}")]
    InvalidWeight(f64),
    #[error("roll count must be positive")]
    InvalidRollCount,
    #[error("number of rolls to play must be positive")]
    InvalidPlayCount,
    #[error("every weight on this die is zero")]
    AllWeightsZero,
    #[error("a game needs at least one die")]
    EmptyDiceList,
    #[error("no game has been played yet")]
    NoGamePlayed,
    #[error("unknown results layout {0:?}, expected \"wide\" or \"narrow\"")]
    InvalidLayout(String),
}
