use thiserror::Error;

use crate::model::{SideId, SpotId};

/// Validation failures for the built-in content catalog. Checked once at
/// startup; consumers iterate within bounds afterwards.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentError {
    #[error("catalog section is empty: {section}")]
    EmptySection { section: &'static str },

    #[error("question {id}: correct index {index} out of range for {options} options")]
    CorrectIndexOutOfRange {
        id: u32,
        index: usize,
        options: usize,
    },

    #[error("question {id}: needs at least two options, has {options}")]
    TooFewOptions { id: u32, options: usize },

    #[error("shape {name:?}: needs at least three sides, has {sides}")]
    TooFewSides { name: String, sides: usize },

    #[error("shape {name:?}: duplicate side id {side}")]
    DuplicateSideId { name: String, side: SideId },

    #[error("shape {name:?}: parallel pair references unknown side id {side}")]
    UnknownSideInPair { name: String, side: SideId },

    #[error("shape {name:?}: no ground-truth parallel pair, puzzle is unwinnable")]
    NoParallelPairs { name: String },

    #[error("hunt scene: duplicate spot id {spot}")]
    DuplicateSpotId { spot: SpotId },
}
