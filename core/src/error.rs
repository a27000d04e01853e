use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Field rows must be non-empty and of equal length")]
    InvalidFieldShape,
    #[error("Field must hold exactly one goal, found {found}")]
    GoalCount { found: CellCount },
    #[error("Start cell must not hold a hazard or the goal")]
    BlockedStart,
    #[error("Unknown field glyph {0:?}")]
    UnknownGlyph(char),
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("No solvable field found after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },
}

pub type Result<T> = core::result::Result<T, GameError>;
