use serde::{Deserialize, Serialize};

use crate::*;

/// Fixed contents of a cell, decided once at generation time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Terrain {
    Empty,
    Hazard,
    Goal,
}

impl Terrain {
    pub const fn is_passable(self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl Default for Terrain {
    fn default() -> Self {
        Self::Empty
    }
}

/// Player-visible tag of a cell, terrain combined with the visited layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Hazard,
    Goal,
    Visited,
}

impl Cell {
    pub const PATH_GLYPH: char = '*';
    pub const HAZARD_GLYPH: char = 'O';
    pub const GOAL_GLYPH: char = '^';
    pub const EMPTY_GLYPH: char = '░';

    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => Self::EMPTY_GLYPH,
            Self::Hazard => Self::HAZARD_GLYPH,
            Self::Goal => Self::GOAL_GLYPH,
            Self::Visited => Self::PATH_GLYPH,
        }
    }

    /// Reads a rendered glyph back, `.` is also accepted as empty ground for hand-typed fields.
    pub fn from_glyph(glyph: char) -> Result<Self> {
        match glyph {
            Self::EMPTY_GLYPH | '.' => Ok(Self::Empty),
            Self::HAZARD_GLYPH => Ok(Self::Hazard),
            Self::GOAL_GLYPH => Ok(Self::Goal),
            Self::PATH_GLYPH => Ok(Self::Visited),
            other => Err(GameError::UnknownGlyph(other)),
        }
    }

    pub(crate) const fn from_terrain(terrain: Terrain, visited: bool) -> Self {
        match (terrain, visited) {
            (_, true) => Self::Visited,
            (Terrain::Empty, false) => Self::Empty,
            (Terrain::Hazard, false) => Self::Hazard,
            (Terrain::Goal, false) => Self::Goal,
        }
    }
}
