#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use core::str::FromStr;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use analysis::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod analysis;
mod engine;
mod error;
mod generator;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub hazard_chance: u8,
}

impl GameConfig {
    pub const DEFAULT_SIZE: Coord2 = (10, 10);
    pub const DEFAULT_HAZARD_CHANCE: u8 = 45;

    pub const fn new_unchecked(size: Coord2, hazard_chance: u8) -> Self {
        Self {
            size,
            hazard_chance,
        }
    }

    /// Clamps the size to at least one cell per axis and the hazard chance to a percentage.
    pub fn new((rows, columns): Coord2, hazard_chance: u8) -> Self {
        let config = Self::new_unchecked((rows.max(1), columns.max(1)), hazard_chance.min(100));
        if config.size != (rows, columns) || config.hazard_chance != hazard_chance {
            log::warn!(
                "Clamped game config, requested {}x{} at {}%, using {}x{} at {}%",
                rows,
                columns,
                hazard_chance,
                config.size.0,
                config.size.1,
                config.hazard_chance
            );
        }
        config
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_SIZE, Self::DEFAULT_HAZARD_CHANCE)
    }
}

/// Immutable terrain of one puzzle: hazards, the goal, and open ground.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Array2<Terrain>", into = "Array2<Terrain>")]
pub struct Field {
    terrain: Array2<Terrain>,
}

impl Field {
    /// Wraps generated terrain without checking the goal and start invariants.
    pub(crate) fn from_terrain_unchecked(terrain: Array2<Terrain>) -> Self {
        Self { terrain }
    }

    pub fn from_terrain(terrain: Array2<Terrain>) -> Result<Self> {
        let field = Self::from_terrain_unchecked(terrain);
        field.validate()?;
        Ok(field)
    }

    pub fn validate(&self) -> Result<()> {
        let (rows, columns) = self.terrain.dim();
        let max = usize::from(Coord::MAX);
        if rows == 0 || columns == 0 || rows > max || columns > max {
            return Err(GameError::InvalidFieldShape);
        }

        if self.terrain[START.to_nd_index()] != Terrain::Empty {
            return Err(GameError::BlockedStart);
        }

        match self.goal_count() {
            1 => Ok(()),
            found => Err(GameError::GoalCount { found }),
        }
    }

    pub fn size(&self) -> Coord2 {
        array_size(&self.terrain)
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, columns) = self.size();
        mult(rows, columns)
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let (rows, columns) = self.size();
        coords.0 < rows && coords.1 < columns
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn goal(&self) -> Option<Coord2> {
        self.terrain
            .indexed_iter()
            .find(|&(_, &terrain)| terrain == Terrain::Goal)
            .map(|((row, column), _)| (row as Coord, column as Coord))
    }

    pub fn goal_count(&self) -> CellCount {
        self.count(Terrain::Goal)
    }

    pub fn hazard_count(&self) -> CellCount {
        self.count(Terrain::Hazard)
    }

    /// Tag of a cell before any move, the start shows as already visited.
    pub fn cell_at(&self, coords: Coord2) -> Cell {
        Cell::from_terrain(self[coords], coords == START)
    }

    fn count(&self, kind: Terrain) -> CellCount {
        self.terrain
            .iter()
            .filter(|&&terrain| terrain == kind)
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }
}

impl TryFrom<Array2<Terrain>> for Field {
    type Error = GameError;

    fn try_from(terrain: Array2<Terrain>) -> Result<Self> {
        Self::from_terrain(terrain)
    }
}

impl From<Field> for Array2<Terrain> {
    fn from(field: Field) -> Self {
        field.terrain
    }
}

impl Index<Coord2> for Field {
    type Output = Terrain;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.terrain[coords.to_nd_index()]
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.size(), |coords| self.cell_at(coords))
    }
}

/// Parses one line of glyphs per row, blank lines are ignored.
///
/// A path glyph (`*`) is open ground; only the goal and hazards carry terrain.
impl FromStr for Field {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let mut cells = Vec::new();
        let mut rows = 0;
        let mut columns = None;

        for line in s.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let before = cells.len();
            for glyph in line.chars() {
                cells.push(match Cell::from_glyph(glyph)? {
                    Cell::Empty | Cell::Visited => Terrain::Empty,
                    Cell::Hazard => Terrain::Hazard,
                    Cell::Goal => Terrain::Goal,
                });
            }
            let width = cells.len() - before;
            if *columns.get_or_insert(width) != width {
                return Err(GameError::InvalidFieldShape);
            }
            rows += 1;
        }

        let terrain = Array2::from_shape_vec((rows, columns.unwrap_or(0)), cells)
            .map_err(|_| GameError::InvalidFieldShape)?;
        Self::from_terrain(terrain)
    }
}

pub(crate) fn write_rows(
    f: &mut fmt::Formatter<'_>,
    (rows, columns): Coord2,
    cell_at: impl Fn(Coord2) -> Cell,
) -> fmt::Result {
    for row in 0..rows {
        for column in 0..columns {
            write!(f, "{}", cell_at((row, column)).glyph())?;
        }
        writeln!(f)?;
    }
    Ok(())
}
