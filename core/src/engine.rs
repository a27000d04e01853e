use core::fmt;
use core::num::Saturating;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Reads a typed command, `u`, `d`, `l` or `r` in either case.
    pub fn from_command(command: &str) -> Option<Self> {
        use Direction::*;

        let command = command.trim();
        if command.eq_ignore_ascii_case("u") {
            Some(Up)
        } else if command.eq_ignore_ascii_case("d") {
            Some(Down)
        } else if command.eq_ignore_ascii_case("l") {
            Some(Left)
        } else if command.eq_ignore_ascii_case("r") {
            Some(Right)
        } else {
            None
        }
    }

    const fn delta(self) -> (isize, isize) {
        use Direction::*;
        match self {
            Up => (-1, 0),
            Down => (1, 0),
            Left => (0, -1),
            Right => (0, 1),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Playing,
    /// Walked off the edge of the field.
    Exited,
    /// Stepped on a hazard.
    Fell,
    /// Reached the goal.
    Won,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::Playing)
    }

    pub const fn message(self) -> Option<&'static str> {
        use EngineState::*;
        match self {
            Playing => None,
            Exited => Some("You have left the field. Come back and try again later."),
            Fell => Some("You fell in a hole! You lose!"),
            Won => Some("You won! You found the hat!"),
        }
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Playing
    }
}

/// One game on a field: the player position plus every cell stepped on so far.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SavedEngine")]
pub struct PlayEngine {
    field: Field,
    visited: Array2<bool>,
    position: Coord2,
    state: EngineState,
    moves: Saturating<u32>,
}

impl PlayEngine {
    pub fn new(field: Field) -> Self {
        let mut visited = Array2::from_elem(field.size().to_nd_index(), false);
        visited[START.to_nd_index()] = true;
        Self {
            field,
            visited,
            position: START,
            state: Default::default(),
            moves: Saturating(0),
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn position(&self) -> Coord2 {
        self.position
    }

    pub fn size(&self) -> Coord2 {
        self.field.size()
    }

    pub fn moves(&self) -> u32 {
        self.moves.0
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        Cell::from_terrain(self.field[coords], self.visited[coords.to_nd_index()])
    }

    pub fn step(&mut self, direction: Direction) -> Result<EngineState> {
        self.check_not_finished()?;
        self.moves += 1;

        let Some(target) = apply_delta(self.position, direction.delta(), self.size()) else {
            return Ok(self.end_game(EngineState::Exited));
        };

        let state = match self.field[target] {
            Terrain::Hazard => self.end_game(EngineState::Fell),
            Terrain::Goal => self.end_game(EngineState::Won),
            Terrain::Empty => {
                self.position = target;
                self.visited[target.to_nd_index()] = true;
                EngineState::Playing
            }
        };
        log::debug!("{:?} to {:?}: {:?}", direction, target, state);
        Ok(state)
    }

    fn end_game(&mut self, state: EngineState) -> EngineState {
        log::debug!("Game over after {} moves: {:?}", self.moves.0, state);
        self.state = state;
        state
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

/// Unchecked mirror of [`PlayEngine`] that deserialization goes through.
#[derive(Deserialize)]
struct SavedEngine {
    field: Field,
    visited: Array2<bool>,
    position: Coord2,
    state: EngineState,
    moves: Saturating<u32>,
}

impl TryFrom<SavedEngine> for PlayEngine {
    type Error = GameError;

    fn try_from(saved: SavedEngine) -> Result<Self> {
        if saved.visited.dim() != saved.field.terrain.dim() {
            return Err(GameError::InvalidFieldShape);
        }
        let position = saved.field.validate_coords(saved.position)?;
        if !saved.field[position].is_passable() || !saved.visited[position.to_nd_index()] {
            return Err(GameError::InvalidCoords);
        }

        Ok(Self {
            field: saved.field,
            visited: saved.visited,
            position,
            state: saved.state,
            moves: saved.moves,
        })
    }
}

impl fmt::Display for PlayEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.size(), |coords| self.cell_at(coords))
    }
}
