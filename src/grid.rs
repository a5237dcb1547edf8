use core::fmt;

use heapless::Vec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_OBSTACLES: usize = 64;

/// A cell on the unbounded grid. Any pair of signed coordinates is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell reached by applying a (dx, dy) offset.
    pub fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("obstacle field full (capacity {MAX_OBSTACLES})")]
    FieldFull,
}

/// The set of blocked cells, owned by the caller and passed by reference
/// into movement checks so independent simulations never share state.
#[derive(Debug, Default, Clone)]
pub struct ObstacleField {
    cells: Vec<Position, MAX_OBSTACLES>,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Build a field from a coordinate list. Duplicates collapse.
    pub fn from_positions<I>(positions: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Position>,
    {
        let mut field = Self::new();
        for pos in positions {
            field.add_position(pos)?;
        }
        Ok(field)
    }

    /// Records (x, y) as blocked. Adding the same cell twice has no
    /// additional effect.
    pub fn add(&mut self, x: i32, y: i32) -> Result<(), GridError> {
        self.add_position(Position::new(x, y))
    }

    pub fn add_position(&mut self, pos: Position) -> Result<(), GridError> {
        if self.cells.contains(&pos) {
            return Ok(());
        }
        self.cells.push(pos).map_err(|_| GridError::FieldFull)
    }

    /// True iff (x, y) was previously added.
    pub fn has_obstacle(&self, x: i32, y: i32) -> bool {
        self.blocked(Position::new(x, y))
    }

    pub fn blocked(&self, pos: Position) -> bool {
        self.cells.iter().any(|&cell| cell == pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.cells.iter()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
