//! Static obstacles

use serde::{Deserialize, Serialize};

use crate::Cell;

/// An immutable BIT x BIT block on the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    cell: Cell,
}

impl Obstacle {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            cell: Cell::new(x, y),
        }
    }

    #[inline]
    pub fn cell(&self) -> Cell {
        self.cell
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.cell.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.cell.y
    }
}

impl From<Cell> for Obstacle {
    fn from(cell: Cell) -> Self {
        Self { cell }
    }
}

/// Iterate obstacle corners for the geometry predicates
pub(crate) fn cells(obstacles: &[Obstacle]) -> impl Iterator<Item = Cell> + '_ {
    obstacles.iter().map(Obstacle::cell)
}
