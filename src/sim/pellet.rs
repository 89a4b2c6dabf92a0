//! The pellet snakes chase

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::obstacle::Obstacle;
use super::placement::Placer;
use crate::Cell;
use crate::error::SimError;

/// One live pellet per round; relocated in place when eaten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pellet {
    cell: Cell,
}

impl Pellet {
    /// Pellet at a fixed corner (no obstacle check)
    pub fn at(cell: Cell) -> Self {
        Self { cell }
    }

    /// Pellet at a random corner clear of `obstacles`
    pub fn spawn<R: Rng>(placer: &mut Placer<R>, obstacles: &[Obstacle]) -> Result<Self, SimError> {
        Ok(Self {
            cell: placer.pellet_cell(obstacles)?,
        })
    }

    /// Move to a new random corner clear of `obstacles`.
    ///
    /// On failure the pellet keeps its old position.
    pub fn place<R: Rng>(
        &mut self,
        placer: &mut Placer<R>,
        obstacles: &[Obstacle],
    ) -> Result<(), SimError> {
        self.cell = placer.pellet_cell(obstacles)?;
        Ok(())
    }

    #[inline]
    pub fn cell(&self) -> Cell {
        self.cell
    }

    pub fn coordinates(&self) -> (i32, i32) {
        (self.cell.x, self.cell.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use crate::consts::MAX_PLACEMENT_ATTEMPTS;

    #[test]
    fn test_place_moves_in_place() {
        let mut placer = Placer::new(Pcg32::seed_from_u64(9), MAX_PLACEMENT_ATTEMPTS);
        let mut pellet = Pellet::at(Cell::new(-100, -100));
        pellet.place(&mut placer, &[]).unwrap();
        let (x, y) = pellet.coordinates();
        assert!(x >= 0 && y >= 0);
    }

    #[test]
    fn test_failed_place_keeps_position() {
        let obstacles: Vec<Obstacle> = (-2..60)
            .flat_map(|i| (-2..60).map(move |j| Obstacle::new(i * 10, j * 10)))
            .collect();
        let mut placer = Placer::new(Pcg32::seed_from_u64(9), 20);
        let mut pellet = Pellet::at(Cell::new(7, 7));
        assert!(pellet.place(&mut placer, &obstacles).is_err());
        assert_eq!(pellet.coordinates(), (7, 7));
    }
}
