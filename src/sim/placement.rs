//! Bounded random placement
//!
//! Owns the round RNG. Coordinates are drawn as `u * range` from a uniform
//! `u` in `[0, 1)` and truncated toward zero, so the spawn range keeps its
//! lopsided distribution around zero.

use rand::Rng;

use super::geometry::placement_blocked;
use super::obstacle::{self, Obstacle};
use super::snake::Direction;
use crate::Cell;
use crate::consts::*;
use crate::error::{PlacedEntity, SimError};

#[derive(Debug, Clone)]
pub struct Placer<R> {
    rng: R,
    max_attempts: u32,
}

impl<R: Rng> Placer<R> {
    pub fn new(rng: R, max_attempts: u32) -> Self {
        Self { rng, max_attempts }
    }

    pub fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Upper-left corner for a pellet, clear of every obstacle
    pub fn pellet_cell(&mut self, obstacles: &[Obstacle]) -> Result<Cell, SimError> {
        let range = (DIM - BIT - PLACEMENT_MARGIN) as f64;
        self.sample_clear(obstacles, PlacedEntity::Pellet, |u| u * range)
    }

    /// Head corner for a new snake; may land slightly off-field
    pub fn snake_head(&mut self, obstacles: &[Obstacle]) -> Result<Cell, SimError> {
        let dim = DIM as f64;
        let margin = PLACEMENT_MARGIN as f64;
        self.sample_clear(obstacles, PlacedEntity::Snake, |u| u * dim - margin)
    }

    pub fn direction(&mut self) -> Direction {
        let index = (self.rng.random::<f64>() * 4.0) as usize;
        Direction::from_index(index)
    }

    fn sample_clear(
        &mut self,
        obstacles: &[Obstacle],
        entity: PlacedEntity,
        scale: impl Fn(f64) -> f64,
    ) -> Result<Cell, SimError> {
        for _ in 0..self.max_attempts {
            let x = scale(self.rng.random::<f64>()) as i32;
            let y = scale(self.rng.random::<f64>()) as i32;
            let candidate = Cell::new(x, y);
            if !placement_blocked(candidate, obstacle::cells(obstacles)) {
                return Ok(candidate);
            }
        }
        log::warn!(
            "Gave up placing {} after {} attempts ({} obstacles)",
            entity,
            self.max_attempts,
            obstacles.len()
        );
        Err(SimError::PlacementExhausted {
            entity,
            attempts: self.max_attempts,
        })
    }
}
