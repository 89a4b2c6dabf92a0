//! Obstacle layouts rolled on each reset
//!
//! Four layouts, picked uniformly unless settings fix one. The core accepts
//! any obstacle list; these are just the ones the classic game ships with.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::obstacle::Obstacle;
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layout {
    /// No obstacles
    Open,
    /// 10..=49 obstacles anywhere on the field
    Scattered,
    /// 10..=29 scattered obstacles inside a border
    BorderedScattered,
    /// Border only
    Bordered,
}

impl Layout {
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Layout::Open,
            1 => Layout::Scattered,
            2 => Layout::BorderedScattered,
            _ => Layout::Bordered,
        }
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::from_index((rng.random::<f64>() * 4.0) as usize)
    }

    pub fn has_border(self) -> bool {
        matches!(self, Layout::BorderedScattered | Layout::Bordered)
    }

    fn scattered_count<R: Rng>(self, rng: &mut R) -> usize {
        match self {
            Layout::Scattered => (rng.random::<f64>() * 40.0 + 10.0) as usize,
            Layout::BorderedScattered => (rng.random::<f64>() * 20.0 + 10.0) as usize,
            Layout::Open | Layout::Bordered => 0,
        }
    }

    /// Build the obstacle list for this layout
    pub fn generate<R: Rng>(self, rng: &mut R) -> Vec<Obstacle> {
        let count = self.scattered_count(rng);
        let mut obstacles = Vec::with_capacity(count + if self.has_border() { border_len() } else { 0 });

        let dim = DIM as f64;
        for _ in 0..count {
            let x = (rng.random::<f64>() * dim) as i32;
            let y = (rng.random::<f64>() * dim) as i32;
            obstacles.push(Obstacle::new(x, y));
        }

        if self.has_border() {
            obstacles.extend(border());
        }

        log::info!("Layout {:?}: {} obstacles ({} scattered)", self, obstacles.len(), count);
        obstacles
    }
}

fn border_len() -> usize {
    4 * (DIM / BIT + 1) as usize
}

/// Border ring: top row, left column, bottom row and right column at their
/// inset positions
fn border() -> impl Iterator<Item = Obstacle> {
    (0..=DIM).step_by(BIT as usize).flat_map(|i| {
        [
            Obstacle::new(i, 0),
            Obstacle::new(0, i),
            Obstacle::new(i, DIM - WRAP_INSET_Y - BIT),
            Obstacle::new(DIM - WRAP_INSET_X - BIT, i),
        ]
    })
}
