//! Grid Snake - deterministic simulation core for a grid snake game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, wrap, collisions, pacing)
//! - `settings`: Data-driven round configuration
//! - `error`: Failure taxonomy shared by every fallible operation
//!
//! Rendering, keyboard plumbing and the host timer live outside this crate.
//! The host asks [`sim::tick()`] to advance one step and schedules the next
//! call after [`sim::TickReport::delay_ms`].

pub mod error;
pub mod settings;
pub mod sim;

pub use error::SimError;
pub use settings::Settings;

use glam::{DVec2, IVec2};

/// Field and entity constants
pub mod consts {
    /// Side length of one grid cell (every entity is BIT x BIT)
    pub const BIT: i32 = 20;
    /// Side length of the square playing field
    pub const DIM: i32 = 600;

    /// Inset applied when wrapping on the vertical axis (and, oddly, leftward)
    pub const WRAP_INSET_Y: i32 = 38;
    /// Inset applied when wrapping rightward
    pub const WRAP_INSET_X: i32 = 15;

    /// Margin trimmed from the random placement ranges
    pub const PLACEMENT_MARGIN: i32 = 50;

    /// Segments a freshly spawned snake owns
    pub const INITIAL_LENGTH: usize = 3;
    /// Segments appended per pellet
    pub const GROWTH_PER_PELLET: usize = 3;

    /// Pacing defaults (milliseconds between ticks)
    pub const INITIAL_DELAY_MS: u32 = 150;
    pub const MIN_DELAY_MS: u32 = 20;
    pub const SPEED_STEP_MS: u32 = 5;

    /// Default retry cap for random placement
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

    /// Most snakes a round supports
    pub const MAX_PLAYERS: usize = 2;
}

/// A cell's upper-left corner in field units
pub type Cell = IVec2;

/// Center of the BIT x BIT square anchored at `cell`, in f64 so corners
/// anywhere in `i32` range stay representable
#[inline]
pub fn cell_center(cell: Cell) -> DVec2 {
    cell.as_dvec2() + DVec2::splat((consts::BIT / 2) as f64)
}
