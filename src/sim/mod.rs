//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Host-driven ticks only (no clocks, no sleeping)
//! - Seeded RNG only
//! - Stable iteration order (by player index)
//! - No rendering or input dependencies

pub mod frame;
pub mod geometry;
pub mod layout;
pub mod obstacle;
pub mod pace;
pub mod pellet;
pub mod placement;
pub mod snake;
pub mod state;
pub mod tick;

pub use frame::{Frame, SegmentView};
pub use geometry::{cells_touch, closer_than, placement_blocked, placement_overlaps, within};
pub use layout::Layout;
pub use obstacle::Obstacle;
pub use pace::Pace;
pub use pellet::Pellet;
pub use placement::Placer;
pub use snake::{Direction, Segment, Snake};
pub use state::{GamePhase, GameState};
pub use tick::{Crash, GameEvent, TickInput, TickReport, tick};
