//! Tick pacing
//!
//! One `Pace` per round, owned by the game state and handed to whichever
//! snake eats a pellet. Changes apply to the next scheduled tick.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pace {
    delay_ms: u32,
    min_delay_ms: u32,
    step_ms: u32,
}

impl Pace {
    pub fn new(initial_delay_ms: u32, min_delay_ms: u32, step_ms: u32) -> Self {
        Self {
            delay_ms: initial_delay_ms.max(min_delay_ms),
            min_delay_ms,
            step_ms,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.initial_delay_ms,
            settings.min_delay_ms,
            settings.speed_step_ms,
        )
    }

    /// Milliseconds the host should wait before the next tick
    #[inline]
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Shorten the delay by one step, never below the floor
    pub fn speed_up(&mut self) {
        self.delay_ms = self
            .delay_ms
            .saturating_sub(self.step_ms)
            .max(self.min_delay_ms);
    }
}

impl Default for Pace {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}
