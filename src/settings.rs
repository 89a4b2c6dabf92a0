//! Round settings
//!
//! Loaded from a JSON file by the host; every field falls back to the
//! classic single-player defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;
use crate::sim::Layout;

/// Round configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of snakes on the field (1 or 2)
    pub players: usize,

    // === Pacing ===
    /// Delay between ticks at round start
    pub initial_delay_ms: u32,
    /// Floor the delay never drops below
    pub min_delay_ms: u32,
    /// Delay removed per pellet eaten
    pub speed_step_ms: u32,

    // === Placement ===
    /// Random placement retries before giving up
    pub max_placement_attempts: u32,
    /// Fixed obstacle layout; `None` rolls one per reset
    pub layout: Option<Layout>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            players: 1,

            initial_delay_ms: INITIAL_DELAY_MS,
            min_delay_ms: MIN_DELAY_MS,
            speed_step_ms: SPEED_STEP_MS,

            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
            layout: None,
        }
    }
}

impl Settings {
    /// Two-snake variant of the defaults
    pub fn two_player() -> Self {
        Self {
            players: 2,
            ..Self::default()
        }
    }

    /// Reject configurations the simulation cannot run
    pub fn validate(&self) -> Result<(), SimError> {
        if self.players == 0 || self.players > MAX_PLAYERS {
            return Err(SimError::InvalidSettings(format!(
                "players must be between 1 and {MAX_PLAYERS}, got {}",
                self.players
            )));
        }
        if self.min_delay_ms == 0 {
            return Err(SimError::InvalidSettings(
                "min_delay_ms must be positive".to_string(),
            ));
        }
        if self.initial_delay_ms < self.min_delay_ms {
            return Err(SimError::InvalidSettings(format!(
                "initial_delay_ms ({}) is below min_delay_ms ({})",
                self.initial_delay_ms, self.min_delay_ms
            )));
        }
        if self.max_placement_attempts == 0 {
            return Err(SimError::InvalidSettings(
                "max_placement_attempts must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
