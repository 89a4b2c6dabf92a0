//! Simulation errors

use std::fmt;

use thiserror::Error;

/// What a placement loop was trying to put on the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacedEntity {
    Pellet,
    Snake,
}

impl fmt::Display for PlacedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacedEntity::Pellet => f.write_str("pellet"),
            PlacedEntity::Snake => f.write_str("snake"),
        }
    }
}

/// Errors raised by the simulation core
///
/// Terminal collisions are not errors; they surface as
/// [`crate::sim::GameEvent::Crashed`].
#[derive(Debug, Error)]
pub enum SimError {
    /// Random placement gave up; the obstacle layout is too dense
    #[error("could not place {entity} clear of obstacles after {attempts} attempts")]
    PlacementExhausted { entity: PlacedEntity, attempts: u32 },

    /// Settings failed validation
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// Settings or frame JSON could not be (de)serialized
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings file could not be read
    #[error("settings io error: {0}")]
    Io(#[from] std::io::Error),
}
