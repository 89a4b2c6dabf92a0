//! Read-only view handed to renderers
//!
//! Plain coordinates and roles only; colours and drawing stay with the host.

use serde::Serialize;

use super::snake::{Direction, Segment};
use super::state::GameState;
use crate::consts::BIT;

/// One drawable snake cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SegmentView {
    pub x: i32,
    pub y: i32,
    /// Facing, present on the head only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<Direction>,
}

impl From<&Segment> for SegmentView {
    fn from(segment: &Segment) -> Self {
        let cell = segment.cell();
        let head = match *segment {
            Segment::Head { direction, .. } => Some(direction),
            Segment::Body { .. } => None,
        };
        Self {
            x: cell.x,
            y: cell.y,
            head,
        }
    }
}

/// Snapshot of everything visible after a tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// Side of every square/circle drawn
    pub cell_size: i32,
    /// Per player, head first
    pub snakes: Vec<Vec<SegmentView>>,
    pub obstacles: Vec<(i32, i32)>,
    pub pellet: (i32, i32),
    pub delay_ms: u32,
    pub terminated: bool,
}

impl Frame {
    pub fn capture(state: &GameState) -> Self {
        Self {
            cell_size: BIT,
            snakes: state
                .snakes
                .iter()
                .map(|snake| snake.segments().iter().map(SegmentView::from).collect())
                .collect(),
            obstacles: state.obstacles.iter().map(|o| (o.x(), o.y())).collect(),
            pellet: state.pellet.coordinates(),
            delay_ms: state.delay_ms(),
            terminated: state.is_terminated(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
