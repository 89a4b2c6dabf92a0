//! One simulation step
//!
//! Order within a tick: queued turns, every snake moves, pellet checks in
//! player order, the pace is read for the host timer, then every snake is
//! tested for a terminal crash. Any crash ends the round.

use serde::Serialize;

use super::snake::Direction;
use super::state::{GamePhase, GameState};
use crate::consts::MAX_PLAYERS;
use crate::error::SimError;

/// Input gathered by the host since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Requested direction per player, filtered by `GameState::request_turn`
    pub turns: [Option<Direction>; MAX_PLAYERS],
}

impl TickInput {
    pub fn turn(player: usize, direction: Direction) -> Self {
        let mut input = Self::default();
        if let Some(slot) = input.turns.get_mut(player) {
            *slot = Some(direction);
        }
        input
    }
}

/// Why a snake stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Crash {
    Obstacle,
    Snake,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    PelletEaten { player: usize, length: usize },
    Crashed { player: usize, cause: Crash },
}

/// What the host needs after a tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickReport {
    pub events: Vec<GameEvent>,
    /// Delay before the next tick
    pub delay_ms: u32,
    pub terminated: bool,
}

/// Advance the round by exactly one step.
///
/// A finished round is left alone; the report just repeats the terminal
/// state. Errors only come from relocating an eaten pellet, and they end
/// the round as well.
pub fn tick(state: &mut GameState, input: &TickInput) -> Result<TickReport, SimError> {
    if state.phase == GamePhase::GameOver {
        return Ok(TickReport {
            events: Vec::new(),
            delay_ms: state.delay_ms(),
            terminated: true,
        });
    }

    for (player, turn) in input.turns.iter().enumerate() {
        if let Some(direction) = *turn {
            state.request_turn(player, direction);
        }
    }

    state.time_ticks += 1;
    let mut events = Vec::new();

    for snake in &mut state.snakes {
        snake.advance();
    }

    for (player, snake) in state.snakes.iter_mut().enumerate() {
        let ate = match snake.check_hit_pellet(
            &mut state.pellet,
            &state.obstacles,
            &mut state.placer,
            &mut state.pace,
        ) {
            Ok(ate) => ate,
            Err(err) => {
                // Half-applied tick: the round cannot continue from here
                state.phase = GamePhase::GameOver;
                log::warn!(
                    "Round {} aborted on tick {}: {}",
                    state.round,
                    state.time_ticks,
                    err
                );
                return Err(err);
            }
        };
        if ate {
            events.push(GameEvent::PelletEaten {
                player,
                length: snake.len(),
            });
        }
    }

    let delay_ms = state.pace.delay_ms();

    for (player, snake) in state.snakes.iter().enumerate() {
        let opponent = state
            .snakes
            .iter()
            .enumerate()
            .find(|(other, _)| *other != player)
            .map(|(_, s)| s);
        let cause = if snake.check_hit_obstacle(&state.obstacles) {
            Some(Crash::Obstacle)
        } else if snake.check_head_in_snake(opponent) {
            Some(Crash::Snake)
        } else {
            None
        };
        if let Some(cause) = cause {
            events.push(GameEvent::Crashed { player, cause });
        }
    }

    let terminated = events
        .iter()
        .any(|e| matches!(e, GameEvent::Crashed { .. }));
    if terminated {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Round {} over after {} ticks: {:?}",
            state.round,
            state.time_ticks,
            events
        );
    }

    Ok(TickReport {
        events,
        delay_ms,
        terminated,
    })
}
