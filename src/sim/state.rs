//! Game state owned by the simulation controller
//!
//! Everything a round needs lives here: obstacles, snakes, the pellet, the
//! shared pace and the seeded RNG behind every placement.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::frame::Frame;
use super::layout::Layout;
use super::obstacle::Obstacle;
use super::pace::Pace;
use super::pellet::Pellet;
use super::placement::Placer;
use super::snake::{Direction, Snake};
use crate::error::SimError;
use crate::settings::Settings;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ticks advance the snakes
    Running,
    /// A snake crashed; ticks are ignored until `reset`
    GameOver,
}

/// Complete round state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was built from
    pub seed: u64,
    pub settings: Settings,
    /// Rounds started, including the current one
    pub round: u32,
    /// Ticks advanced this round
    pub time_ticks: u64,
    pub phase: GamePhase,
    /// Layout used for the current round, `None` for a caller-supplied list
    pub layout: Option<Layout>,
    pub obstacles: Vec<Obstacle>,
    /// One snake per player, player 0 first
    pub snakes: Vec<Snake>,
    pub pellet: Pellet,
    pub pace: Pace,
    pub(crate) placer: Placer<Pcg32>,
}

impl GameState {
    /// Start a round with a generated obstacle layout
    pub fn new(settings: Settings, seed: u64) -> Result<Self, SimError> {
        let mut state = Self::blank(settings, seed)?;
        state.reset()?;
        Ok(state)
    }

    /// Start a round on a caller-supplied obstacle list
    pub fn with_obstacles(
        settings: Settings,
        seed: u64,
        obstacles: Vec<Obstacle>,
    ) -> Result<Self, SimError> {
        let mut state = Self::blank(settings, seed)?;
        state.start_round(None, obstacles)?;
        Ok(state)
    }

    fn blank(settings: Settings, seed: u64) -> Result<Self, SimError> {
        settings.validate()?;
        let placer = Placer::new(Pcg32::seed_from_u64(seed), settings.max_placement_attempts);
        let pace = Pace::from_settings(&settings);
        Ok(Self {
            seed,
            settings,
            round: 0,
            time_ticks: 0,
            phase: GamePhase::Running,
            layout: None,
            obstacles: Vec::new(),
            snakes: Vec::new(),
            pellet: Pellet::at(crate::Cell::ZERO),
            pace,
            placer,
        })
    }

    /// Throw the round away and start a fresh one: new layout, snakes,
    /// pellet and pace.
    ///
    /// On error the previous round is left untouched.
    pub fn reset(&mut self) -> Result<(), SimError> {
        let layout = self
            .settings
            .layout
            .unwrap_or_else(|| Layout::random(self.placer.rng()));
        let obstacles = layout.generate(self.placer.rng());
        self.start_round(Some(layout), obstacles)
    }

    fn start_round(&mut self, layout: Option<Layout>, obstacles: Vec<Obstacle>) -> Result<(), SimError> {
        let mut snakes = Vec::with_capacity(self.settings.players);
        for _ in 0..self.settings.players {
            snakes.push(Snake::spawn(&mut self.placer, &obstacles)?);
        }
        let pellet = Pellet::spawn(&mut self.placer, &obstacles)?;

        self.round += 1;
        self.time_ticks = 0;
        self.phase = GamePhase::Running;
        self.layout = layout;
        self.obstacles = obstacles;
        self.snakes = snakes;
        self.pellet = pellet;
        self.pace = Pace::from_settings(&self.settings);

        log::info!(
            "Round {} started: {} snake(s), {} obstacles, pellet at {:?}",
            self.round,
            self.snakes.len(),
            self.obstacles.len(),
            self.pellet.coordinates()
        );
        Ok(())
    }

    /// Steer `player`'s snake.
    ///
    /// Exact reversals of the current direction and unknown players are
    /// dropped without touching state. Returns whether the turn applied.
    pub fn request_turn(&mut self, player: usize, direction: Direction) -> bool {
        let Some(snake) = self.snakes.get_mut(player) else {
            return false;
        };
        if direction == snake.direction().opposite() {
            log::debug!("Player {} reversal to {:?} ignored", player, direction);
            return false;
        }
        snake.turn(direction);
        true
    }

    /// Milliseconds the host should wait before the next tick
    pub fn delay_ms(&self) -> u32 {
        self.pace.delay_ms()
    }

    pub fn is_terminated(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Read-only snapshot for a renderer
    pub fn frame(&self) -> Frame {
        Frame::capture(self)
    }
}
