//! Snakes: ordered segments, movement with wrap, growth and collisions
//!
//! Segment 0 is always the head and carries the facing direction; every
//! other segment is plain body. Movement pushes a new head, demotes the old
//! one and drops the tail, so length only changes through pellets.
//!
//! `Snake::turn` applies any direction it is given. Rejecting a 180° reversal
//! is the caller's job (see `GameState::request_turn`).

use std::collections::VecDeque;

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::cells_touch;
use super::obstacle::Obstacle;
use super::pace::Pace;
use super::pellet::Pellet;
use super::placement::Placer;
use crate::Cell;
use crate::consts::*;
use crate::error::SimError;

/// Direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Direction {
    /// Map 0..4 onto a direction (anything larger is Left)
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Direction::Up,
            1 => Direction::Right,
            2 => Direction::Down,
            _ => Direction::Left,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// One-cell offset in screen coordinates (y grows downward)
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -BIT),
            Direction::Right => IVec2::new(BIT, 0),
            Direction::Down => IVec2::new(0, BIT),
            Direction::Left => IVec2::new(-BIT, 0),
        }
    }

    /// Next head corner from `from`, wrapping at the field edges.
    ///
    /// The wrap test looks at the current corner, not the stepped one, and
    /// the insets differ per edge (leftward wrap reuses the vertical inset).
    pub fn step(self, from: Cell) -> Cell {
        let (x, y) = (from.x, from.y);
        match self {
            Direction::Up if y > 0 => Cell::new(x, y - BIT),
            Direction::Up => Cell::new(x, DIM - WRAP_INSET_Y - BIT),
            Direction::Right if x < DIM - WRAP_INSET_X => Cell::new(x + BIT, y),
            Direction::Right => Cell::new(0, y),
            Direction::Down if y < DIM - WRAP_INSET_Y => Cell::new(x, y + BIT),
            Direction::Down => Cell::new(x, 0),
            Direction::Left if x > 0 => Cell::new(x - BIT, y),
            Direction::Left => Cell::new(DIM - WRAP_INSET_Y + BIT, y),
        }
    }
}

/// One cell of a snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    Head { cell: Cell, direction: Direction },
    Body { cell: Cell },
}

impl Segment {
    #[inline]
    pub fn cell(&self) -> Cell {
        match *self {
            Segment::Head { cell, .. } | Segment::Body { cell } => cell,
        }
    }

    pub fn is_head(&self) -> bool {
        matches!(self, Segment::Head { .. })
    }
}

/// Serialize-only: every `Snake` comes from `new` or `spawn`, so it always
/// holds at least one segment and a `Head` at index 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snake {
    segments: VecDeque<Segment>,
    direction: Direction,
}

impl Snake {
    /// Three-segment snake with its head at `head`, trailing opposite to
    /// `direction`
    pub fn new(head: Cell, direction: Direction) -> Self {
        let back = direction.opposite().delta();
        let mut segments = VecDeque::with_capacity(INITIAL_LENGTH + GROWTH_PER_PELLET);
        segments.push_back(Segment::Head {
            cell: head,
            direction,
        });
        for i in 1..INITIAL_LENGTH as i32 {
            segments.push_back(Segment::Body {
                cell: head + back * i,
            });
        }
        Self {
            segments,
            direction,
        }
    }

    /// Random facing and a head corner that clears every obstacle.
    ///
    /// Only the head is tested; the trailing segments may sit on obstacles.
    pub fn spawn<R: Rng>(placer: &mut Placer<R>, obstacles: &[Obstacle]) -> Result<Self, SimError> {
        let direction = placer.direction();
        let head = placer.snake_head(obstacles)?;
        Ok(Self::new(head, direction))
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn head(&self) -> Cell {
        self.segments[0].cell()
    }

    pub fn segments(&self) -> &VecDeque<Segment> {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Face `direction` and re-tag the head to match. No reversal check.
    pub fn turn(&mut self, direction: Direction) {
        self.direction = direction;
        let cell = self.head();
        self.segments[0] = Segment::Head { cell, direction };
    }

    /// Advance one cell in the current direction
    pub fn advance(&mut self) {
        let old_head = self.head();
        let new_head = self.direction.step(old_head);
        self.segments[0] = Segment::Body { cell: old_head };
        self.segments.push_front(Segment::Head {
            cell: new_head,
            direction: self.direction,
        });
        self.segments.pop_back();
    }

    /// Append body segments stacked on the current tail
    pub fn grow(&mut self, count: usize) {
        let tail = self.segments[self.segments.len() - 1].cell();
        for _ in 0..count {
            self.segments.push_back(Segment::Body { cell: tail });
        }
    }

    /// Whether the head currently touches `pellet`
    pub fn reaches(&self, pellet: &Pellet) -> bool {
        cells_touch(self.head(), pellet.cell())
    }

    /// Eat the pellet if the head touches it: relocate it, grow by three and
    /// speed the round up. Returns whether anything was eaten.
    pub fn check_hit_pellet<R: Rng>(
        &mut self,
        pellet: &mut Pellet,
        obstacles: &[Obstacle],
        placer: &mut Placer<R>,
        pace: &mut Pace,
    ) -> Result<bool, SimError> {
        if !self.reaches(pellet) {
            return Ok(false);
        }
        pellet.place(placer, obstacles)?;
        self.grow(GROWTH_PER_PELLET);
        pace.speed_up();
        log::debug!(
            "Pellet eaten at {:?}, length now {}, delay {}ms",
            self.head(),
            self.len(),
            pace.delay_ms()
        );
        Ok(true)
    }

    pub fn check_hit_obstacle(&self, obstacles: &[Obstacle]) -> bool {
        let head = self.head();
        obstacles.iter().any(|o| cells_touch(head, o.cell()))
    }

    /// Whether this head touches `target`'s body.
    ///
    /// Against itself the scan starts at index 2 so the head and neck never
    /// count; against another snake every segment counts.
    pub fn head_in_snake(&self, target: &Snake) -> bool {
        let start = if std::ptr::eq(self, target) { 2 } else { 0 };
        let head = self.head();
        target
            .segments
            .iter()
            .skip(start)
            .any(|segment| cells_touch(head, segment.cell()))
    }

    /// Self collision, or collision with the opponent if there is one
    pub fn check_head_in_snake(&self, other: Option<&Snake>) -> bool {
        self.head_in_snake(self) || other.is_some_and(|o| self.head_in_snake(o))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn cells(snake: &Snake) -> Vec<Cell> {
        snake.segments().iter().map(Segment::cell).collect()
    }

    fn placer() -> Placer<Pcg32> {
        Placer::new(Pcg32::seed_from_u64(42), MAX_PLACEMENT_ATTEMPTS)
    }

    #[test]
    fn test_new_trails_behind_head() {
        let snake = Snake::new(Cell::new(100, 100), Direction::Up);
        assert_eq!(
            cells(&snake),
            vec![Cell::new(100, 100), Cell::new(100, 120), Cell::new(100, 140)]
        );
        let snake = Snake::new(Cell::new(100, 100), Direction::Left);
        assert_eq!(
            cells(&snake),
            vec![Cell::new(100, 100), Cell::new(120, 100), Cell::new(140, 100)]
        );
    }

    #[test]
    fn test_move_right_one_cell() {
        let mut snake = Snake::new(Cell::new(100, 100), Direction::Right);
        snake.advance();
        assert_eq!(snake.head(), Cell::new(100 + BIT, 100));
        assert_eq!(snake.len(), 3);
        assert_eq!(
            cells(&snake),
            vec![Cell::new(120, 100), Cell::new(100, 100), Cell::new(80, 100)]
        );
        assert!(snake.segments()[0].is_head());
        assert!(!snake.segments()[1].is_head());
    }

    #[test]
    fn test_wrap_left_at_zero() {
        let mut snake = Snake::new(Cell::new(0, 200), Direction::Left);
        snake.advance();
        assert_eq!(snake.head(), Cell::new(DIM - 38 + BIT, 200));
    }

    #[test]
    fn test_wrap_up_at_zero() {
        let mut snake = Snake::new(Cell::new(200, 0), Direction::Up);
        snake.advance();
        assert_eq!(snake.head(), Cell::new(200, DIM - 38 - BIT));
    }

    #[test]
    fn test_wrap_right_and_down() {
        assert_eq!(Direction::Right.step(Cell::new(DIM - 16, 5)), Cell::new(DIM - 16 + BIT, 5));
        assert_eq!(Direction::Right.step(Cell::new(DIM - 15, 5)), Cell::new(0, 5));
        assert_eq!(Direction::Down.step(Cell::new(5, DIM - 39)), Cell::new(5, DIM - 39 + BIT));
        assert_eq!(Direction::Down.step(Cell::new(5, DIM - 38)), Cell::new(5, 0));
    }

    #[test]
    fn test_wrap_from_off_field_spawn() {
        // Spawns may start at negative coordinates; those wrap immediately
        assert_eq!(Direction::Up.step(Cell::new(10, -30)), Cell::new(10, DIM - 38 - BIT));
        assert_eq!(Direction::Left.step(Cell::new(-5, 10)), Cell::new(DIM - 38 + BIT, 10));
    }

    #[test]
    fn test_turn_retags_head_without_reversal_check() {
        let mut snake = Snake::new(Cell::new(100, 100), Direction::Right);
        snake.turn(Direction::Left);
        assert_eq!(snake.direction(), Direction::Left);
        assert_eq!(
            snake.segments()[0],
            Segment::Head {
                cell: Cell::new(100, 100),
                direction: Direction::Left
            }
        );
    }

    #[test]
    fn test_pellet_boundary_is_strict() {
        let mut placer = placer();
        let mut pace = Pace::default();
        let mut snake = Snake::new(Cell::new(100, 100), Direction::Right);

        let mut far = Pellet::at(Cell::new(100 + BIT, 100));
        assert!(!snake.check_hit_pellet(&mut far, &[], &mut placer, &mut pace).unwrap());
        assert_eq!(far.cell(), Cell::new(120, 100));

        let mut near = Pellet::at(Cell::new(100 + BIT - 1, 100));
        assert!(snake.check_hit_pellet(&mut near, &[], &mut placer, &mut pace).unwrap());
        assert_ne!(near.cell(), Cell::new(119, 100));
        assert_eq!(snake.len(), 6);
        assert_eq!(pace.delay_ms(), 145);
    }

    #[test]
    fn test_growth_stacks_on_tail_then_unfolds() {
        let mut snake = Snake::new(Cell::new(100, 100), Direction::Right);
        snake.grow(GROWTH_PER_PELLET);
        let tail = Cell::new(60, 100);
        assert!(cells(&snake)[2..].iter().all(|c| *c == tail));

        for _ in 0..3 {
            snake.advance();
        }
        assert_eq!(snake.len(), 6);
        assert_eq!(
            cells(&snake),
            vec![
                Cell::new(160, 100),
                Cell::new(140, 100),
                Cell::new(120, 100),
                Cell::new(100, 100),
                Cell::new(80, 100),
                Cell::new(60, 100),
            ]
        );
    }

    #[test]
    fn test_hit_obstacle_is_idempotent() {
        let snake = Snake::new(Cell::new(100, 100), Direction::Right);
        let obstacles = [Obstacle::new(110, 110)];
        assert!(snake.check_hit_obstacle(&obstacles));
        assert!(snake.check_hit_obstacle(&obstacles));
        assert!(!snake.check_hit_obstacle(&[Obstacle::new(120, 100)]));
    }

    #[test]
    fn test_self_collision_skips_neck() {
        let mut snake = Snake::new(Cell::new(100, 100), Direction::Right);
        for _ in 0..20 {
            snake.advance();
            assert!(!snake.check_head_in_snake(None));
        }
    }

    #[test]
    fn test_serializes_head_first() {
        let snake = Snake::new(Cell::new(100, 100), Direction::Up);
        let json = serde_json::to_value(&snake).unwrap();
        let segments = json["segments"].as_array().unwrap();
        assert_eq!(segments.len(), INITIAL_LENGTH);
        assert!(segments[0].get("Head").is_some());
        assert!(segments[1..].iter().all(|s| s.get("Body").is_some()));
    }

    #[test]
    fn test_self_collision_after_loop() {
        let mut snake = Snake::new(Cell::new(200, 200), Direction::Right);
        snake.grow(GROWTH_PER_PELLET);
        for _ in 0..3 {
            snake.advance();
        }
        snake.turn(Direction::Down);
        snake.advance();
        snake.turn(Direction::Left);
        snake.advance();
        assert!(!snake.check_head_in_snake(None));
        snake.turn(Direction::Up);
        snake.advance();
        assert!(snake.check_head_in_snake(None));
    }

    #[test]
    fn test_opponent_checked_from_index_zero() {
        let a = Snake::new(Cell::new(100, 100), Direction::Right);
        let b = Snake::new(Cell::new(100, 100), Direction::Left);
        assert!(a.check_head_in_snake(Some(&b)));
        let c = Snake::new(Cell::new(300, 300), Direction::Left);
        assert!(!a.check_head_in_snake(Some(&c)));
    }

    #[test]
    fn test_spawn_head_clear_of_obstacles() {
        let obstacles: Vec<Obstacle> = (0..30).map(|i| Obstacle::new(i * BIT, 300)).collect();
        let mut placer = placer();
        for _ in 0..50 {
            let snake = Snake::spawn(&mut placer, &obstacles).unwrap();
            assert_eq!(snake.len(), INITIAL_LENGTH);
            assert!(!crate::sim::geometry::placement_blocked(
                snake.head(),
                obstacles.iter().map(Obstacle::cell)
            ));
        }
    }

    proptest! {
        #[test]
        fn prop_spawned_snake_never_hits_itself_going_straight(
            seed in any::<u64>(),
            steps in 1usize..200,
        ) {
            let mut placer = Placer::new(Pcg32::seed_from_u64(seed), MAX_PLACEMENT_ATTEMPTS);
            let mut snake = Snake::spawn(&mut placer, &[]).unwrap();
            prop_assert!(!snake.check_head_in_snake(None));
            for _ in 0..steps {
                snake.advance();
                prop_assert!(!snake.check_head_in_snake(None));
            }
        }

        #[test]
        fn prop_head_tracks_direction_and_growth_steps(
            seed in any::<u64>(),
            moves in prop::collection::vec((0usize..4, any::<bool>()), 1..120),
        ) {
            let mut placer = Placer::new(Pcg32::seed_from_u64(seed), MAX_PLACEMENT_ATTEMPTS);
            let mut pace = Pace::default();
            let mut snake = Snake::spawn(&mut placer, &[]).unwrap();
            let mut pellet = Pellet::spawn(&mut placer, &[]).unwrap();
            for (dir, turn) in moves {
                if turn {
                    snake.turn(Direction::from_index(dir));
                }
                let before = snake.len();
                snake.advance();
                snake.check_hit_pellet(&mut pellet, &[], &mut placer, &mut pace).unwrap();
                let grew = snake.len() - before;
                prop_assert!(grew == 0 || grew == GROWTH_PER_PELLET);
                prop_assert_eq!(
                    snake.segments()[0],
                    Segment::Head { cell: snake.head(), direction: snake.direction() }
                );
                prop_assert!(snake.segments().iter().skip(1).all(|s| !s.is_head()));
            }
        }
    }
}
