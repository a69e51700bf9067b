//! Game state and core simulation types
//!
//! Every entity the simulation touches lives here, owned by [`GameState`]
//! and threaded through the tick by mutable reference.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::consts::*;
use crate::sim::layout::WallLayout;

/// Durability variants for bricks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickKind {
    /// Mirrors the ball's angle and nudges it out of the overlap
    Reflective,
    /// Goes inert on the first hit; the ball passes through unaffected
    Destructable,
    /// Absorbs `max_hits` hits, recoloring as it weakens
    Multihit,
}

/// An axis-aligned rectangular obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    /// Center position in normalized device coordinates
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub color: [f32; 3],
    pub kind: BrickKind,
    /// Inert bricks stay in the collection but never collide or draw again
    pub active: bool,
    pub hit_count: u32,
    pub max_hits: u32,
}

impl Brick {
    pub fn new(kind: BrickKind, pos: Vec2, width: f32, height: f32, color: [f32; 3]) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "brick must have positive size");
        Self {
            pos,
            width,
            height,
            color,
            kind,
            active: true,
            hit_count: 0,
            max_hits: DEFAULT_MAX_HITS,
        }
    }

    pub fn with_max_hits(mut self, max_hits: u32) -> Self {
        self.max_hits = max_hits;
        self
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    #[inline]
    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }

    /// Apply one resolved hit.
    ///
    /// Multi-hit bricks count up to `max_hits` and recolor along the way to
    /// telegraph weakening; everything else goes inert immediately. Once
    /// inert a brick never reactivates.
    pub fn register_hit(&mut self) {
        match self.kind {
            BrickKind::Multihit => {
                self.hit_count += 1;
                if self.hit_count >= self.max_hits {
                    self.active = false;
                } else {
                    let f = self.hit_count as f32 / self.max_hits as f32;
                    self.color = [1.0, 0.5 * (1.0 + f) + f, 0.5 * (1.0 - f) + f];
                }
            }
            _ => self.active = false,
        }
    }
}

/// The player's paddle: a reflective brick body plus horizontal movement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub body: Brick,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            body: Brick::new(
                BrickKind::Reflective,
                Vec2::new(0.0, PADDLE_Y),
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
                [1.0, 1.0, 1.0],
            ),
        }
    }
}

impl Paddle {
    /// Step left unless the left edge has already reached the playfield bound.
    /// The check precedes the move, so a fractional overshoot is possible.
    pub fn move_left(&mut self) {
        if self.body.pos.x - self.body.half_width() > PLAYFIELD_MIN {
            self.body.pos.x -= PADDLE_STEP;
        }
    }

    /// Step right, same check-then-move rule as [`Paddle::move_left`]
    pub fn move_right(&mut self) {
        if self.body.pos.x + self.body.half_width() < PLAYFIELD_MAX {
            self.body.pos.x += PADDLE_STEP;
        }
    }
}

/// A moving circular actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub radius: f32,
    /// Fixed motion scale carried alongside the spawn parameters
    pub step_scale: f32,
    pub speed: f32,
    /// Continuous motion angle in radians
    pub angle: f32,
    /// Direction code 1-8 biasing the per-tick axis drift
    pub direction: u8,
    pub color: [f32; 3],
}

impl Ball {
    pub fn new(
        pos: Vec2,
        radius: f32,
        step_scale: f32,
        speed: f32,
        angle: f32,
        color: [f32; 3],
        rng: &mut impl Rng,
    ) -> Self {
        debug_assert!(radius > 0.0, "ball must have positive radius");
        Self {
            pos,
            radius,
            step_scale,
            speed,
            angle,
            direction: rng.random_range(1..=8),
            color,
        }
    }

    /// Spawn a ball at the origin with randomized color and angle
    pub fn spawn(rng: &mut impl Rng) -> Self {
        let color = [rng.random(), rng.random(), rng.random()];
        let angle = rng.random_range(0.0..TAU);
        Self::new(
            Vec2::ZERO,
            BALL_SPAWN_RADIUS,
            BALL_STEP_SCALE,
            BALL_START_SPEED,
            angle,
            color,
            rng,
        )
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; every random draw in the simulation flows through it
    pub rng: Pcg32,
    /// Tick counter
    pub time_ticks: u64,
    pub paddle: Paddle,
    /// Bricks in insertion order; never removed, only marked inert
    pub bricks: Vec<Brick>,
    /// Balls accumulate for the session and are never removed
    pub balls: Vec<Ball>,
}

impl GameState {
    /// Create a game state with the default brick wall
    pub fn new(seed: u64) -> Self {
        Self::from_layout(seed, &WallLayout::default())
    }

    /// Create a game state from an explicit brick layout
    pub fn from_layout(seed: u64, layout: &WallLayout) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            paddle: Paddle::default(),
            bricks: layout.build(),
            balls: Vec::new(),
        }
    }

    /// Append a freshly randomized ball
    pub fn spawn_ball(&mut self) {
        let ball = Ball::spawn(&mut self.rng);
        self.balls.push(ball);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rng() -> Pcg32 {
        Pcg32::seed_from_u64(42)
    }

    #[test]
    fn destructable_goes_inert_on_first_hit() {
        let mut brick = Brick::new(
            BrickKind::Destructable,
            Vec2::new(0.0, 0.8),
            0.2,
            0.1,
            [0.0, 1.0, 0.0],
        );
        brick.register_hit();
        assert!(!brick.active);
    }

    #[test]
    fn multihit_goes_inert_exactly_at_max_hits() {
        let mut brick = Brick::new(
            BrickKind::Multihit,
            Vec2::new(0.25, 0.8),
            0.2,
            0.1,
            [0.0, 0.0, 1.0],
        )
        .with_max_hits(3);

        brick.register_hit();
        assert!(brick.active);
        brick.register_hit();
        assert!(brick.active);
        brick.register_hit();
        assert!(!brick.active);
        assert_eq!(brick.hit_count, 3);
    }

    #[test]
    fn multihit_weakening_color_blend() {
        // With max_hits = 100, after hit 50 the blend factor is 0.5:
        // green = 0.5 * 1.5 + 0.5 = 1.25, blue = 0.5 * 0.5 + 0.5 = 0.75
        let mut brick = Brick::new(
            BrickKind::Multihit,
            Vec2::new(0.25, 0.8),
            0.2,
            0.1,
            [0.0, 0.0, 1.0],
        );
        for _ in 0..50 {
            brick.register_hit();
        }
        assert!(brick.active);
        assert_eq!(brick.color[0], 1.0);
        assert!((brick.color[1] - 1.25).abs() < 1e-6);
        assert!((brick.color[2] - 0.75).abs() < 1e-6);
    }

    #[test]
    fn spawned_ball_has_documented_defaults() {
        let mut rng = test_rng();
        let ball = Ball::spawn(&mut rng);
        assert_eq!(ball.pos, Vec2::ZERO);
        assert_eq!(ball.radius, 0.02);
        assert_eq!(ball.step_scale, 0.05);
        assert_eq!(ball.speed, 0.01);
        assert!(ball.angle >= 0.0 && ball.angle < TAU);
        assert!((1..=8).contains(&ball.direction));
        assert!(ball.color.iter().all(|c| (0.0..1.0).contains(c)));
    }

    #[test]
    fn paddle_stops_at_left_edge() {
        let mut paddle = Paddle::default();
        for _ in 0..100 {
            paddle.move_left();
        }
        // Check-then-move: the final step may overshoot by at most one step
        let left_edge = paddle.body.pos.x - paddle.body.half_width();
        assert!(left_edge <= PLAYFIELD_MIN + 1e-4);
        assert!(left_edge >= PLAYFIELD_MIN - PADDLE_STEP - 1e-4);

        // Once at the edge, further input is ignored
        let before = paddle.body.pos.x;
        paddle.move_left();
        assert_eq!(paddle.body.pos.x, before);
    }

    #[test]
    fn paddle_stops_at_right_edge() {
        let mut paddle = Paddle::default();
        for _ in 0..100 {
            paddle.move_right();
        }
        let right_edge = paddle.body.pos.x + paddle.body.half_width();
        assert!(right_edge >= PLAYFIELD_MAX - 1e-4);
        assert!(right_edge <= PLAYFIELD_MAX + PADDLE_STEP + 1e-4);
    }

    #[test]
    fn same_seed_spawns_identical_balls() {
        let mut a = GameState::new(7);
        let mut b = GameState::new(7);
        a.spawn_ball();
        b.spawn_ball();
        assert_eq!(a.balls, b.balls);
    }

    #[test]
    fn state_survives_serde_round_trip() {
        let mut state = GameState::new(99);
        state.spawn_ball();
        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.balls, state.balls);
        assert_eq!(restored.bricks, state.bricks);
        assert_eq!(restored.time_ticks, state.time_ticks);
    }
}
