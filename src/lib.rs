//! Brickfield - a multi-ball brick breaker toy
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, motion, tick)
//! - `render`: Drawing boundary and CPU-side shape tessellation
//!
//! The window/input/GPU glue is intentionally absent: the host drives the
//! simulation through [`sim::tick`] and hands the result to any
//! [`render::Surface`] implementation.

pub mod render;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Playfield edges in normalized device coordinates
    pub const PLAYFIELD_MIN: f32 = -1.0;
    pub const PLAYFIELD_MAX: f32 = 1.0;

    /// Ball spawn defaults
    pub const BALL_SPAWN_RADIUS: f32 = 0.02;
    pub const BALL_STEP_SCALE: f32 = 0.05;
    pub const BALL_START_SPEED: f32 = 0.01;

    /// Position nudge applied along the mirrored angle after a reflective
    /// brick hit, so the ball escapes the overlap on the next tick
    pub const REFLECT_NUDGE: f32 = 0.03;
    /// Speed multiplier applied on every paddle hit (no lower floor)
    pub const PADDLE_FRICTION: f32 = 0.95;

    /// Paddle geometry and per-input horizontal step
    pub const PADDLE_WIDTH: f32 = 0.3;
    pub const PADDLE_HEIGHT: f32 = 0.05;
    pub const PADDLE_Y: f32 = -0.9;
    pub const PADDLE_STEP: f32 = 0.05;

    /// Durability default for multi-hit bricks
    pub const DEFAULT_MAX_HITS: u32 = 100;

    /// Tessellation default for filled circles
    pub const CIRCLE_SEGMENTS: u32 = 360;
}

/// Normalize an angle to [0, τ)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::TAU;
    let a = angle % TAU;
    if a < 0.0 { a + TAU } else { a }
}
