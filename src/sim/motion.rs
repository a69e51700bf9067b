//! Motion integration
//!
//! Balls move under two layers every tick: a discretized random-walk drift
//! keyed by the 1-8 direction code, then continuous angle-directed motion.
//! The drift checks run in a fixed sequence and a re-rolled code is visible
//! to the checks that follow it within the same tick.

use std::f32::consts::{PI, TAU};

use rand::Rng;

use crate::consts::{PLAYFIELD_MAX, PLAYFIELD_MIN};
use crate::sim::state::Ball;

/// Advance one ball by one tick.
///
/// 1. Axis drift: each governed axis steps by `speed` while the ball is
///    short of the near edge in that axis; at the edge the direction code
///    is re-rolled uniformly over 1-8 instead of stepping.
/// 2. Wall reflection: crossing a vertical edge mirrors the angle as
///    `π − θ`, a horizontal edge as `2π − θ`.
/// 3. Continuous motion along the (possibly reflected) angle, always.
pub fn advance(ball: &mut Ball, rng: &mut impl Rng) {
    let r = ball.radius;

    // Codes 1, 5, 6 drift toward -y
    if matches!(ball.direction, 1 | 5 | 6) {
        if ball.pos.y > PLAYFIELD_MIN + r {
            ball.pos.y -= ball.speed;
        } else {
            ball.direction = rng.random_range(1..=8);
        }
    }

    // Codes 2, 5, 7 drift toward +x
    if matches!(ball.direction, 2 | 5 | 7) {
        if ball.pos.x < PLAYFIELD_MAX - r {
            ball.pos.x += ball.speed;
        } else {
            ball.direction = rng.random_range(1..=8);
        }
    }

    // Codes 3, 7, 8 drift toward +y
    if matches!(ball.direction, 3 | 7 | 8) {
        if ball.pos.y < PLAYFIELD_MAX - r {
            ball.pos.y += ball.speed;
        } else {
            ball.direction = rng.random_range(1..=8);
        }
    }

    // Codes 4, 6, 8 drift toward -x
    if matches!(ball.direction, 4 | 6 | 8) {
        if ball.pos.x > PLAYFIELD_MIN + r {
            ball.pos.x -= ball.speed;
        } else {
            ball.direction = rng.random_range(1..=8);
        }
    }

    // Reflect at the playfield edges
    if ball.pos.x - r < PLAYFIELD_MIN || ball.pos.x + r > PLAYFIELD_MAX {
        ball.angle = PI - ball.angle;
    }
    if ball.pos.y - r < PLAYFIELD_MIN || ball.pos.y + r > PLAYFIELD_MAX {
        ball.angle = TAU - ball.angle;
    }

    ball.pos.x += ball.angle.cos() * ball.speed;
    ball.pos.y += ball.angle.sin() * ball.speed;
}
