//! Collision detection and response
//!
//! The overlap test is axis-aligned box vs. circle using the ball's bounding
//! box, not exact circle-box distance. Corner contacts therefore register
//! slightly early. That approximation is part of the observable gameplay and
//! is kept as-is.

use std::f32::consts::TAU;

use crate::consts::{PADDLE_FRICTION, REFLECT_NUDGE};
use crate::sim::state::{Ball, Brick, BrickKind, Paddle};

/// Conservative box-vs-circle overlap test
#[inline]
pub fn overlaps(ball: &Ball, brick: &Brick) -> bool {
    let hw = brick.half_width();
    let hh = brick.half_height();
    ball.pos.x + ball.radius > brick.pos.x - hw
        && ball.pos.x - ball.radius < brick.pos.x + hw
        && ball.pos.y + ball.radius > brick.pos.y - hh
        && ball.pos.y - ball.radius < brick.pos.y + hh
}

/// Test a ball against a brick and apply the brick's resolution policy.
///
/// Inert bricks are a no-op. Reflective bricks mirror the ball's angle and
/// nudge it along the new heading so the overlap clears next tick; the other
/// kinds absorb the hit and leave the ball untouched this tick.
pub fn resolve_brick(ball: &mut Ball, brick: &mut Brick) {
    if !brick.active || !overlaps(ball, brick) {
        return;
    }

    match brick.kind {
        BrickKind::Reflective => {
            ball.angle = TAU - ball.angle;
            ball.pos.x += ball.angle.cos() * REFLECT_NUDGE;
            ball.pos.y += ball.angle.sin() * REFLECT_NUDGE;
        }
        BrickKind::Destructable | BrickKind::Multihit => brick.register_hit(),
    }
}

/// Test a ball against the paddle.
///
/// Mirrors the angle like a reflective brick but applies friction instead of
/// the position nudge. Friction has no floor: repeated hits only ever slow
/// the ball toward zero.
pub fn resolve_paddle(ball: &mut Ball, paddle: &Paddle) {
    let body = &paddle.body;
    if !body.active || !overlaps(ball, body) {
        return;
    }

    ball.angle = TAU - ball.angle;
    ball.speed *= PADDLE_FRICTION;
}
