//! Drawing boundary
//!
//! The simulation never talks to a window or GPU. It hands geometry to a
//! [`Surface`], and [`draw_state`] defines the per-frame submission order:
//! every ball first, then every active brick, then the paddle.

pub mod shapes;
pub mod vertex;

pub use shapes::VertexBatch;
pub use vertex::Vertex;

use glam::Vec2;

use crate::sim::state::GameState;

/// Geometry sink provided by the host. Calls are assumed to succeed while a
/// drawing context is active.
pub trait Surface {
    fn fill_quad(&mut self, center: Vec2, width: f32, height: f32, color: [f32; 3]);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 3]);
}

/// Submit one frame of geometry. Inert bricks are skipped entirely.
pub fn draw_state(state: &GameState, surface: &mut impl Surface) {
    for ball in &state.balls {
        surface.fill_circle(ball.pos, ball.radius, ball.color);
    }

    for brick in state.bricks.iter().filter(|b| b.active) {
        surface.fill_quad(brick.pos, brick.width, brick.height, brick.color);
    }

    let body = &state.paddle.body;
    if body.active {
        surface.fill_quad(body.pos, body.width, body.height, body.color);
    }
}
