//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - One update per display refresh, no timestep scaling
//! - Seeded RNG only
//! - Stable iteration order (entity insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod layout;
pub mod motion;
pub mod state;
pub mod tick;

pub use collision::{overlaps, resolve_brick, resolve_paddle};
pub use layout::{BrickSpec, WallLayout};
pub use motion::advance;
pub use state::{Ball, Brick, BrickKind, GameState, Paddle};
pub use tick::{TickInput, tick};
