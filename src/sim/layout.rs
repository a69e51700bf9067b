//! Brick wall layouts
//!
//! The wall is data: a list of brick specs with a built-in default and
//! optional JSON loading, so alternate walls need no code changes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_MAX_HITS;
use crate::sim::state::{Brick, BrickKind};

fn default_max_hits() -> u32 {
    DEFAULT_MAX_HITS
}

/// One brick in a layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickSpec {
    pub kind: BrickKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: [f32; 3],
    #[serde(default = "default_max_hits")]
    pub max_hits: u32,
}

impl BrickSpec {
    fn build(&self) -> Brick {
        Brick::new(
            self.kind,
            Vec2::new(self.x, self.y),
            self.width,
            self.height,
            self.color,
        )
        .with_max_hits(self.max_hits)
    }
}

/// A complete brick wall, in insertion (collision/draw) order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallLayout {
    pub bricks: Vec<BrickSpec>,
}

impl WallLayout {
    /// Parse a layout from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Instantiate the wall
    pub fn build(&self) -> Vec<Brick> {
        self.bricks.iter().map(BrickSpec::build).collect()
    }
}

impl Default for WallLayout {
    /// The stock three-row wall: eleven bricks alternating reflective,
    /// destructable and multi-hit kinds across rows at y = 0.8, 0.6, 0.4.
    fn default() -> Self {
        use BrickKind::*;
        let rows = [
            (Reflective, -0.75, 0.8, [1.0, 1.0, 0.0]),
            (Destructable, -0.25, 0.8, [0.0, 1.0, 0.0]),
            (Multihit, 0.25, 0.8, [0.0, 0.0, 1.0]),
            (Reflective, 0.75, 0.8, [1.0, 0.0, 0.0]),
            (Multihit, -0.5, 0.6, [1.0, 0.5, 0.5]),
            (Destructable, 0.0, 0.6, [0.0, 1.0, 1.0]),
            (Reflective, 0.5, 0.6, [0.5, 0.0, 1.0]),
            (Destructable, -0.75, 0.4, [1.0, 1.0, 0.0]),
            (Reflective, -0.25, 0.4, [0.0, 1.0, 0.0]),
            (Multihit, 0.25, 0.4, [0.0, 0.0, 1.0]),
            (Destructable, 0.75, 0.4, [1.0, 0.0, 0.0]),
        ];

        Self {
            bricks: rows
                .into_iter()
                .map(|(kind, x, y, color)| BrickSpec {
                    kind,
                    x,
                    y,
                    width: 0.2,
                    height: 0.1,
                    color,
                    max_hits: DEFAULT_MAX_HITS,
                })
                .collect(),
        }
    }
}
