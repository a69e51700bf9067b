//! Vertex type for 2D geometry submission

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color, laid out for direct upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Opaque vertex from an rgb simulation color
    pub const fn opaque(x: f32, y: f32, rgb: [f32; 3]) -> Self {
        Self::new(x, y, [rgb[0], rgb[1], rgb[2], 1.0])
    }
}
