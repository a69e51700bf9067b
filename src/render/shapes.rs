//! Shape tessellation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::Surface;
use super::vertex::Vertex;
use crate::consts::CIRCLE_SEGMENTS;

/// Generate triangle-fan vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 3], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        // Triangle from center to edge
        vertices.push(Vertex::opaque(center.x, center.y, color));
        vertices.push(Vertex::opaque(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::opaque(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate two triangles for a filled axis-aligned quad
pub fn quad(center: Vec2, width: f32, height: f32, color: [f32; 3]) -> Vec<Vertex> {
    let hw = width / 2.0;
    let hh = height / 2.0;

    vec![
        Vertex::opaque(center.x - hw, center.y - hh, color),
        Vertex::opaque(center.x + hw, center.y - hh, color),
        Vertex::opaque(center.x + hw, center.y + hh, color),
        Vertex::opaque(center.x + hw, center.y + hh, color),
        Vertex::opaque(center.x - hw, center.y + hh, color),
        Vertex::opaque(center.x - hw, center.y - hh, color),
    ]
}

/// A [`Surface`] that tessellates every submission into one vertex buffer
#[derive(Debug, Default)]
pub struct VertexBatch {
    vertices: Vec<Vertex>,
    /// Circle tessellation override; `None` uses [`CIRCLE_SEGMENTS`]
    pub segments: Option<u32>,
}

impl VertexBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }
}

impl Surface for VertexBatch {
    fn fill_quad(&mut self, center: Vec2, width: f32, height: f32, color: [f32; 3]) {
        self.vertices.extend(quad(center, width, height, color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 3]) {
        let segments = self.segments.unwrap_or(CIRCLE_SEGMENTS);
        self.vertices.extend(circle(center, radius, color, segments));
    }
}
