//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::sim::Rect;

/// Simple 2D vertex with position and color
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

    /// Two triangles covering a rectangle, counter-clockwise
    pub fn quad(rect: &Rect) -> [Vertex; 6] {
        let color = rect.color.to_rgba();
        let (l, r, b, t) = (rect.left(), rect.right(), rect.bottom(), rect.top());
        [
            Vertex::new(l, b, color),
            Vertex::new(r, b, color),
            Vertex::new(r, t, color),
            Vertex::new(r, t, color),
            Vertex::new(l, t, color),
            Vertex::new(l, b, color),
        ]
    }
}

/// Colors for screen elements that are not part of the simulation
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const HUD_TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
