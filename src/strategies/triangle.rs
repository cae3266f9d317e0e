use crate::backend::Canvas;
use crate::components::Transform;
use crate::types::{Color, Point, Vertex};

use super::RenderStrategy;

const INDICES: [u32; 3] = [0, 1, 2];

/// Equilateral triangle, apex up, centroid on the transform position.
///
/// `scale_x` scales the edge; a non-zero `rotation` turns the vertices about
/// the centroid, taken as radians.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleRenderer {
    color: Color,
    edge_length: f32,
}

impl TriangleRenderer {
    pub fn new(color: Color, edge_length: f32) -> Self {
        Self { color, edge_length }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn edge_length(&self) -> f32 {
        self.edge_length
    }

    /// Vertex positions (apex, bottom-left, bottom-right) for a transform.
    pub fn vertices(&self, transform: &Transform) -> [Point; 3] {
        let edge = self.edge_length * transform.scale_x;
        let height = edge * 3f32.sqrt() / 2.0;
        let half_base = edge / 2.0;
        let (cx, cy) = (transform.x, transform.y);

        let mut corners = [
            Point { x: cx, y: cy - height * 2.0 / 3.0 },
            Point { x: cx - half_base, y: cy + height / 3.0 },
            Point { x: cx + half_base, y: cy + height / 3.0 },
        ];

        if transform.rotation != 0.0 {
            let (sin, cos) = transform.rotation.sin_cos();
            for p in &mut corners {
                let dx = p.x - cx;
                let dy = p.y - cy;
                p.x = cx + dx * cos - dy * sin;
                p.y = cy + dx * sin + dy * cos;
            }
        }

        corners
    }
}

impl RenderStrategy for TriangleRenderer {
    fn render(&self, canvas: &mut dyn Canvas, transform: &Transform) {
        let vertices = self.vertices(transform).map(|position| Vertex {
            position,
            color: self.color,
        });

        canvas.set_draw_color(self.color);
        canvas.fill_geometry(&vertices, &INDICES);
    }
}
