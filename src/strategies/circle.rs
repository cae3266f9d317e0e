use crate::backend::Canvas;
use crate::components::Transform;
use crate::types::Color;

use super::RenderStrategy;

/// Filled disk plotted point by point. Only `scale_x` scales the radius.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleRenderer {
    color: Color,
    radius: u32,
}

impl CircleRenderer {
    pub fn new(color: Color, radius: u32) -> Self {
        Self { color, radius }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }
}

impl RenderStrategy for CircleRenderer {
    fn render(&self, canvas: &mut dyn Canvas, transform: &Transform) {
        canvas.set_draw_color(self.color);

        // Float-to-int casts saturate, so any scale yields a finite radius.
        let radius = (self.radius as f32 * transform.scale_x) as i64;
        if radius < 0 {
            return;
        }
        let cx = transform.x as i64;
        let cy = transform.y as i64;
        let limit = i128::from(radius) * i128::from(radius);

        // Only scan the part of the bounding box that lands on the canvas.
        let viewport = canvas.viewport();
        let (right, bottom) = (viewport.width as i64 - 1, viewport.height as i64 - 1);
        let xs = cx.saturating_sub(radius).max(0)..=cx.saturating_add(radius).min(right);
        let ys = cy.saturating_sub(radius).max(0)..=cy.saturating_add(radius).min(bottom);

        for y in ys {
            let dy = i128::from(y) - i128::from(cy);
            for x in xs.clone() {
                let dx = i128::from(x) - i128::from(cx);
                if dx * dx + dy * dy <= limit {
                    canvas.plot_point(x as f32, y as f32);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::recording::Recorder;
    use crate::types::Point;

    #[test]
    fn plots_every_point_inside_radius() {
        let shape = CircleRenderer::new(Color::RED, 2);
        let mut rec = Recorder::default();
        shape.render(&mut rec, &Transform::new(10.7, 20.2));

        let points = rec.points();
        // 13 lattice points satisfy dx² + dy² ≤ 4.
        assert_eq!(points.len(), 13);
        assert!(points.contains(&Point { x: 10.0, y: 20.0 }));
        assert!(points.contains(&Point { x: 12.0, y: 20.0 }));
        assert!(!points.contains(&Point { x: 12.0, y: 22.0 }));
    }

    #[test]
    fn radius_scales_with_scale_x_only() {
        let shape = CircleRenderer::new(Color::RED, 2);
        let mut rec = Recorder::default();
        let transform = Transform { scale_x: 0.5, scale_y: 10.0, ..Transform::new(10.0, 10.0) };
        shape.render(&mut rec, &transform);
        // radius 1: centre plus four neighbours.
        assert_eq!(rec.points().len(), 5);
    }

    #[test]
    fn zero_and_negative_radius_do_not_fail() {
        let mut rec = Recorder::default();
        CircleRenderer::new(Color::RED, 0).render(&mut rec, &Transform::default());
        assert_eq!(rec.points().len(), 1);

        let mut rec = Recorder::default();
        let flipped = Transform { scale_x: -1.0, ..Transform::default() };
        CircleRenderer::new(Color::RED, 25).render(&mut rec, &flipped);
        assert!(rec.points().is_empty());
    }

    #[test]
    fn points_off_the_canvas_are_skipped() {
        let mut rec = Recorder::default();
        CircleRenderer::new(Color::RED, 2).render(&mut rec, &Transform::default());
        // Only the quarter disk with x, y >= 0 remains.
        assert_eq!(rec.points().len(), 6);
        assert!(rec.points().iter().all(|p| p.x >= 0.0 && p.y >= 0.0));
    }

    #[test]
    fn huge_scale_is_clipped_to_the_canvas() {
        let shape = CircleRenderer::new(Color::RED, 25);
        for scale_x in [1e6, 1e9, f32::MAX, f32::INFINITY] {
            let mut rec = Recorder::default();
            let transform = Transform { scale_x, ..Transform::new(400.0, 300.0) };
            shape.render(&mut rec, &transform);
            // The disk covers every lattice point of the 800×600 viewport.
            assert_eq!(rec.points().len(), 800 * 600, "scale {scale_x}");
        }
    }

    #[test]
    fn extreme_transforms_do_not_overflow() {
        let shape = CircleRenderer::new(Color::RED, 25);
        let mut rec = Recorder::default();
        let transform = Transform { scale_x: f32::MAX, ..Transform::new(f32::MAX, f32::MIN) };
        shape.render(&mut rec, &transform);
        assert!(rec.points().is_empty());

        let mut rec = Recorder::default();
        let transform = Transform { scale_x: f32::NAN, ..Transform::new(400.0, 300.0) };
        shape.render(&mut rec, &transform);
        assert_eq!(rec.points().len(), 1);
    }
}
