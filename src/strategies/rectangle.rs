use crate::backend::Canvas;
use crate::components::Transform;
use crate::types::{Color, FRect};

use super::RenderStrategy;

/// Axis-aligned filled box centred on the transform position.
///
/// Rotation is not applied.
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleRenderer {
    color: Color,
    width: u32,
    height: u32,
}

impl RectangleRenderer {
    pub fn new(color: Color, width: u32, height: u32) -> Self {
        Self {
            color,
            width,
            height,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl RenderStrategy for RectangleRenderer {
    fn render(&self, canvas: &mut dyn Canvas, transform: &Transform) {
        let w = self.width as f32 * transform.scale_x;
        let h = self.height as f32 * transform.scale_y;

        canvas.set_draw_color(self.color);
        canvas.fill_rect(FRect {
            x: transform.x - w / 2.0,
            y: transform.y - h / 2.0,
            w,
            h,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::recording::{Call, Recorder};

    #[test]
    fn centres_scaled_box_on_position() {
        let shape = RectangleRenderer::new(Color::GREEN, 50, 20);
        let transform = Transform {
            scale_x: 2.0,
            scale_y: 0.5,
            ..Transform::new(400.0, 300.0)
        };
        let mut rec = Recorder::default();
        shape.render(&mut rec, &transform);

        assert_eq!(
            rec.calls,
            vec![
                Call::Color(Color::GREEN),
                Call::FillRect(FRect { x: 350.0, y: 295.0, w: 100.0, h: 10.0 }),
            ]
        );
    }

    #[test]
    fn ignores_rotation() {
        let shape = RectangleRenderer::new(Color::GREEN, 50, 50);
        let mut plain = Recorder::default();
        let mut rotated = Recorder::default();
        shape.render(&mut plain, &Transform::new(10.0, 10.0));
        shape.render(
            &mut rotated,
            &Transform { rotation: 1.2, ..Transform::new(10.0, 10.0) },
        );
        assert_eq!(plain.calls, rotated.calls);
    }

    #[test]
    fn tolerates_degenerate_scale() {
        let shape = RectangleRenderer::new(Color::GREEN, 50, 50);
        let transform = Transform { scale_x: 0.0, scale_y: -3.0, ..Transform::default() };
        let mut rec = Recorder::default();
        shape.render(&mut rec, &transform);
        assert_eq!(rec.calls.len(), 2);
        assert_eq!(transform.scale_y, -3.0);
    }
}
