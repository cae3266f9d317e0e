//! Shape-render strategies and their dispatch.
//!
//! Each shape lives in its own module with its struct definition and
//! `RenderStrategy` implementation side by side. The closed set of shapes is
//! collected in [`Shape`], which is what a `RenderComponent` owns.

mod circle;
mod rectangle;
mod triangle;

pub use circle::CircleRenderer;
pub use rectangle::RectangleRenderer;
pub use triangle::TriangleRenderer;

use crate::backend::Canvas;
use crate::components::Transform;

/// Draw a shape at the given transform. Implementations must not fail on
/// degenerate geometry.
pub trait RenderStrategy {
    fn render(&self, canvas: &mut dyn Canvas, transform: &Transform);
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle(RectangleRenderer),
    Circle(CircleRenderer),
    Triangle(TriangleRenderer),
}

impl RenderStrategy for Shape {
    fn render(&self, canvas: &mut dyn Canvas, transform: &Transform) {
        match self {
            Shape::Rectangle(s) => s.render(canvas, transform),
            Shape::Circle(s) => s.render(canvas, transform),
            Shape::Triangle(s) => s.render(canvas, transform),
        }
    }
}

impl From<RectangleRenderer> for Shape {
    fn from(s: RectangleRenderer) -> Self {
        Shape::Rectangle(s)
    }
}

impl From<CircleRenderer> for Shape {
    fn from(s: CircleRenderer) -> Self {
        Shape::Circle(s)
    }
}

impl From<TriangleRenderer> for Shape {
    fn from(s: TriangleRenderer) -> Self {
        Shape::Triangle(s)
    }
}
