use crate::components::{RenderComponent, Transform, Velocity};
use crate::strategies::{CircleRenderer, RectangleRenderer, TriangleRenderer};
use crate::types::Color;

use super::Entity;

/// Builds the preset shapes of the demo scene.
pub struct EntityFactory;

impl EntityFactory {
    /// Green 50×50 square, initially at rest.
    pub fn create_rectangle(x: f32, y: f32) -> Entity {
        Self::compose(
            x,
            y,
            Velocity::new(0.0, 0.0),
            RenderComponent::new(RectangleRenderer::new(Color::GREEN, 50, 50)),
        )
    }

    /// Red disk of radius 25.
    pub fn create_circle(x: f32, y: f32) -> Entity {
        Self::compose(
            x,
            y,
            Velocity::new(100.0, 50.0),
            RenderComponent::new(CircleRenderer::new(Color::RED, 25)),
        )
    }

    /// Magenta triangle with an edge of 90.
    pub fn create_triangle(x: f32, y: f32) -> Entity {
        Self::compose(
            x,
            y,
            Velocity::new(-80.0, 120.0),
            RenderComponent::new(TriangleRenderer::new(Color::MAGENTA, 90.0)),
        )
    }

    fn compose(x: f32, y: f32, velocity: Velocity, render: RenderComponent) -> Entity {
        let mut entity = Entity::new();
        entity.add_component(Transform::new(x, y));
        entity.add_component(velocity);
        entity.add_component(render);
        entity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::Shape;

    #[test]
    fn rectangle_preset() {
        let entity = EntityFactory::create_rectangle(400.0, 300.0);

        assert_eq!(entity.component::<Transform>(), Some(&Transform::new(400.0, 300.0)));
        assert_eq!(entity.component::<Velocity>(), Some(&Velocity::new(0.0, 0.0)));
        match entity.component::<RenderComponent>().and_then(|r| r.strategy()) {
            Some(Shape::Rectangle(rect)) => {
                assert_eq!((rect.width(), rect.height()), (50, 50));
                assert_eq!(rect.color(), Color::rgba(0, 255, 0, 255));
            }
            other => panic!("expected rectangle strategy, got {other:?}"),
        }
    }

    #[test]
    fn circle_preset() {
        let entity = EntityFactory::create_circle(100.0, 100.0);

        assert_eq!(entity.component::<Velocity>(), Some(&Velocity::new(100.0, 50.0)));
        match entity.component::<RenderComponent>().and_then(|r| r.strategy()) {
            Some(Shape::Circle(circle)) => {
                assert_eq!(circle.radius(), 25);
                assert_eq!(circle.color(), Color::RED);
            }
            other => panic!("expected circle strategy, got {other:?}"),
        }
    }

    #[test]
    fn triangle_preset() {
        let entity = EntityFactory::create_triangle(300.0, 50.0);

        assert_eq!(entity.component::<Velocity>(), Some(&Velocity::new(-80.0, 120.0)));
        match entity.component::<RenderComponent>().and_then(|r| r.strategy()) {
            Some(Shape::Triangle(tri)) => assert_eq!(tri.edge_length(), 90.0),
            other => panic!("expected triangle strategy, got {other:?}"),
        }
    }

    #[test]
    fn presets_have_three_components_in_order() {
        let entity = EntityFactory::create_triangle(0.0, 0.0);
        assert_eq!(entity.len(), 3);
    }
}
