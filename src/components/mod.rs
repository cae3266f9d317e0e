//! Components attached to an `Entity`: behavior hooks and plain data.
//!
//! A component is any `'static` type implementing [`Component`]. Both hooks
//! default to no-ops, so plain data components (`Transform`, `Velocity`)
//! implement the trait with an empty block.

mod render;

pub use render::RenderComponent;

use std::any::Any;

use serde::{Deserialize, Serialize};

use crate::backend::Canvas;
use crate::entity::Entity;

/// Type-erased access used by `Entity` for typed lookup.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Per-entity behavior with optional update and render hooks.
///
/// `owner` is the entity the component is attached to. It is `None` when the
/// hook is invoked on a detached component.
pub trait Component: AsAny {
    fn update(&mut self, _delta_time: f32) {}

    fn render(&self, _owner: Option<&Entity>, _canvas: &mut dyn Canvas) {}
}

// ---------------------------------------------------------------------------
// Kinematic data
// ---------------------------------------------------------------------------

/// Position, orientation and scale. `rotation` is in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl Transform {
    pub fn new(x: f32, y: f32) -> Self {
        Transform {
            x,
            y,
            ..Default::default()
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform {
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

impl Component for Transform {}

/// Linear velocity in viewport units per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub vx: f32,
    pub vy: f32,
}

impl Velocity {
    pub fn new(vx: f32, vy: f32) -> Self {
        Velocity { vx, vy }
    }
}

impl Component for Velocity {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Framebuffer;
    use crate::types::Viewport;

    struct Inert;

    impl Component for Inert {}

    #[test]
    fn default_hooks_accept_any_delta_time() {
        let mut transform = Transform::new(3.0, 4.0);
        let mut velocity = Velocity::new(1.0, 2.0);
        let mut inert = Inert;
        for dt in [0.0, -1.0, 1e-9, 1e9, f32::MAX, f32::NAN] {
            transform.update(dt);
            velocity.update(dt);
            inert.update(dt);
        }
        assert_eq!(transform, Transform::new(3.0, 4.0));
        assert_eq!(velocity, Velocity::new(1.0, 2.0));
    }

    #[test]
    fn default_render_draws_nothing() {
        let mut canvas = Framebuffer::new(Viewport::default(), 80, 60);
        Transform::default().render(None, &mut canvas);
        Velocity::default().render(None, &mut canvas);
        Inert.render(None, &mut canvas);
        assert_eq!(canvas.draw_calls(), 0);
    }

    #[test]
    fn transform_defaults_to_unit_scale() {
        let t = Transform::new(400.0, 300.0);
        assert_eq!(t.rotation, 0.0);
        assert_eq!((t.scale_x, t.scale_y), (1.0, 1.0));
    }

    #[test]
    fn copies_are_independent() {
        let original = Transform::new(1.0, 2.0);
        let mut copy = original;
        copy.x = 10.0;
        copy.scale_y = -1.0;
        assert_eq!(original.x, 1.0);
        assert_eq!(original.scale_y, 1.0);
    }
}
