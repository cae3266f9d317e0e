//! Kinematic integration applied by the frame loop.

use crate::components::{Transform, Velocity};
use crate::types::Viewport;

/// Explicit Euler step followed by per-axis wraparound.
pub fn integrate(transform: &mut Transform, velocity: &Velocity, delta_time: f32, viewport: Viewport) {
    transform.x += velocity.vx * delta_time;
    transform.y += velocity.vy * delta_time;
    wrap(transform, viewport);
}

/// Leaving the viewport on one edge reappears on the opposite edge.
pub fn wrap(transform: &mut Transform, viewport: Viewport) {
    transform.x = wrap_axis(transform.x, viewport.width);
    transform.y = wrap_axis(transform.y, viewport.height);
}

fn wrap_axis(value: f32, extent: f32) -> f32 {
    if value < 0.0 {
        extent
    } else if value > extent {
        0.0
    } else {
        value
    }
}
