use crate::backend::Canvas;
use crate::entity::Entity;
use crate::strategies::{RenderStrategy, Shape};

use super::{Component, Transform};

/// Draws its owner through a swappable shape strategy.
///
/// The component never stores a `Transform`; it borrows the owner's one at
/// render time and skips drawing when any piece is missing.
#[derive(Debug, Default)]
pub struct RenderComponent {
    strategy: Option<Shape>,
}

impl RenderComponent {
    pub fn new(strategy: impl Into<Shape>) -> Self {
        RenderComponent {
            strategy: Some(strategy.into()),
        }
    }

    /// Replace the current strategy. `None` disables rendering.
    pub fn set_strategy(&mut self, strategy: Option<Shape>) {
        self.strategy = strategy;
    }

    pub fn strategy(&self) -> Option<&Shape> {
        self.strategy.as_ref()
    }
}

impl Component for RenderComponent {
    fn render(&self, owner: Option<&Entity>, canvas: &mut dyn Canvas) {
        let (Some(strategy), Some(owner)) = (&self.strategy, owner) else {
            return;
        };
        if let Some(transform) = owner.component::<Transform>() {
            strategy.render(canvas, transform);
        }
    }
}
