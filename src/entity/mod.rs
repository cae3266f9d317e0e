//! An owning, ordered container of components.
//!
//! Insertion order is update and render order. Typed lookup scans in the
//! same order and returns the first component of the requested type, so a
//! second component of an existing type is stored but never found.

mod factory;

pub use factory::EntityFactory;

use crate::backend::Canvas;
use crate::components::Component;

#[derive(Default)]
pub struct Entity {
    components: Vec<Box<dyn Component>>,
}

impl Entity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a component and hand back a reference for further setup.
    pub fn add_component<T: Component>(&mut self, component: T) -> &mut T {
        self.components.push(Box::new(component));
        let last = self.components.len() - 1;
        match (*self.components[last]).as_any_mut().downcast_mut::<T>() {
            Some(component) => component,
            None => unreachable!("component stored under a different type"),
        }
    }

    pub fn component<T: Component>(&self) -> Option<&T> {
        self.components
            .iter()
            .find_map(|c| (**c).as_any().downcast_ref::<T>())
    }

    pub fn component_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.components
            .iter_mut()
            .find_map(|c| (**c).as_any_mut().downcast_mut::<T>())
    }

    pub fn update(&mut self, delta_time: f32) {
        for component in &mut self.components {
            component.update(delta_time);
        }
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        for component in &self.components {
            component.render(Some(self), canvas);
        }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl std::fmt::Debug for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entity")
            .field("components", &self.components.len())
            .finish()
    }
}
