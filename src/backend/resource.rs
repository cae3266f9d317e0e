//! Scoped ownership of backend handles.

use std::fmt;

/// Owns a backend handle and destroys it with a caller-supplied function
/// when dropped.
///
/// Assigning a new wrapper over an occupied one drops, and therefore
/// destroys, the previous handle exactly once. The wrapper is move-only.
pub struct Resource<T> {
    handle: Option<T>,
    destroy: Option<Box<dyn FnOnce(T)>>,
}

impl<T> Resource<T> {
    pub fn new(handle: T, destroy: impl FnOnce(T) + 'static) -> Self {
        Resource {
            handle: Some(handle),
            destroy: Some(Box::new(destroy)),
        }
    }

    pub fn empty() -> Self {
        Resource {
            handle: None,
            destroy: None,
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.handle.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.handle.as_mut()
    }

    /// Give up ownership without destroying the handle.
    pub fn release(&mut self) -> Option<T> {
        self.handle.take()
    }

    pub fn is_valid(&self) -> bool {
        self.handle.is_some()
    }
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Drop for Resource<T> {
    fn drop(&mut self) {
        if let (Some(handle), Some(destroy)) = (self.handle.take(), self.destroy.take()) {
            destroy(handle);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Resource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource").field("handle", &self.handle).finish()
    }
}
