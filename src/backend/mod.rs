//! Backend — the narrow interfaces the demo consumes from its platform.
//!
//! A `Platform` bootstraps a window and a drawing context and yields input
//! events. A `Canvas` is the drawing context: a handful of primitives in
//! logical viewport coordinates. The terminal and headless backends both
//! implement these traits; nothing above this module knows which one runs.

pub mod headless;
pub mod resource;
pub mod terminal;

pub use resource::Resource;

use std::io;

use thiserror::Error;

use crate::types::{Color, Event, FRect, Vertex, Viewport};

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend initialization failed: {0}")]
    Init(String),
    #[error("window creation failed: {0}")]
    Window(String),
    #[error("rendering context creation failed: {0}")]
    Context(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Drawing primitives used by shape strategies.
pub trait Canvas {
    /// Logical area that is actually drawn; primitives outside it are dropped.
    fn viewport(&self) -> Viewport;
    fn set_draw_color(&mut self, color: Color);
    fn fill_rect(&mut self, rect: FRect);
    fn plot_point(&mut self, x: f32, y: f32);
    /// Fill the triangles described by `indices` (three per triangle).
    fn fill_geometry(&mut self, vertices: &[Vertex], indices: &[u32]);
    /// Fill the whole target with the current draw color.
    fn clear(&mut self);
    fn present(&mut self) -> Result<(), BackendError>;
}

/// Window/context bootstrap and input source.
pub trait Platform {
    type Window;
    type Canvas: Canvas;

    fn init(&mut self) -> Result<(), BackendError>;

    fn create_window(
        &mut self,
        title: &str,
        width: u32,
        height: u32,
    ) -> Result<Resource<Self::Window>, BackendError>;

    fn create_canvas(
        &mut self,
        window: &Resource<Self::Window>,
    ) -> Result<Self::Canvas, BackendError>;

    /// Next pending event, without blocking.
    fn poll_event(&mut self) -> Result<Option<Event>, BackendError>;

    fn quit(&mut self);
}
