//! Renderer — the single active rendering context.
//!
//! The application owns one `Renderer` and lends its canvas to entity
//! render calls. The slot is explicitly initialized and torn down: a second
//! initialization is rejected and keeps the existing context, and any access
//! while empty is an error.

mod framebuffer;

pub use framebuffer::Framebuffer;

use log::warn;
use thiserror::Error;

use crate::backend::{BackendError, Canvas};
use crate::types::Color;

#[derive(Debug, Error)]
pub enum RendererError {
    #[error("renderer not initialized")]
    NotInitialized,
    #[error("renderer already initialized")]
    AlreadyInitialized,
    #[error(transparent)]
    Backend(#[from] BackendError),
}

#[derive(Debug)]
pub struct Renderer<C: Canvas> {
    canvas: Option<C>,
}

impl<C: Canvas> Renderer<C> {
    pub fn new() -> Self {
        Self { canvas: None }
    }

    /// Install a rendering context. Fails, dropping `canvas`, when one is
    /// already installed.
    pub fn initialize(&mut self, canvas: C) -> Result<(), RendererError> {
        if self.canvas.is_some() {
            warn!("Rejected second renderer initialization");
            return Err(RendererError::AlreadyInitialized);
        }
        self.canvas = Some(canvas);
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.canvas.is_some()
    }

    pub fn instance(&mut self) -> Result<&mut C, RendererError> {
        self.canvas.as_mut().ok_or(RendererError::NotInitialized)
    }

    /// Tear down the context. Harmless when nothing is installed.
    pub fn shutdown(&mut self) -> Option<C> {
        self.canvas.take()
    }

    pub fn clear(&mut self, color: Color) -> Result<(), RendererError> {
        let canvas = self.instance()?;
        canvas.set_draw_color(color);
        canvas.clear();
        Ok(())
    }

    pub fn present(&mut self) -> Result<(), RendererError> {
        self.instance()?.present()?;
        Ok(())
    }
}

impl<C: Canvas> Default for Renderer<C> {
    fn default() -> Self {
        Self::new()
    }
}
