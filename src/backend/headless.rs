//! In-memory platform: a framebuffer canvas and a scripted event queue.
//!
//! Used to drive the application without a terminal, e.g. in tests or CI.
//! Bootstrap failures can be injected per stage.

use std::collections::VecDeque;

use crate::renderer::Framebuffer;
use crate::types::{Event, Viewport};

use super::{BackendError, Platform, Resource};

/// Bootstrap step at which a headless platform is told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Init,
    Window,
    Context,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadlessWindow {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug)]
pub struct HeadlessPlatform {
    events: VecDeque<Event>,
    fail_at: Option<Stage>,
    pixels: (usize, usize),
    initialized: bool,
    quit_calls: usize,
}

impl HeadlessPlatform {
    /// A platform rendering into a `width`×`height` pixel framebuffer.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            events: VecDeque::new(),
            fail_at: None,
            pixels: (width, height),
            initialized: false,
            quit_calls: 0,
        }
    }

    pub fn failing_at(mut self, stage: Stage) -> Self {
        self.fail_at = Some(stage);
        self
    }

    pub fn with_events(mut self, events: impl IntoIterator<Item = Event>) -> Self {
        self.events.extend(events);
        self
    }

    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn quit_calls(&self) -> usize {
        self.quit_calls
    }

    fn check(&self, stage: Stage) -> Result<(), BackendError> {
        if self.fail_at != Some(stage) {
            return Ok(());
        }
        let reason = "injected failure".to_string();
        Err(match stage {
            Stage::Init => BackendError::Init(reason),
            Stage::Window => BackendError::Window(reason),
            Stage::Context => BackendError::Context(reason),
        })
    }
}

impl Platform for HeadlessPlatform {
    type Window = HeadlessWindow;
    type Canvas = Framebuffer;

    fn init(&mut self) -> Result<(), BackendError> {
        self.check(Stage::Init)?;
        self.initialized = true;
        Ok(())
    }

    fn create_window(
        &mut self,
        _title: &str,
        width: u32,
        height: u32,
    ) -> Result<Resource<HeadlessWindow>, BackendError> {
        self.check(Stage::Window)?;
        Ok(Resource::new(HeadlessWindow { width, height }, drop))
    }

    fn create_canvas(
        &mut self,
        window: &Resource<HeadlessWindow>,
    ) -> Result<Framebuffer, BackendError> {
        self.check(Stage::Context)?;
        let window = window
            .get()
            .ok_or_else(|| BackendError::Context("window is not valid".into()))?;
        let viewport = Viewport {
            width: window.width as f32,
            height: window.height as f32,
        };
        Ok(Framebuffer::new(viewport, self.pixels.0, self.pixels.1))
    }

    fn poll_event(&mut self) -> Result<Option<Event>, BackendError> {
        Ok(self.events.pop_front())
    }

    fn quit(&mut self) {
        self.initialized = false;
        self.quit_calls += 1;
    }
}
