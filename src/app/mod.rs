//! Application — the frame loop.
//!
//! Owns the entities, the window and the rendering context. Each frame
//! drains input, advances every entity by the wall-clock delta, integrates
//! velocities with wraparound, then clears, renders and presents.
//! Everything runs on one thread in strict lockstep; the running flag is the
//! only way out and is checked between frames.

pub mod motion;
mod time;

pub use time::FrameTimer;

use std::thread;
use std::time::Instant;

use anyhow::{Result, bail};
use log::{debug, error, info, log_enabled, warn};
use serde::Serialize;

use crate::backend::{Platform, Resource};
use crate::components::{Transform, Velocity};
use crate::config::AppConfig;
use crate::entity::{Entity, EntityFactory};
use crate::renderer::Renderer;
use crate::types::{Event, Scancode};

/// Menu bar and console hints for the keyboard controls.
pub const USAGE_HINTS: &[&str] = &[
    "[Esc] quit",
    "[W][A][S][D] move the green square",
    "[any other key] stop",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Uninitialized,
    Running,
    Terminated,
}

/// Kinematic state of one entity, as logged on shutdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntitySnapshot {
    pub transform: Option<Transform>,
    pub velocity: Option<Velocity>,
}

pub struct Application<P: Platform> {
    platform: P,
    config: AppConfig,
    state: AppState,
    running: bool,
    platform_ready: bool,
    window: Resource<P::Window>,
    renderer: Renderer<P::Canvas>,
    entities: Vec<Entity>,
    timer: FrameTimer,
}

impl<P: Platform> Application<P> {
    pub fn new(platform: P, config: AppConfig) -> Self {
        Self {
            platform,
            config,
            state: AppState::Uninitialized,
            running: false,
            platform_ready: false,
            window: Resource::empty(),
            renderer: Renderer::new(),
            entities: Vec::new(),
            timer: FrameTimer::new(),
        }
    }

    /// Bring up the platform, window and rendering context and spawn the
    /// demo scene. On failure nothing is left running and the application
    /// stays uninitialized.
    pub fn initialize(&mut self) -> Result<()> {
        if self.state != AppState::Uninitialized {
            bail!("application cannot be initialized from state {:?}", self.state);
        }

        if let Err(e) = self.bootstrap() {
            error!("{e:#}");
            self.teardown();
            return Err(e);
        }

        self.entities.push(EntityFactory::create_rectangle(400.0, 300.0));
        self.entities.push(EntityFactory::create_circle(100.0, 100.0));
        self.entities.push(EntityFactory::create_triangle(300.0, 50.0));

        self.state = AppState::Running;
        self.running = true;
        self.timer.reset();
        info!(
            "Initialized {:?} with {} entities",
            self.config.title,
            self.entities.len()
        );
        Ok(())
    }

    fn bootstrap(&mut self) -> Result<()> {
        self.platform.init()?;
        self.platform_ready = true;

        let viewport = self.config.viewport;
        let window = self.platform.create_window(
            &self.config.title,
            viewport.width as u32,
            viewport.height as u32,
        )?;
        let canvas = self.platform.create_canvas(&window)?;
        self.window = window;
        self.renderer.initialize(canvas)?;
        Ok(())
    }

    fn teardown(&mut self) {
        self.renderer.shutdown();
        self.window = Resource::empty();
        if self.platform_ready {
            self.platform.quit();
            self.platform_ready = false;
        }
    }

    /// Loop until a quit event or the escape key clears the running flag.
    pub fn run(&mut self) -> Result<()> {
        if self.state != AppState::Running {
            bail!("run requires a successful initialize");
        }
        while self.running {
            self.frame()?;
        }
        Ok(())
    }

    /// One full iteration: input, simulation, drawing, pacing.
    pub fn frame(&mut self) -> Result<()> {
        let started = Instant::now();

        while let Some(event) = self.platform.poll_event()? {
            self.on_event(event);
        }

        let delta_time = self.timer.tick();
        self.step(delta_time);
        self.render()?;

        if let Some(interval) = self.config.frame_interval {
            let spent = started.elapsed();
            if spent < interval {
                thread::sleep(interval - spent);
            }
        }
        Ok(())
    }

    /// Update every entity, then integrate velocities into transforms.
    pub fn step(&mut self, delta_time: f32) {
        let viewport = self.config.viewport;
        for entity in &mut self.entities {
            entity.update(delta_time);

            let Some(velocity) = entity.component::<Velocity>().copied() else {
                continue;
            };
            if let Some(transform) = entity.component_mut::<Transform>() {
                motion::integrate(transform, &velocity, delta_time, viewport);
            }
        }
    }

    fn render(&mut self) -> Result<()> {
        self.renderer.clear(self.config.background)?;
        let canvas = self.renderer.instance()?;
        for entity in &self.entities {
            entity.render(canvas);
        }
        self.renderer.present()?;
        Ok(())
    }

    pub fn on_event(&mut self, event: Event) {
        match event {
            Event::Quit => self.running = false,
            Event::KeyDown(scancode) => self.handle_key_down(scancode),
            Event::Other => {}
        }
    }

    /// Steer the first entity: every key stops it, WASD then sets one axis.
    fn handle_key_down(&mut self, scancode: Scancode) {
        debug!("Key pressed: {scancode:?}");
        if scancode == Scancode::Escape {
            self.running = false;
        }

        let speed = self.config.move_speed;
        let Some(velocity) = self
            .entities
            .first_mut()
            .and_then(|e| e.component_mut::<Velocity>())
        else {
            return;
        };

        velocity.vx = 0.0;
        velocity.vy = 0.0;
        match scancode {
            Scancode::W => velocity.vy = -speed,
            Scancode::S => velocity.vy = speed,
            Scancode::A => velocity.vx = -speed,
            Scancode::D => velocity.vx = speed,
            _ => {}
        }
    }

    /// Release the rendering context, the window and the platform.
    /// Safe to call repeatedly and without a successful initialize.
    pub fn shutdown(&mut self) {
        if self.state == AppState::Terminated {
            return;
        }
        if self.state == AppState::Running {
            if log_enabled!(log::Level::Debug) {
                match serde_json::to_string(&self.snapshot()) {
                    Ok(json) => debug!("Final scene: {json}"),
                    Err(e) => warn!("Could not serialize final scene: {e}"),
                }
            }
            info!("Shutting down after {:.1?}", self.timer.elapsed);
        }
        self.teardown();
        self.running = false;
        self.state = AppState::Terminated;
    }

    // -----------------------------------------------------------------------
    // Scene access
    // -----------------------------------------------------------------------

    pub fn spawn(&mut self, entity: Entity) -> usize {
        self.entities.push(entity);
        self.entities.len() - 1
    }

    pub fn despawn(&mut self, index: usize) -> Option<Entity> {
        (index < self.entities.len()).then(|| self.entities.remove(index))
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    pub fn snapshot(&self) -> Vec<EntitySnapshot> {
        self.entities
            .iter()
            .map(|e| EntitySnapshot {
                transform: e.component::<Transform>().copied(),
                velocity: e.component::<Velocity>().copied(),
            })
            .collect()
    }

    // -----------------------------------------------------------------------
    // Lifecycle inspection
    // -----------------------------------------------------------------------

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn renderer_mut(&mut self) -> &mut Renderer<P::Canvas> {
        &mut self.renderer
    }

    pub fn window(&self) -> &Resource<P::Window> {
        &self.window
    }
}

impl<P: Platform> Drop for Application<P> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
