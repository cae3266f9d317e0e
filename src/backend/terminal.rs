//! Terminal backend — the demo's native platform.
//!
//! The "window" is the alternate screen in raw mode; restoring the terminal
//! is the window's destroy function, so it runs even when the loop fails.
//! The canvas rasterizes into a `Framebuffer` with two pixels per cell
//! (`▀` with the upper pixel as foreground and the lower as background) and
//! presents only the cells that changed since the previous frame.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::event::{self, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::tty::IsTty;
use crossterm::{cursor, execute, queue, style, terminal};
use log::debug;

use crate::menubar::render_menubar;
use crate::renderer::Framebuffer;
use crate::types::{Color, Event, FRect, Scancode, Vertex, Viewport};

use super::{BackendError, Canvas, Platform, Resource};

/// Rows reserved above the canvas for the menu bar.
const CANVAS_OFFSET: u16 = 1;

#[derive(Debug, Default)]
pub struct TerminalPlatform {
    menu: Vec<&'static str>,
    initialized: bool,
}

impl TerminalPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items shown in the menu bar next to the window title.
    pub fn with_menu(mut self, items: &[&'static str]) -> Self {
        self.menu = items.to_vec();
        self
    }
}

#[derive(Debug)]
pub struct TerminalWindow {
    title: String,
    viewport: Viewport,
}

fn restore_terminal(_window: TerminalWindow) {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, style::ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

impl Platform for TerminalPlatform {
    type Window = TerminalWindow;
    type Canvas = TerminalCanvas;

    fn init(&mut self) -> Result<(), BackendError> {
        if !io::stdout().is_tty() {
            return Err(BackendError::Init("stdout is not a terminal".into()));
        }
        terminal::size().map_err(|e| BackendError::Init(e.to_string()))?;
        self.initialized = true;
        Ok(())
    }

    fn create_window(
        &mut self,
        title: &str,
        width: u32,
        height: u32,
    ) -> Result<Resource<TerminalWindow>, BackendError> {
        if !self.initialized {
            return Err(BackendError::Window("platform not initialized".into()));
        }
        terminal::enable_raw_mode().map_err(|e| BackendError::Window(e.to_string()))?;

        let window = TerminalWindow {
            title: title.to_string(),
            viewport: Viewport {
                width: width as f32,
                height: height as f32,
            },
        };
        // From here on dropping the resource restores the terminal.
        let window = Resource::new(window, restore_terminal);

        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::SetTitle(title),
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All),
        )
        .map_err(|e| BackendError::Window(e.to_string()))?;

        Ok(window)
    }

    fn create_canvas(
        &mut self,
        window: &Resource<TerminalWindow>,
    ) -> Result<TerminalCanvas, BackendError> {
        let window = window
            .get()
            .ok_or_else(|| BackendError::Context("window is not valid".into()))?;
        let (cols, rows) = terminal::size().map_err(|e| BackendError::Context(e.to_string()))?;
        if rows <= CANVAS_OFFSET || cols == 0 {
            return Err(BackendError::Context(format!(
                "terminal too small: {cols}x{rows}"
            )));
        }

        let mut canvas = TerminalCanvas {
            framebuffer: Framebuffer::new(window.viewport, 0, 0),
            stdout: io::stdout(),
            title: window.title.clone(),
            menu: self.menu.clone(),
            size: (0, 0),
            shown: Vec::new(),
        };
        canvas.fit((cols, rows))?;
        Ok(canvas)
    }

    fn poll_event(&mut self) -> Result<Option<Event>, BackendError> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        Ok(Some(translate(event::read()?)))
    }

    fn quit(&mut self) {
        self.initialized = false;
    }
}

/// Map a crossterm event onto the demo's input vocabulary.
///
/// Ctrl-C is the external quit signal, since raw mode swallows SIGINT.
pub fn translate(event: event::Event) -> Event {
    let event::Event::Key(key) = event else {
        return Event::Other;
    };
    if key.kind == KeyEventKind::Release {
        return Event::Other;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Event::Quit;
    }

    let scancode = match key.code {
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => Scancode::W,
            'a' => Scancode::A,
            's' => Scancode::S,
            'd' => Scancode::D,
            'q' => Scancode::Q,
            ' ' => Scancode::Space,
            _ => Scancode::Other,
        },
        KeyCode::Esc => Scancode::Escape,
        KeyCode::Enter => Scancode::Enter,
        _ => Scancode::Other,
    };
    Event::KeyDown(scancode)
}

// ---------------------------------------------------------------------------
// Canvas
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    upper: Color,
    lower: Color,
}

pub struct TerminalCanvas {
    framebuffer: Framebuffer,
    stdout: io::Stdout,
    title: String,
    menu: Vec<&'static str>,
    size: (u16, u16),
    shown: Vec<Cell>,
}

impl TerminalCanvas {
    /// Match the framebuffer to the terminal size and force a full redraw.
    fn fit(&mut self, size: (u16, u16)) -> Result<(), BackendError> {
        let (cols, rows) = size;
        let canvas_rows = rows.saturating_sub(CANVAS_OFFSET) as usize;
        self.framebuffer.resize(cols as usize, canvas_rows * 2);
        self.size = size;
        self.shown.clear();

        execute!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        render_menubar(&mut self.stdout, &self.title, &self.menu)?;
        Ok(())
    }

    fn cells(&self) -> Vec<Cell> {
        let width = self.framebuffer.width();
        let rows = self.framebuffer.height() / 2;
        let mut cells = Vec::with_capacity(width * rows);
        for row in 0..rows {
            for col in 0..width {
                let upper = self.framebuffer.pixel(col, row * 2).unwrap_or_default();
                let lower = self.framebuffer.pixel(col, row * 2 + 1).unwrap_or_default();
                cells.push(Cell { upper, lower });
            }
        }
        cells
    }
}

impl Canvas for TerminalCanvas {
    fn viewport(&self) -> Viewport {
        self.framebuffer.viewport()
    }

    fn set_draw_color(&mut self, color: Color) {
        self.framebuffer.set_draw_color(color);
    }

    fn fill_rect(&mut self, rect: FRect) {
        self.framebuffer.fill_rect(rect);
    }

    fn plot_point(&mut self, x: f32, y: f32) {
        self.framebuffer.plot_point(x, y);
    }

    fn fill_geometry(&mut self, vertices: &[Vertex], indices: &[u32]) {
        self.framebuffer.fill_geometry(vertices, indices);
    }

    fn clear(&mut self) {
        self.framebuffer.clear();
    }

    fn present(&mut self) -> Result<(), BackendError> {
        let size = terminal::size()?;
        if size != self.size {
            debug!("Terminal resized to {}x{}", size.0, size.1);
            // The frame was rasterized for the old size; the next one redraws.
            return self.fit(size);
        }

        let cells = self.cells();
        let width = self.framebuffer.width().max(1);
        let full = self.shown.len() != cells.len();
        let mut cursor_at = None;

        for (i, cell) in cells.iter().enumerate() {
            if !full && self.shown[i] == *cell {
                continue;
            }
            let x = (i % width) as u16;
            let y = (i / width) as u16 + CANVAS_OFFSET;
            if cursor_at != Some((x, y)) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }
            queue!(
                self.stdout,
                style::SetForegroundColor(to_ct_color(cell.upper)),
                style::SetBackgroundColor(to_ct_color(cell.lower)),
                style::Print('▀'),
            )?;
            cursor_at = Some((x + 1, y));
        }

        queue!(self.stdout, style::ResetColor)?;
        self.stdout.flush()?;
        self.shown = cells;
        self.framebuffer.present()
    }
}

pub fn to_ct_color(c: Color) -> style::Color {
    style::Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyEventState};

    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> event::Event {
        event::Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn translates_movement_keys_case_insensitively() {
        assert_eq!(
            translate(key(KeyCode::Char('w'), KeyModifiers::NONE)),
            Event::KeyDown(Scancode::W)
        );
        assert_eq!(
            translate(key(KeyCode::Char('D'), KeyModifiers::SHIFT)),
            Event::KeyDown(Scancode::D)
        );
        assert_eq!(
            translate(key(KeyCode::Esc, KeyModifiers::NONE)),
            Event::KeyDown(Scancode::Escape)
        );
        assert_eq!(
            translate(key(KeyCode::Left, KeyModifiers::NONE)),
            Event::KeyDown(Scancode::Other)
        );
    }

    #[test]
    fn ctrl_c_is_quit() {
        assert_eq!(
            translate(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Event::Quit
        );
    }

    #[test]
    fn releases_and_non_key_events_are_ignored() {
        let release = event::Event::Key(KeyEvent::new_with_kind_and_state(
            KeyCode::Char('w'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        ));
        assert_eq!(translate(release), Event::Other);
        assert_eq!(translate(event::Event::Resize(80, 24)), Event::Other);
        assert_eq!(translate(event::Event::FocusGained), Event::Other);
    }

    #[test]
    fn colors_map_to_rgb() {
        assert_eq!(
            to_ct_color(Color::rgb(1, 2, 3)),
            style::Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
