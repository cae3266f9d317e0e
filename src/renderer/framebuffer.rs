//! Framebuffer — the deterministic rasterizer behind every canvas.
//!
//! Draw primitives arrive in logical viewport coordinates and are scaled
//! onto a fixed pixel grid. The framebuffer knows nothing about terminals;
//! backends read the pixels back when presenting.

use std::ops::Range;

use crate::backend::{BackendError, Canvas};
use crate::types::{Color, FRect, Point, Vertex, Viewport};

#[derive(Debug, Clone)]
pub struct Framebuffer {
    viewport: Viewport,
    width: usize,
    height: usize,
    pixels: Vec<Color>,
    draw_color: Color,
    draw_calls: usize,
    frames: usize,
}

impl Framebuffer {
    pub fn new(viewport: Viewport, width: usize, height: usize) -> Self {
        Self {
            viewport,
            width,
            height,
            pixels: vec![Color::BLACK; width * height],
            draw_color: Color::BLACK,
            draw_calls: 0,
            frames: 0,
        }
    }

    /// Change the pixel grid size. Contents are reset to black.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.pixels = vec![Color::BLACK; width * height];
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Number of shape primitives received (rects, points, geometry).
    pub fn draw_calls(&self) -> usize {
        self.draw_calls
    }

    pub fn frames_presented(&self) -> usize {
        self.frames
    }

    fn scale(&self) -> (f32, f32) {
        (
            self.width as f32 / self.viewport.width,
            self.height as f32 / self.viewport.height,
        )
    }

    fn to_pixels(&self, p: Point) -> Point {
        let (sx, sy) = self.scale();
        Point {
            x: p.x * sx,
            y: p.y * sy,
        }
    }

    fn set(&mut self, x: usize, y: usize, color: Color) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }

    fn fill_triangle(&mut self, a: Point, b: Point, c: Point, color: Color) {
        let area = edge(a, b, c);
        if area == 0.0 || !area.is_finite() {
            return;
        }

        let xs = span(a.x.min(b.x).min(c.x), a.x.max(b.x).max(c.x), self.width);
        let ys = span(a.y.min(b.y).min(c.y), a.y.max(b.y).max(c.y), self.height);

        for py in ys {
            for px in xs.clone() {
                let p = Point {
                    x: px as f32 + 0.5,
                    y: py as f32 + 0.5,
                };
                let w0 = edge(b, c, p);
                let w1 = edge(c, a, p);
                let w2 = edge(a, b, p);
                let inside = (w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0)
                    || (w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0);
                if inside {
                    self.set(px, py, color);
                }
            }
        }
    }
}

/// Twice the signed area of `abc`.
fn edge(a: Point, b: Point, c: Point) -> f32 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Pixel indices covering `[lo, hi)`, clamped to `0..limit`.
fn span(lo: f32, hi: f32, limit: usize) -> Range<usize> {
    let start = (lo.floor().max(0.0) as usize).min(limit);
    let end = (hi.ceil().max(0.0) as usize).min(limit);
    start..end.max(start)
}

impl Canvas for Framebuffer {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
    }

    fn fill_rect(&mut self, rect: FRect) {
        self.draw_calls += 1;
        if !(rect.w > 0.0 && rect.h > 0.0) {
            return;
        }

        let top_left = self.to_pixels(Point { x: rect.x, y: rect.y });
        let bottom_right = self.to_pixels(Point {
            x: rect.x + rect.w,
            y: rect.y + rect.h,
        });
        let color = self.draw_color;
        for y in span(top_left.y, bottom_right.y, self.height) {
            for x in span(top_left.x, bottom_right.x, self.width) {
                self.set(x, y, color);
            }
        }
    }

    fn plot_point(&mut self, x: f32, y: f32) {
        self.draw_calls += 1;
        let p = self.to_pixels(Point { x, y });
        if p.x >= 0.0 && p.y >= 0.0 {
            self.set(p.x as usize, p.y as usize, self.draw_color);
        }
    }

    fn fill_geometry(&mut self, vertices: &[Vertex], indices: &[u32]) {
        self.draw_calls += 1;
        for tri in indices.chunks_exact(3) {
            let corners: Option<Vec<&Vertex>> =
                tri.iter().map(|&i| vertices.get(i as usize)).collect();
            let Some(corners) = corners else {
                continue;
            };
            let a = self.to_pixels(corners[0].position);
            let b = self.to_pixels(corners[1].position);
            let c = self.to_pixels(corners[2].position);
            self.fill_triangle(a, b, c, corners[0].color);
        }
    }

    fn clear(&mut self) {
        let color = self.draw_color;
        self.pixels.fill(color);
    }

    fn present(&mut self) -> Result<(), BackendError> {
        self.frames += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn framebuffer() -> Framebuffer {
        // One pixel per 10×10 logical units.
        Framebuffer::new(Viewport::default(), 80, 60)
    }

    fn count(fb: &Framebuffer, color: Color) -> usize {
        (0..fb.height())
            .flat_map(|y| (0..fb.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| fb.pixel(x, y) == Some(color))
            .count()
    }

    #[test]
    fn clear_fills_with_draw_color() {
        let mut fb = framebuffer();
        fb.set_draw_color(Color::rgb(30, 30, 30));
        fb.clear();
        assert_eq!(count(&fb, Color::rgb(30, 30, 30)), 80 * 60);
        assert_eq!(fb.draw_calls(), 0);
    }

    #[test]
    fn fill_rect_covers_scaled_area() {
        let mut fb = framebuffer();
        fb.set_draw_color(Color::GREEN);
        fb.fill_rect(FRect { x: 100.0, y: 100.0, w: 50.0, h: 30.0 });
        assert_eq!(count(&fb, Color::GREEN), 5 * 3);
        assert_eq!(fb.pixel(10, 10), Some(Color::GREEN));
        assert_eq!(fb.pixel(15, 10), Some(Color::BLACK));
    }

    #[test]
    fn fill_rect_clips_to_bounds_and_skips_degenerate() {
        let mut fb = framebuffer();
        fb.set_draw_color(Color::RED);
        fb.fill_rect(FRect { x: -50.0, y: -50.0, w: 100.0, h: 100.0 });
        assert_eq!(count(&fb, Color::RED), 5 * 5);

        let mut fb = framebuffer();
        fb.set_draw_color(Color::RED);
        fb.fill_rect(FRect { x: 10.0, y: 10.0, w: -20.0, h: 20.0 });
        fb.fill_rect(FRect { x: 10.0, y: 10.0, w: f32::NAN, h: 20.0 });
        assert_eq!(count(&fb, Color::RED), 0);
        assert_eq!(fb.draw_calls(), 2);
    }

    #[test]
    fn plot_point_ignores_out_of_range() {
        let mut fb = framebuffer();
        fb.set_draw_color(Color::RED);
        fb.plot_point(15.0, 25.0);
        fb.plot_point(-1.0, 10.0);
        fb.plot_point(900.0, 10.0);
        assert_eq!(count(&fb, Color::RED), 1);
        assert_eq!(fb.pixel(1, 2), Some(Color::RED));
    }

    #[test]
    fn fill_geometry_rasterizes_either_winding() {
        let v = |x, y| Vertex { position: Point { x, y }, color: Color::MAGENTA };
        let vertices = [v(0.0, 0.0), v(400.0, 0.0), v(0.0, 300.0)];

        let mut cw = framebuffer();
        cw.fill_geometry(&vertices, &[0, 1, 2]);
        let mut ccw = framebuffer();
        ccw.fill_geometry(&vertices, &[0, 2, 1]);

        let filled = count(&cw, Color::MAGENTA);
        assert!(filled > 0);
        assert_eq!(filled, count(&ccw, Color::MAGENTA));
        assert_eq!(cw.pixel(1, 1), Some(Color::MAGENTA));
        assert_eq!(cw.pixel(79, 59), Some(Color::BLACK));
    }

    #[test]
    fn fill_geometry_skips_bad_indices_and_flat_triangles() {
        let v = |x, y| Vertex { position: Point { x, y }, color: Color::MAGENTA };
        let mut fb = framebuffer();
        fb.fill_geometry(&[v(0.0, 0.0), v(10.0, 10.0)], &[0, 1, 5]);
        fb.fill_geometry(&[v(0.0, 0.0), v(10.0, 10.0), v(20.0, 20.0)], &[0, 1, 2]);
        assert_eq!(count(&fb, Color::MAGENTA), 0);
    }

    #[test]
    fn resize_resets_pixels() {
        let mut fb = framebuffer();
        fb.resize(4, 2);
        assert_eq!((fb.width(), fb.height()), (4, 2));
        assert_eq!(fb.pixel(3, 1), Some(Color::BLACK));
        assert_eq!(fb.pixel(4, 0), None);
    }
}
