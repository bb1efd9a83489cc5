/// Character-cell draw surface
use crossterm::{
    style::{Color as TermColor, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use scene2d_core::{Color, DrawSurface};
use std::io::Write;

/// A draw surface over a flat character buffer, one cell per "pixel".
///
/// Strokes rasterize with Bresenham lines, circles fill a disc of cells,
/// and text lands glyph-per-cell. [`present`](Self::present) writes the
/// frame to a terminal writer with crossterm styling.
pub struct TermSurface {
    width: usize,
    height: usize,
    char_buffer: Vec<char>,
    color_buffer: Vec<Color>,
    subpaths: Vec<Vec<(f64, f64)>>,
}

impl TermSurface {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            char_buffer: vec![' '; size],
            color_buffer: vec![Color::WHITE; size],
            subpaths: Vec::new(),
        }
    }

    /// The glyph at a cell, for inspection.
    pub fn char_at(&self, x: usize, y: usize) -> char {
        self.char_buffer[y * self.width + x]
    }

    fn plot(&mut self, x: i32, y: i32, c: char, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        self.char_buffer[idx] = c;
        self.color_buffer[idx] = color;
    }

    /// Bresenham line between two cell coordinates.
    fn draw_line(&mut self, from: (f64, f64), to: (f64, f64), c: char, color: Color) {
        let (mut x0, mut y0) = (from.0.round() as i32, from.1.round() as i32);
        let (x1, y1) = (to.0.round() as i32, to.1.round() as i32);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x0, y0, c, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Write the current frame to `writer` with crossterm styling.
    pub fn present<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                let color = self.color_buffer[idx];
                writer.queue(SetForegroundColor(TermColor::Rgb {
                    r: color.r,
                    g: color.g,
                    b: color.b,
                }))?;
                writer.queue(Print(self.char_buffer[idx]))?;
            }
            writer.queue(Print("\r\n"))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl DrawSurface for TermSurface {
    fn size(&self) -> (u32, u32) {
        (self.width as u32, self.height as u32)
    }

    fn clear(&mut self, _width: u32, _height: u32) {
        self.char_buffer.fill(' ');
        self.color_buffer.fill(Color::WHITE);
        self.subpaths.clear();
    }

    fn begin_path(&mut self) {
        self.subpaths.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.subpaths.push(vec![(x, y)]);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        match self.subpaths.last_mut() {
            Some(subpath) => subpath.push((x, y)),
            None => self.subpaths.push(vec![(x, y)]),
        }
    }

    fn stroke(&mut self, color: Color, width: f64) {
        let glyph = if width >= 2.0 { '#' } else { '+' };
        let subpaths = self.subpaths.clone();
        for subpath in &subpaths {
            for pair in subpath.windows(2) {
                self.draw_line(pair[0], pair[1], glyph, color);
            }
        }
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
        let cx = x.round() as i32;
        let cy = y.round() as i32;
        let r = radius.round() as i32;
        if r <= 0 {
            self.plot(cx, cy, 'o', color);
            return;
        }
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r * r {
                    self.plot(cx + dx, cy + dy, 'o', color);
                }
            }
        }
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, _font: &str, color: Color) {
        // Font selection has no meaning in character cells.
        let cx = x.round() as i32;
        let cy = y.round() as i32;
        for (i, c) in text.chars().enumerate() {
            self.plot(cx + i as i32, cy, c, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_plots_line_cells() {
        let mut surface = TermSurface::new(10, 5);
        surface.begin_path();
        surface.move_to(0.0, 1.0);
        surface.line_to(3.0, 1.0);
        surface.stroke(Color::WHITE, 1.0);

        for x in 0..=3 {
            assert_eq!(surface.char_at(x, 1), '+');
        }
        assert_eq!(surface.char_at(4, 1), ' ');
    }

    #[test]
    fn test_wide_stroke_uses_heavy_glyph() {
        let mut surface = TermSurface::new(4, 4);
        surface.begin_path();
        surface.move_to(0.0, 0.0);
        surface.line_to(2.0, 0.0);
        surface.stroke(Color::WHITE, 3.0);
        assert_eq!(surface.char_at(1, 0), '#');
    }

    #[test]
    fn test_clear_resets_cells_and_path() {
        let mut surface = TermSurface::new(4, 4);
        surface.begin_path();
        surface.move_to(0.0, 0.0);
        surface.line_to(3.0, 3.0);
        surface.stroke(Color::RED, 1.0);
        surface.clear(4, 4);

        assert_eq!(surface.char_at(0, 0), ' ');
        // a stroke after clear without new path commands draws nothing
        surface.stroke(Color::RED, 1.0);
        assert_eq!(surface.char_at(0, 0), ' ');
    }

    #[test]
    fn test_off_surface_drawing_is_clipped() {
        let mut surface = TermSurface::new(4, 4);
        surface.fill_circle(-10.0, -10.0, 1.0, Color::RED);
        surface.fill_text("far away", 100.0, 100.0, "monospace", Color::RED);
        surface.begin_path();
        surface.move_to(-5.0, 2.0);
        surface.line_to(8.0, 2.0);
        surface.stroke(Color::RED, 1.0);
        // the in-bounds span of the line still lands
        assert_eq!(surface.char_at(0, 2), '+');
        assert_eq!(surface.char_at(3, 2), '+');
    }

    #[test]
    fn test_small_circle_is_a_single_marker() {
        let mut surface = TermSurface::new(4, 4);
        surface.fill_circle(2.0, 2.0, 0.4, Color::YELLOW);
        assert_eq!(surface.char_at(2, 2), 'o');
        assert_eq!(surface.char_at(1, 2), ' ');
    }

    #[test]
    fn test_text_lands_glyph_per_cell() {
        let mut surface = TermSurface::new(10, 3);
        surface.fill_text("ab", 1.0, 1.0, "monospace", Color::WHITE);
        assert_eq!(surface.char_at(1, 1), 'a');
        assert_eq!(surface.char_at(2, 1), 'b');
    }

    #[test]
    fn test_line_to_without_move_to_starts_a_subpath() {
        let mut surface = TermSurface::new(4, 4);
        surface.begin_path();
        surface.line_to(1.0, 1.0);
        surface.stroke(Color::WHITE, 1.0);
        // a single-point subpath has no pairs to rasterize
        assert_eq!(surface.char_at(1, 1), ' ');
    }
}
