//! Draw surface abstraction.
//!
//! A [`DrawSurface`] is the opaque 2D target a scene renders into. The
//! interface mirrors an immediate-mode canvas: multi-subpath stroking for
//! segments, filled circles for vertex markers, and filled text (top
//! baseline) for captions. Implementations decide what a "pixel" is; the
//! terminal front-end uses character cells.

use crate::color::Color;

pub trait DrawSurface {
    /// The drawing area in surface units (width, height).
    fn size(&self) -> (u32, u32);

    /// Reset the drawing area.
    fn clear(&mut self, width: u32, height: u32);

    /// Discard any accumulated path.
    fn begin_path(&mut self);

    /// Start a new subpath at (x, y).
    fn move_to(&mut self, x: f64, y: f64);

    /// Extend the current subpath to (x, y).
    fn line_to(&mut self, x: f64, y: f64);

    /// Stroke every accumulated subpath.
    fn stroke(&mut self, color: Color, width: f64);

    /// Fill a circle centered on (x, y).
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);

    /// Draw text with its top-left corner at (x, y).
    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, color: Color);
}
