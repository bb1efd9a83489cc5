//! Shared fixtures for unit tests.

use crate::color::Color;
use crate::object::Object2d;
use crate::style::{CaptionStyle, PointStyle, SegmentStyle, Style};
use crate::surface::DrawSurface;

/// One call into a [`RecordingSurface`], in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Clear,
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Stroke {
        color: Color,
        width: f64,
    },
    FillCircle {
        x: f64,
        y: f64,
        radius: f64,
        color: Color,
    },
    FillText {
        text: String,
        x: f64,
        y: f64,
        font: String,
        color: Color,
    },
}

/// A draw surface that records every call instead of drawing, so tests can
/// assert on emission order and content.
#[derive(Debug)]
pub struct RecordingSurface {
    pub width: u32,
    pub height: u32,
    pub calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, _width: u32, _height: u32) {
        self.calls.push(SurfaceCall::Clear);
    }

    fn begin_path(&mut self) {
        self.calls.push(SurfaceCall::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.calls.push(SurfaceCall::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.calls.push(SurfaceCall::LineTo(x, y));
    }

    fn stroke(&mut self, color: Color, width: f64) {
        self.calls.push(SurfaceCall::Stroke { color, width });
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
        self.calls.push(SurfaceCall::FillCircle {
            x,
            y,
            radius,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, color: Color) {
        self.calls.push(SurfaceCall::FillText {
            text: text.to_string(),
            x,
            y,
            font: font.to_string(),
            color,
        });
    }
}

/// A complete style with no caption texts.
pub fn basic_style() -> Style {
    Style::new(
        SegmentStyle::new(1.0, Color::WHITE),
        PointStyle::new(2.0, Color::YELLOW),
        CaptionStyle::new("monospace", Color::CYAN),
    )
}

/// A complete style carrying the given caption texts.
pub fn captioned_style(texts: &[&str]) -> Style {
    Style::builder()
        .segments(1.0, Color::WHITE)
        .points(2.0, Color::YELLOW)
        .captions("monospace", Color::CYAN)
        .texts(texts)
        .build()
        .unwrap()
}

/// A unit square centered on the origin.
pub fn unit_square() -> Object2d {
    Object2d::square(1.0, basic_style())
}
