//! Visual styling for planar objects.
//!
//! A complete [`Style`] always carries all three groups: how to stroke the
//! edge segments, how to mark the vertices, and how to label them. The
//! [`StyleBuilder`] assembles one group at a time and reports the first
//! missing group on `build`.

use crate::color::Color;
use crate::error::SceneError;

/// Stroke styling for edge segments.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentStyle {
    pub width: f64,
    pub color: Color,
}

impl SegmentStyle {
    pub fn new(width: f64, color: Color) -> Self {
        Self { width, color }
    }
}

/// Marker styling for vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct PointStyle {
    pub width: f64,
    pub color: Color,
}

impl PointStyle {
    pub fn new(width: f64, color: Color) -> Self {
        Self { width, color }
    }
}

/// Caption styling for vertices.
///
/// `texts` holds one caption per vertex, in vertex order; it may be shorter
/// (or longer) than the vertex list.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionStyle {
    pub font: String,
    pub color: Color,
    pub texts: Vec<String>,
}

impl CaptionStyle {
    pub fn new(font: impl Into<String>, color: Color) -> Self {
        Self {
            font: font.into(),
            color,
            texts: Vec::new(),
        }
    }
}

/// The full style descriptor of a planar object.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub segments: SegmentStyle,
    pub points: PointStyle,
    pub captions: CaptionStyle,
}

impl Style {
    pub fn new(segments: SegmentStyle, points: PointStyle, captions: CaptionStyle) -> Self {
        Self {
            segments,
            points,
            captions,
        }
    }

    pub fn builder() -> StyleBuilder {
        StyleBuilder::default()
    }
}

/// Assembles a [`Style`] from individually supplied groups.
#[derive(Debug, Default)]
pub struct StyleBuilder {
    segments: Option<SegmentStyle>,
    points: Option<PointStyle>,
    captions: Option<CaptionStyle>,
}

impl StyleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(mut self, width: f64, color: Color) -> Self {
        self.segments = Some(SegmentStyle::new(width, color));
        self
    }

    pub fn points(mut self, width: f64, color: Color) -> Self {
        self.points = Some(PointStyle::new(width, color));
        self
    }

    pub fn captions(mut self, font: impl Into<String>, color: Color) -> Self {
        self.captions = Some(CaptionStyle::new(font, color));
        self
    }

    /// Caption texts, one per vertex in vertex order. Only meaningful after
    /// `captions` has set the group.
    pub fn texts(mut self, texts: &[&str]) -> Self {
        if let Some(captions) = self.captions.as_mut() {
            captions.texts = texts.iter().map(|t| t.to_string()).collect();
        }
        self
    }

    /// Finish the style, failing on the first missing group.
    pub fn build(self) -> Result<Style, SceneError> {
        let segments = self
            .segments
            .ok_or(SceneError::IncompleteStyle("segments"))?;
        let points = self.points.ok_or(SceneError::IncompleteStyle("points"))?;
        let captions = self
            .captions
            .ok_or(SceneError::IncompleteStyle("captions"))?;
        Ok(Style {
            segments,
            points,
            captions,
        })
    }
}
