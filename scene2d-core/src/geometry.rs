/// Geometry primitives for 2D rendering
use crate::color::Color;

/// A point in the plane
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A line segment between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
}

impl Segment {
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }
}

/// Segments derived from an object's edges, with their stroke styling
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentSet {
    pub coords: Vec<Segment>,
    pub width: f64,
    pub color: Color,
}

/// Vertex positions of an object, with their marker styling
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    pub coords: Vec<Point>,
    pub width: f64,
    pub color: Color,
}

/// Vertex captions paired with their anchor positions
///
/// `texts` never outnumbers `coords`; vertices beyond the text list simply
/// carry no caption.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionSet {
    pub coords: Vec<Point>,
    pub texts: Vec<String>,
    pub font: String,
    pub color: Color,
}
