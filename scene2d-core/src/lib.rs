/// Scene2D Core Library - planar objects, affine transforms, and scene
/// orchestration
///
/// This library provides the stateless core of the 2D renderer: objects as
/// homogeneous vertex matrices with edges and styling, composable affine
/// transformations, the scene that maps world coordinates onto a draw
/// surface, and a text format for shape geometry.

pub mod color;
pub mod error;
pub mod geometry;
pub mod object;
pub mod scene;
pub mod shape;
pub mod style;
pub mod surface;
pub mod transform;

#[cfg(test)]
pub mod test_helpers;

// Re-export commonly used types
pub use color::Color;
pub use error::SceneError;
pub use geometry::{CaptionSet, Point, PointSet, Segment, SegmentSet};
pub use object::Object2d;
pub use scene::Scene2d;
pub use shape::{parse_shape, ShapeData};
pub use style::{CaptionStyle, PointStyle, SegmentStyle, Style, StyleBuilder};
pub use surface::DrawSurface;
pub use transform::{Pose, Transform2d};
