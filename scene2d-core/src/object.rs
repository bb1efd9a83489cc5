/// Planar objects: a homogeneous vertex matrix, an edge list, and styling
use nalgebra::DMatrix;

use crate::error::SceneError;
use crate::geometry::{CaptionSet, Point, PointSet, Segment, SegmentSet};
use crate::style::Style;
use crate::transform::Transform2d;

/// A drawable object in the plane.
///
/// Vertices are rows of an Nx3 matrix in homogeneous form (x, y, 1); edges
/// are rows of an Mx2 matrix of vertex indices. Edges and style are fixed
/// at construction; only [`apply_transformation`](Self::apply_transformation)
/// replaces the vertex matrix. Cloning copies the current vertex values, so
/// a clone can be transformed freely without touching the original.
#[derive(Debug, Clone, PartialEq)]
pub struct Object2d {
    vertices: DMatrix<f64>,
    edges: DMatrix<usize>,
    style: Style,
}

impl Object2d {
    /// Validates the vertex and edge shapes and every edge index.
    pub fn new(
        vertices: DMatrix<f64>,
        edges: DMatrix<usize>,
        style: Style,
    ) -> Result<Self, SceneError> {
        if vertices.ncols() != 3 {
            return Err(SceneError::InvalidVertexShape(vertices.ncols()));
        }
        if edges.ncols() != 2 {
            return Err(SceneError::InvalidEdgeShape(edges.ncols()));
        }
        for (i, edge) in edges.row_iter().enumerate() {
            for &vertex in edge.iter() {
                if vertex >= vertices.nrows() {
                    return Err(SceneError::EdgeOutOfRange {
                        edge: i,
                        vertex,
                        rows: vertices.nrows(),
                    });
                }
            }
        }
        Ok(Self {
            vertices,
            edges,
            style,
        })
    }

    /// An axis-aligned square centered on the origin, for demos and tests.
    pub fn square(size: f64, style: Style) -> Self {
        let half = size / 2.0;
        let vertices = DMatrix::from_row_slice(
            4,
            3,
            &[
                -half, -half, 1.0, //
                half, -half, 1.0, //
                half, half, 1.0, //
                -half, half, 1.0,
            ],
        );
        let edges = DMatrix::from_row_slice(4, 2, &[0, 1, 1, 2, 2, 3, 3, 0]);
        Self {
            vertices,
            edges,
            style,
        }
    }

    pub fn vertices(&self) -> &DMatrix<f64> {
        &self.vertices
    }

    pub fn edges(&self) -> &DMatrix<usize> {
        &self.edges
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Multiply the vertex matrix by the transform's matrix and renormalize
    /// the homogeneous column.
    pub fn apply_transformation(&mut self, t: &Transform2d) {
        let m = t.matrix();
        self.vertices = normalize_rows(&self.vertices * &m);
    }

    /// The object's edges as point pairs, with segment styling.
    pub fn segments(&self) -> SegmentSet {
        let coords = self
            .edges
            .row_iter()
            .map(|edge| {
                let (i, j) = (edge[0], edge[1]);
                Segment::new(self.vertex_point(i), self.vertex_point(j))
            })
            .collect();
        SegmentSet {
            coords,
            width: self.style.segments.width,
            color: self.style.segments.color,
        }
    }

    /// The object's vertices as plain points, with marker styling.
    pub fn points(&self) -> PointSet {
        let coords = (0..self.vertices.nrows())
            .map(|i| self.vertex_point(i))
            .collect();
        PointSet {
            coords,
            width: self.style.points.width,
            color: self.style.points.color,
        }
    }

    /// Vertex captions paired with their anchor points.
    ///
    /// Texts are truncated to the vertex count; vertices beyond the text
    /// list carry no caption.
    pub fn captions(&self) -> CaptionSet {
        let coords = self.points().coords;
        let texts = self
            .style
            .captions
            .texts
            .iter()
            .take(coords.len())
            .cloned()
            .collect();
        CaptionSet {
            coords,
            texts,
            font: self.style.captions.font.clone(),
            color: self.style.captions.color,
        }
    }

    /// Row `i` of the vertex matrix with the homogeneous coordinate dropped.
    fn vertex_point(&self, i: usize) -> Point {
        Point::new(self.vertices[(i, 0)], self.vertices[(i, 1)])
    }
}

/// Divide each row by its homogeneous component when it is not already 1.
fn normalize_rows(mut m: DMatrix<f64>) -> DMatrix<f64> {
    for i in 0..m.nrows() {
        let w = m[(i, 2)];
        if w != 1.0 {
            for c in 0..3 {
                m[(i, c)] /= w;
            }
        }
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{basic_style, captioned_style, unit_square};

    #[test]
    fn test_construction_counts() {
        let obj = unit_square();
        assert_eq!(obj.points().coords.len(), 4);
        assert_eq!(obj.segments().coords.len(), 4);
    }

    #[test]
    fn test_vertex_matrix_needs_three_columns() {
        let vertices = DMatrix::from_row_slice(2, 4, &[0.0; 8]);
        let edges = DMatrix::from_row_slice(1, 2, &[0, 1]);
        let err = Object2d::new(vertices, edges, basic_style()).unwrap_err();
        assert_eq!(err, SceneError::InvalidVertexShape(4));
    }

    #[test]
    fn test_edge_matrix_needs_two_columns() {
        let vertices = DMatrix::from_row_slice(2, 3, &[0.0, 0.0, 1.0, 1.0, 0.0, 1.0]);
        let edges = DMatrix::from_row_slice(2, 1, &[0, 1]);
        let err = Object2d::new(vertices, edges, basic_style()).unwrap_err();
        assert_eq!(err, SceneError::InvalidEdgeShape(1));
    }

    #[test]
    fn test_edge_index_must_reference_a_vertex() {
        let vertices = DMatrix::from_row_slice(2, 3, &[0.0, 0.0, 1.0, 1.0, 0.0, 1.0]);
        let edges = DMatrix::from_row_slice(1, 2, &[0, 5]);
        let err = Object2d::new(vertices, edges, basic_style()).unwrap_err();
        assert_eq!(
            err,
            SceneError::EdgeOutOfRange {
                edge: 0,
                vertex: 5,
                rows: 2
            }
        );
    }

    #[test]
    fn test_identity_transform_leaves_vertices_unchanged() {
        let mut obj = unit_square();
        let before = obj.vertices().clone();
        obj.apply_transformation(&Transform2d::new());
        assert_eq!(obj.vertices(), &before);
    }

    #[test]
    fn test_transforming_a_clone_leaves_the_original() {
        let original = unit_square();
        let before = original.vertices().clone();

        let mut copy = original.clone();
        let mut t = Transform2d::new();
        t.translate("x", 10.0);
        t.rotate(45.0);
        copy.apply_transformation(&t);

        assert_eq!(original.vertices(), &before);
        assert_ne!(copy.vertices(), original.vertices());
    }

    #[test]
    fn test_segments_follow_edge_indices() {
        let vertices =
            DMatrix::from_row_slice(3, 3, &[0.0, 0.0, 1.0, 4.0, 0.0, 1.0, 4.0, 3.0, 1.0]);
        let edges = DMatrix::from_row_slice(2, 2, &[0, 1, 1, 2]);
        let obj = Object2d::new(vertices, edges, basic_style()).unwrap();

        let segments = obj.segments();
        assert_eq!(segments.coords[0].p1, Point::new(0.0, 0.0));
        assert_eq!(segments.coords[0].p2, Point::new(4.0, 0.0));
        assert_eq!(segments.coords[1].p2, Point::new(4.0, 3.0));
    }

    #[test]
    fn test_captions_truncate_to_vertex_count() {
        let obj = Object2d::square(2.0, captioned_style(&["A", "B"]));
        let captions = obj.captions();
        assert_eq!(captions.coords.len(), 4);
        assert_eq!(captions.texts, vec!["A", "B"]);

        let obj = Object2d::square(2.0, captioned_style(&["A", "B", "C", "D", "E", "F"]));
        assert_eq!(obj.captions().texts.len(), 4);
    }

    #[test]
    fn test_homogeneous_scale_renormalizes() {
        let mut obj = unit_square();
        let mut t = Transform2d::new();
        t.scale("s", 0.5);
        obj.apply_transformation(&t);

        // A uniform zoom by 2 once rows are renormalized.
        assert!((obj.vertices()[(1, 0)] - 1.0).abs() < 1e-9);
        assert!((obj.vertices()[(1, 2)] - 1.0).abs() < 1e-9);
    }
}
