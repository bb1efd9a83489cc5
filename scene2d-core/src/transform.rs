/// 2D affine transformation algebra and placement state
use nalgebra::DMatrix;

use crate::geometry::Point;

const IDENTITY: [[f64; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// A chain of elementary 2D transformations combined into one homogeneous
/// 3x3 matrix.
///
/// Every composition call right-multiplies the accumulated matrix by a
/// freshly built elementary matrix, so steps apply in call order under the
/// row-vector convention `point' = point * M`. A transform is an
/// independent value: it is not tied to any object and may be applied to
/// many.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform2d {
    mx: DMatrix<f64>,
}

impl Transform2d {
    pub fn new() -> Self {
        Self {
            mx: DMatrix::identity(3, 3),
        }
    }

    /// A copy of the combined transformation matrix.
    pub fn matrix(&self) -> DMatrix<f64> {
        self.mx.clone()
    }

    /// The matrix elements as row-major nested arrays.
    pub fn elements(&self) -> Vec<Vec<f64>> {
        self.mx
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }

    fn push(&mut self, elem: [[f64; 3]; 3]) {
        let m = DMatrix::from_fn(3, 3, |r, c| elem[r][c]);
        self.mx = &self.mx * &m;
    }

    /// Shear along `axis` ("x" or "y", case-insensitive) by factor `v`.
    ///
    /// An unknown axis or a NaN factor contributes an identity multiply, so
    /// a malformed step never aborts the chain.
    pub fn shear(&mut self, axis: &str, v: f64) {
        let elem = if v.is_nan() {
            IDENTITY
        } else {
            match axis.to_ascii_lowercase().as_str() {
                "x" => [[1.0, 0.0, 0.0], [v, 1.0, 0.0], [0.0, 0.0, 1.0]],
                "y" => [[1.0, v, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
                _ => IDENTITY,
            }
        };
        self.push(elem);
    }

    /// Translate along `axis` ("x" or "y", case-insensitive) by `v`.
    ///
    /// Same identity fallback as [`shear`](Self::shear).
    pub fn translate(&mut self, axis: &str, v: f64) {
        let elem = if v.is_nan() {
            IDENTITY
        } else {
            match axis.to_ascii_lowercase().as_str() {
                "x" => [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [v, 0.0, 1.0]],
                "y" => [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, v, 1.0]],
                _ => IDENTITY,
            }
        };
        self.push(elem);
    }

    /// Scale along `axis`: "x", "y", or "s" for the homogeneous component
    /// (a uniform zoom by `1/v` once coordinates are renormalized).
    ///
    /// Same identity fallback as [`shear`](Self::shear).
    pub fn scale(&mut self, axis: &str, v: f64) {
        let elem = if v.is_nan() {
            IDENTITY
        } else {
            match axis.to_ascii_lowercase().as_str() {
                "x" => [[v, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
                "y" => [[1.0, 0.0, 0.0], [0.0, v, 0.0], [0.0, 0.0, 1.0]],
                "s" => [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, v]],
                _ => IDENTITY,
            }
        };
        self.push(elem);
    }

    /// Rotate about the origin by `angle` in degrees.
    ///
    /// A NaN angle contributes an identity multiply.
    pub fn rotate(&mut self, angle: f64) {
        let elem = if angle.is_nan() {
            IDENTITY
        } else {
            let a = angle.to_radians();
            [
                [a.cos(), a.sin(), 0.0],
                [-a.sin(), a.cos(), 0.0],
                [0.0, 0.0, 1.0],
            ]
        };
        self.push(elem);
    }

    /// Rotate by `angle` degrees about an arbitrary point, composed as
    /// translate(-center), rotate, translate(+center) on this same chain.
    ///
    /// Unlike the other operations a NaN angle defaults to 0 degrees; the
    /// translation pair applies either way.
    pub fn rotate_about(&mut self, center: Point, angle: f64) {
        let angle = if angle.is_nan() { 0.0 } else { angle };

        self.translate("x", -center.x);
        self.translate("y", -center.y);
        self.rotate(angle);
        self.translate("x", center.x);
        self.translate("y", center.y);
    }
}

impl Default for Transform2d {
    fn default() -> Self {
        Self::new()
    }
}

/// Accumulated placement for interactive rendering: an offset in world
/// units, a rotation angle in degrees, and a zoom factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
    pub zoom: f64,
}

impl Pose {
    pub fn new(x: f64, y: f64, angle: f64, zoom: f64) -> Self {
        Self { x, y, angle, zoom }
    }

    pub fn identity() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            angle: 0.0,
            zoom: 1.0,
        }
    }

    /// Shift the placement by delta amounts (in world units).
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Turn the placement by a delta angle (in degrees).
    pub fn rotate(&mut self, da: f64) {
        self.angle += da;
    }

    /// Multiply the zoom factor.
    pub fn zoom_by(&mut self, factor: f64) {
        self.zoom *= factor;
    }

    /// Build the model transform for this placement: rotate about the
    /// origin, zoom, then move into place.
    pub fn to_transform(&self) -> Transform2d {
        let mut t = Transform2d::new();
        t.rotate(self.angle);
        t.scale("x", self.zoom);
        t.scale("y", self.zoom);
        t.translate("x", self.x);
        t.translate("y", self.y);
        t
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}
