use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Relative tolerance for [`is_collinear`], scaled by the squared triangle size.
pub const COLLINEAR_EPS: f64 = 1e-12;

/// Centroid of a detected marking, in image pixels (y grows downward).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpotPoint {
    pub x: f64,
    pub y: f64,
}

impl SpotPoint {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn to_point2(self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }
}

impl From<Point2<f64>> for SpotPoint {
    fn from(p: Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<SpotPoint> for Point2<f64> {
    fn from(p: SpotPoint) -> Self {
        p.to_point2()
    }
}

impl From<(f64, f64)> for SpotPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// True if `a`, `b`, `c` do not span a triangle usable as an affine basis.
///
/// Coincident points and non-finite coordinates count as collinear.
pub fn is_collinear(a: SpotPoint, b: SpotPoint, c: SpotPoint) -> bool {
    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        return true;
    }
    let ab: Vector2<f64> = b.to_point2() - a.to_point2();
    let ac: Vector2<f64> = c.to_point2() - a.to_point2();
    let cross = ab.perp(&ac);
    let scale = ab.norm_squared().max(ac.norm_squared());
    if scale == 0.0 {
        return true;
    }
    cross.abs() <= COLLINEAR_EPS * scale
}
